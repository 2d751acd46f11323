#![allow(dead_code)]

use codefiscal::{
    catalog::Catalog,
    models::{ArticleVersion, CodeSection, SectionType},
};

fn article(id: i64, code: &str, title: &str, content: &str, breadcrumb: &str) -> CodeSection {
    CodeSection {
        id,
        parent_id: Some(100),
        kind: SectionType::Article,
        code: code.to_string(),
        title: title.to_string(),
        content: Some(content.to_string()),
        page_number_start: None,
        page_number_end: None,
        version_date: Some("2024-01-01".to_string()),
        breadcrumb: Some(breadcrumb.to_string()),
    }
}

pub const DONS: &str = "1. Ouvrent droit à une réduction d'impôt sur le revenu égale à 66 % de leur montant les sommes prises dans la limite de 20 % du revenu imposable qui correspondent à des dons et versements effectués par les contribuables domiciliés en France.";

pub const DOMICILE: &str = "1. Sont considérées comme ayant leur domicile fiscal en France : a. Les personnes qui ont en France leur foyer ou le lieu de leur séjour principal ; b. Celles qui exercent en France une activité professionnelle, salariée ou non, à moins qu'elles ne justifient que cette activité y est exercée à titre accessoire ; c. Celles qui ont en France le centre de leurs intérêts économiques.";

pub const TVA: &str = "I. Sont soumises à la taxe sur la valeur ajoutée les livraisons de biens et les prestations de services effectuées à titre onéreux par un assujetti agissant en tant que tel. II. 1° Est considéré comme livraison d'un bien, le transfert du pouvoir de disposer d'un bien corporel comme un propriétaire.";

pub fn sample_catalog() -> Catalog {
    let mut livre = article(100, "LIVRE PREMIER", "Assiette et liquidation de l'impôt", "", "Livre premier");
    livre.kind = SectionType::Livre;
    livre.parent_id = None;
    livre.content = None;
    Catalog {
        sections: vec![
            livre,
            article(
                1,
                "ART. 197",
                "Barème de l'impôt sur le revenu",
                "I. En ce qui concerne les contribuables visés à l'article 4 B, il est fait application du tarif progressif ci-après.",
                "Livre premier > Impôt sur le revenu > Art. 197",
            ),
            article(2, "ART. 200", "Réduction d'impôt accordée au titre des dons", DONS, "Livre premier > Impôt sur le revenu > Art. 200"),
            article(4, "ART. 4 B", "Domicile fiscal en France", DOMICILE, "Livre premier > Impôt sur le revenu > Art. 4 B"),
            article(5, "ART. 256", "Opérations imposables à la TVA", TVA, "Livre premier > Taxes sur le chiffre d'affaires > Art. 256"),
            article(
                7,
                "ART. 1649 A",
                "Déclaration des comptes ouverts à l'étranger",
                "Les personnes physiques, les associations, les sociétés n'ayant pas la forme commerciale, domiciliées ou établies en France, sont tenues de déclarer les références des comptes ouverts à l'étranger.",
                "Livre second > Contrôle de l'impôt > Art. 1649 A",
            ),
            article(
                8,
                "ANNEXE II ART. 2",
                "Opérations réalisées en France",
                "Les dispositions de l'article 256 s'appliquent aux opérations réalisées en France par un assujetti.",
                "Annexes > Annexe II > Art. 2",
            ),
        ],
        versions: vec![
            ArticleVersion { id: 10, article_id: 5, version_content: "Ancienne rédaction relative à la TVA.".into(), effective_date: "2019-01-01".into() },
            ArticleVersion { id: 11, article_id: 5, version_content: "Rédaction intermédiaire sur la tva.".into(), effective_date: "2022-06-15".into() },
            ArticleVersion { id: 12, article_id: 2, version_content: "Dons.".into(), effective_date: "2020-01-01".into() },
        ],
    }
}
