use codefiscal::{
    error::{Error, Result},
    recent::{RecentSearch, RecentSearches, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY},
    store::{FileStore, KeyValueStore, MemoryStore},
};

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable { key: key.into(), reason: "disk unplugged".into() })
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable { key: key.into(), reason: "disk unplugged".into() })
    }
}

fn seeded(queries: &[&str]) -> MemoryStore {
    let store = MemoryStore::default();
    let list: Vec<RecentSearch> = queries
        .iter()
        .enumerate()
        .map(|(i, q)| RecentSearch { query: q.to_string(), timestamp: 1_000 - i as i64 })
        .collect();
    store.set_item(RECENT_SEARCHES_KEY, &serde_json::to_string(&list).unwrap()).unwrap();
    store
}

fn queries<S: KeyValueStore>(recent: &RecentSearches<S>) -> Vec<&str> {
    recent.entries().iter().map(|e| e.query.as_str()).collect()
}

#[test]
fn empty_storage_loads_empty_list() {
    let recent = RecentSearches::load(MemoryStore::default());
    assert!(recent.entries().is_empty());
}

#[test]
fn malformed_storage_loads_empty_list() {
    let store = MemoryStore::default();
    store.set_item(RECENT_SEARCHES_KEY, r#"[{"query": 3}]"#).unwrap();
    assert!(RecentSearches::load(store).entries().is_empty());
}

#[test]
fn unreadable_storage_loads_empty_list() {
    assert!(RecentSearches::load(BrokenStore).entries().is_empty());
}

#[test]
fn oversized_storage_is_capped() {
    let recent = RecentSearches::load(seeded(&["a", "b", "c", "d", "e", "f", "g"]));
    assert_eq!(queries(&recent), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn repeated_tva_keeps_five_unique_entries() {
    let mut recent = RecentSearches::load(seeded(&["Article 197", "Impôt sur le revenu", "Crédit d'impôt", "Déclaration fiscale", "Plus-values"]));
    for i in 0..6 {
        recent.record_at("TVA", 2_000 + i);
    }
    assert_eq!(recent.entries().len(), MAX_RECENT_SEARCHES);
    assert_eq!(recent.entries()[0].query, "TVA");
    assert_eq!(recent.entries().iter().filter(|e| e.query == "TVA").count(), 1);
    assert_eq!(queries(&recent)[1..], ["Article 197", "Impôt sur le revenu", "Crédit d'impôt", "Déclaration fiscale"]);
}

#[test]
fn rerecording_updates_timestamp_and_moves_to_front() {
    let mut recent = RecentSearches::load(seeded(&["TVA", "Article 197"]));
    recent.record_at("Article 197", 5_000);
    recent.record_at("TVA", 6_000);
    assert_eq!(recent.entries().len(), 2);
    assert_eq!(recent.entries()[0], RecentSearch { query: "TVA".into(), timestamp: 6_000 });
}

#[test]
fn blank_query_is_ignored() {
    let mut recent = RecentSearches::load(MemoryStore::default());
    assert!(recent.record("   ").is_empty());
    assert!(!recent.apply("", 1));
}

#[test]
fn record_overwrites_storage_with_full_list() {
    let store = MemoryStore::default();
    let mut recent = RecentSearches::load(&store);
    recent.record_at("TVA", 1);
    recent.record_at("Article 4 B", 2);
    let raw = store.get_item(RECENT_SEARCHES_KEY).unwrap().unwrap();
    let stored: Vec<RecentSearch> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, recent.entries());
    assert!(raw.starts_with(r#"[{"query":"Article 4 B","timestamp":2}"#));
}

#[test]
fn write_failure_keeps_memory_list() {
    let mut recent = RecentSearches::load(BrokenStore);
    let list = recent.record_at("TVA", 1).to_vec();
    assert_eq!(list, vec![RecentSearch { query: "TVA".into(), timestamp: 1 }]);
    assert_eq!(recent.entries().len(), 1);
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut recent = RecentSearches::load(FileStore::new(dir.path()));
        recent.record_at("Domicile fiscal", 10);
        recent.record_at("TVA", 20);
    }
    let reloaded = RecentSearches::load(FileStore::new(dir.path()));
    assert_eq!(queries(&reloaded), vec!["TVA", "Domicile fiscal"]);
    assert!(dir.path().join("recentSearches.json").exists());
}

#[test]
fn record_uses_current_time() {
    let mut recent = RecentSearches::load(MemoryStore::default());
    let before = codefiscal::recent::now_timestamp();
    let ts = recent.record("TVA")[0].timestamp;
    assert!(ts >= before && ts <= before + 5);
}
