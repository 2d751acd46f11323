/// Breadcrumbs come as `"Livre I > Titre II > Art. 4"`; result rows show the path without the
/// article itself.
pub fn trim_breadcrumb(path: Option<&str>) -> String {
    let path = path.unwrap_or("");
    match path.rsplit_once('>') {
        Some((parents, _)) => parents.trim().to_string(),
        None => path.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_last_element() {
        assert_eq!(trim_breadcrumb(Some("Livre I > Titre II > Art. 4")), "Livre I > Titre II");
    }

    #[test]
    fn single_element_is_kept() {
        assert_eq!(trim_breadcrumb(Some(" Livre premier ")), "Livre premier");
    }

    #[test]
    fn missing_is_empty() {
        assert_eq!(trim_breadcrumb(None), "");
        assert_eq!(trim_breadcrumb(Some("Art. 1 >")), "Art. 1");
    }
}
