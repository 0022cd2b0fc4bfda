//! Tests for part catalog validation and ordering

#[cfg(test)]
mod tests {
    use sheetcut::SheetError;
    use sheetcut::layout::PartCatalog;

    // Tests catalog preserves top-to-bottom order
    // Verified by sorting names on construction
    #[test]
    fn test_catalog_preserves_order() {
        let catalog = PartCatalog::new(["tip", "blade", "end"]).unwrap();

        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["tip", "blade", "end"]);
        assert_eq!(catalog.get(0), Some("tip"));
        assert_eq!(catalog.get(2), Some("end"));
        assert_eq!(catalog.get(3), None);
        assert_eq!(catalog.position("blade"), Some(1));
        assert_eq!(catalog.position("hilt"), None);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    // Tests empty catalogs are rejected
    // Verified by allowing empty part lists
    #[test]
    fn test_catalog_rejects_empty() {
        let result = PartCatalog::new(Vec::<String>::new());
        assert!(matches!(
            result,
            Err(SheetError::InvalidParameter {
                parameter: "parts",
                ..
            })
        ));
    }

    // Tests duplicate names are rejected
    // Verified by removing uniqueness check
    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = PartCatalog::new(["hilt", "blade", "hilt"]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("hilt"));
        assert!(message.contains("unique"));
    }

    // Tests names that are not a single directory component are rejected
    // Verified by removing separator check
    #[test]
    fn test_catalog_rejects_unsafe_names() {
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(
                PartCatalog::new([bad]).is_err(),
                "Part name {bad:?} should be rejected"
            );
        }
    }

    // Tests default catalog matches the sword parts
    // Verified by changing default part list
    #[test]
    fn test_default_catalog() {
        let catalog = PartCatalog::default();
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            vec!["end", "handle", "hilt", "blade", "tip"]
        );
    }
}
