use serde::Deserialize;

/// A file the user picked for import, as handed over by the surface.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// Success body of the import endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportOutcome {
    pub message: String,
    #[serde(default)]
    pub imported_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_outcome_parses_count() {
        let raw = r#"{"message":"Successfully imported 3 images","imported_count":3}"#;
        let outcome: ImportOutcome = serde_json::from_str(raw).expect("parse");
        assert_eq!(outcome.imported_count, 3);
    }

    #[test]
    fn import_outcome_tolerates_missing_count() {
        let raw = r#"{"message":"ok"}"#;
        let outcome: ImportOutcome = serde_json::from_str(raw).expect("parse");
        assert_eq!(outcome.imported_count, 0);
    }
}
