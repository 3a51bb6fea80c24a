use serde::{Deserialize, Serialize};

/// Positional mapping from dictionary source fields to the definition
/// fields they fill: `src_fields[i]` routes to `def_fields[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    pub src_fields: Vec<String>,
    pub def_fields: Vec<String>,
}

impl FieldMap {
    pub fn new(src_fields: Vec<String>, def_fields: Vec<String>) -> Self {
        Self {
            src_fields,
            def_fields,
        }
    }

    /// Definition field paired with a source field, by position. None when
    /// the source field is unknown or has no paired definition field.
    pub fn dest_for(&self, src: &str) -> Option<&str> {
        let idx = self.src_fields.iter().position(|f| f == src)?;
        self.def_fields.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> FieldMap {
        FieldMap::new(
            vec!["Expression".to_string(), "Vocab".to_string()],
            vec!["Meaning".to_string(), "VocabDef".to_string()],
        )
    }

    #[test]
    fn maps_by_position() {
        let m = map();
        assert_eq!(m.dest_for("Expression"), Some("Meaning"));
        assert_eq!(m.dest_for("Vocab"), Some("VocabDef"));
    }

    #[test]
    fn unknown_source_field_has_no_destination() {
        assert_eq!(map().dest_for("Reading"), None);
    }

    #[test]
    fn unpaired_source_field_has_no_destination() {
        let m = FieldMap::new(vec!["A".to_string(), "B".to_string()], vec!["X".to_string()]);
        assert_eq!(m.dest_for("B"), None);
    }
}
