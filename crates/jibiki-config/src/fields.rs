use serde::{Deserialize, Serialize};

/// Which note fields hold lookup words and which receive the generated
/// definitions, paired by position.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub dic_src_fields: Vec<String>,
    pub def_fields: Vec<String>,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dic_src_fields: vec!["Expression".to_string()],
            def_fields: vec!["Meaning".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pair_expression_with_meaning() {
        let config = FieldConfig::new();
        assert_eq!(config.dic_src_fields, vec!["Expression"]);
        assert_eq!(config.def_fields, vec!["Meaning"]);
    }
}
