use serde::{Deserialize, Serialize};

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// Deepest schema nesting (sub-schemas and `$ref` hops) followed before
    /// validation gives up with `Error::RecursionLimit`.
    pub max_depth: usize,
    /// Keep compiled `pattern` / `patternProperties` expressions between
    /// calls.
    pub cache_patterns: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            cache_patterns: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_take_defaults() {
        let opts: ValidatorOptions = serde_json::from_value(json!({"maxDepth": 8})).unwrap();
        assert_eq!(opts.max_depth, 8);
        assert!(opts.cache_patterns);
        let opts: ValidatorOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(opts, ValidatorOptions::default());
    }
}
