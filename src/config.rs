use serde::{Deserialize, Serialize};

/// Adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Document field the assembled tuning record is persisted under.
    pub persist_field: String,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            persist_field: "tuning".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuningConfig::default();
        assert_eq!(config.persist_field, "tuning");
    }
}
