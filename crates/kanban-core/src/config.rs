//! Board Configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::drag::{CommitPolicy, DragPolicies};
use crate::error::{BoardError, BoardResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for auto-generated column titles ("Column 3")
    pub column_title_prefix: String,
    /// Prefix for auto-generated task contents ("Task 5")
    pub task_content_prefix: String,
    /// Pointer travel in pixels before a mousedown becomes a drag
    pub activation_distance_px: i32,
    pub column_commit: CommitPolicy,
    pub task_commit: CommitPolicy,
    /// Minimum level for the logger ("trace" .. "error")
    pub log_level: String,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let policies = DragPolicies::default();
        Self {
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            activation_distance_px: 3,
            column_commit: policies.column,
            task_commit: policies.task,
            log_level: "info".to_string(),
            log_capacity: 500,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BoardResult<()> {
        if self.activation_distance_px < 0 {
            return Err(BoardError::InvalidConfig(format!(
                "activation_distance_px must not be negative, got {}",
                self.activation_distance_px
            )));
        }
        if self.log_capacity == 0 {
            return Err(BoardError::InvalidConfig("log_capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn drag_policies(&self) -> DragPolicies {
        DragPolicies {
            column: self.column_commit,
            task: self.task_commit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.column_commit, CommitPolicy::OnRelease);
        assert_eq!(config.task_commit, CommitPolicy::Live);
        assert_eq!(config.activation_distance_px, 3);
    }

    #[test]
    fn test_partial_config_overrides_only_given_fields() {
        let config = BoardConfig::from_json(
            r#"{"column_title_prefix": "Lane", "column_commit": "live"}"#,
        )
        .unwrap();
        assert_eq!(config.column_title_prefix, "Lane");
        assert_eq!(config.column_commit, CommitPolicy::Live);
        assert_eq!(config.task_content_prefix, "Task");
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let err = BoardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(_)));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = BoardConfig::from_json(r#"{"activation_distance_px": -1}"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(_)));
    }
}
