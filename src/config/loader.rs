//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the data root, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    fs::read_config(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join(".gavel")).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.poll_interval_seconds, 1);
        assert_eq!(config.dispute_log, "disputes.jsonl");
    }

    #[test]
    fn test_load_config_from_partial_file() {
        let temp = TempDir::new().unwrap();
        let gavel_dir = temp.path().join(".gavel");
        std_fs::create_dir(&gavel_dir).unwrap();

        let config_content = r#"{
            "poll_interval_seconds": 5
        }"#;
        std_fs::write(gavel_dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.poll_interval_seconds, 5);
        // Default for unspecified field
        assert_eq!(config.dispute_log, "disputes.jsonl");
    }
}
