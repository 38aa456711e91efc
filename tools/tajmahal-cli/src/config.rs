//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tajmahal_reviews::Reviewer;

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["tajmahal.toml", ".tajmahal.toml", "tajmahal.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Identity attached to submitted reviews.
    #[serde(default)]
    pub reviewer: ReviewerConfig,

    /// Where seed data comes from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The configured reviewer identity.
    pub fn reviewer(&self) -> Reviewer {
        Reviewer::new(
            self.reviewer.username.clone(),
            self.reviewer.avatar().map(str::to_string),
        )
    }
}

/// Reviewer identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerConfig {
    /// Display name.
    #[serde(default = "default_username")]
    pub username: String,

    /// Avatar identifier or URI.
    ///
    /// A missing key falls back to the default avatar. TOML has no null, so
    /// `picture = ""` is how a file says "no avatar".
    #[serde(default = "default_picture")]
    pub picture: Option<String>,
}

impl ReviewerConfig {
    /// The avatar, with an empty string read as none.
    pub fn avatar(&self) -> Option<&str> {
        self.picture.as_deref().filter(|p| !p.is_empty())
    }
}

fn default_username() -> String {
    "Manon Garcia".to_string()
}

fn default_picture() -> Option<String> {
    Some("profile_picture".to_string())
}

impl Default for ReviewerConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            picture: default_picture(),
        }
    }
}

/// Seed source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Seed file (JSON or TOML). Built-in data when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum reviews listed, 0 for all.
    #[serde(default)]
    pub review_limit: usize,

    /// Print avatar references next to reviewer names.
    #[serde(default)]
    pub show_pictures: bool,
}

/// Generate a default tajmahal.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Taj Mahal review configuration

[reviewer]
username = "{username}"
# Set to "" for no avatar.
picture = "profile_picture"

[source]
# seed = "reviews.toml"

[display]
review_limit = 0
show_pictures = false
"#,
        username = default_username()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.reviewer.username, "Manon Garcia");
        assert_eq!(config.reviewer.picture.as_deref(), Some("profile_picture"));
        assert!(config.source.seed.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config: CliConfig = toml::from_str(
            r#"
[reviewer]
username = "Asha"

[display]
review_limit = 3
"#,
        )
        .unwrap();

        assert_eq!(config.reviewer.username, "Asha");
        assert_eq!(config.reviewer.picture.as_deref(), Some("profile_picture"));
        assert_eq!(config.display.review_limit, 3);
        assert!(!config.display.show_pictures);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.source.seed = Some("seed.json".into());
        config.display.show_pictures = true;

        for name in ["tajmahal.toml", "tajmahal.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            config.save(path).unwrap();
            assert_eq!(CliConfig::load(path).unwrap(), config);
        }
    }

    #[test]
    fn test_reviewer_identity() {
        let reviewer = CliConfig::default().reviewer();
        assert_eq!(reviewer.username, "Manon Garcia");
        assert_eq!(reviewer.picture.as_deref(), Some("profile_picture"));
    }

    #[test]
    fn test_empty_picture_means_no_avatar() {
        let config: CliConfig = toml::from_str("[reviewer]\npicture = \"\"\n").unwrap();
        assert_eq!(config.reviewer.avatar(), None);
        assert_eq!(config.reviewer().picture, None);

        let config: CliConfig = serde_json::from_str(r#"{"reviewer": {"picture": null}}"#).unwrap();
        assert_eq!(config.reviewer().picture, None);
    }
}
