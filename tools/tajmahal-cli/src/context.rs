//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tajmahal_reviews::{FakeReviewSource, FileReviewSource, ReviewSource, ReviewStore};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree. The first file found must parse.
    fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// The configured seed source.
    pub fn source(&self) -> Result<Box<dyn ReviewSource>> {
        match self.config.source.seed {
            Some(ref seed) => {
                let path = self.resolve_path(seed);
                let source = FileReviewSource::load(&path)
                    .with_context(|| format!("Failed to load seed data: {}", path.display()))?;
                Ok(Box::new(source))
            }
            None => Ok(Box::new(FakeReviewSource)),
        }
    }

    /// A fresh session store seeded from the configured source.
    pub fn session_store(&self) -> Result<ReviewStore> {
        let source = self.source()?;
        Ok(ReviewStore::from_source(source.as_ref()))
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            return PathBuf::from(path);
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
[restaurant]
name = "Seeded"
cuisine = "Indien"
hours = "12h - 14h"
address = "1 rue de Test"
latitude = 48.0
longitude = 2.0
phone_number = "01 00 00 00 00"
website = "http://example.com"

[[reviews]]
username = "Asha"
comment = "Parfait"
rate = 5
"#;

    #[test]
    fn test_defaults_use_built_in_source() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/tmp"),
        };
        assert_eq!(ctx.source().unwrap().restaurant().name, "Taj Mahal");
        assert_eq!(ctx.session_store().unwrap().len(), 5);
    }

    #[test]
    fn test_seed_resolved_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seed.toml"), SEED).unwrap();
        let config_path = dir.path().join("tajmahal.toml");
        std::fs::write(&config_path, "[source]\nseed = \"seed.toml\"\n").unwrap();

        let ctx = Context::load(config_path.to_str(), Output::new(false, true)).unwrap();
        assert_eq!(ctx.config_path.as_deref(), Some(config_path.as_path()));

        let store = ctx.session_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.latest().unwrap().username, "Asha");
    }

    #[test]
    fn test_missing_seed_is_an_error() {
        let ctx = Context {
            config: CliConfig {
                source: crate::config::SourceConfig {
                    seed: Some("missing.toml".into()),
                },
                ..CliConfig::default()
            },
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        };
        assert!(ctx.session_store().is_err());
    }

    #[test]
    fn test_discovered_config_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tajmahal.toml"),
            "[reviewer]\nusername = \"Asha\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.reviewer.username, "Asha");
        assert_eq!(path, dir.path().join("tajmahal.toml"));
    }

    #[test]
    fn test_malformed_discovered_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tajmahal.toml"),
            "[reviewer]\nusername = 42\n",
        )
        .unwrap();

        let err = Context::find_config(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("tajmahal.toml"));
    }

    #[test]
    fn test_absolute_paths_kept() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: Some(PathBuf::from("/etc/tajmahal/tajmahal.toml")),
            output: Output::new(false, true),
            cwd: PathBuf::from("/home/user"),
        };
        assert_eq!(ctx.resolve_path("/data/seed.json"), PathBuf::from("/data/seed.json"));
        assert_eq!(
            ctx.resolve_path("seed.json"),
            PathBuf::from("/etc/tajmahal/seed.json")
        );
    }
}
