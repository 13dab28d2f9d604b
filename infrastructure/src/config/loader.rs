//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fmt;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ai-panel";
const PROJECT_FILES: [&str; 2] = ["panel.toml", ".panel.toml"];
const ENV_PREFIX: &str = "AI_PANEL_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `AI_PANEL_*` environment variables, e.g. `AI_PANEL_MODEL__NAME`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./panel.toml` or `./.panel.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/ai-panel/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load defaults overlaid with a single file, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ai-panel/config.toml if set,
    /// otherwise falls back to ~/.config/ai-panel/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every place a setting can come from, strongest first (for --show-config)
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<ConfigSource> {
        let mut sources = vec![ConfigSource {
            kind: "env",
            location: format!("{}* variables", ENV_PREFIX),
            present: true,
        }];

        if let Some(path) = config_path {
            sources.push(ConfigSource::file("explicit", path));
        }

        match Self::project_config_path() {
            Some(path) => sources.push(ConfigSource::file("project", &path)),
            None => sources.push(ConfigSource {
                kind: "project",
                location: PROJECT_FILES.join(" or "),
                present: false,
            }),
        }

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource::file("global", &path));
        }

        sources.push(ConfigSource {
            kind: "default",
            location: "built-in defaults".to_string(),
            present: true,
        });
        sources
    }
}

/// One configuration layer and whether it currently contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: &'static str,
    pub location: String,
    pub present: bool,
}

impl ConfigSource {
    fn file(kind: &'static str, path: &Path) -> Self {
        Self {
            kind,
            location: path.display().to_string(),
            present: path.exists(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.present { "x" } else { " " };
        write!(f, "[{}] {:<8} {}", mark, self.kind, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.actors.is_empty());
        assert_eq!(config.discussion.max_rounds, 10);
    }

    #[test]
    fn test_global_path_is_under_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("ai-panel/config.toml"));
        }
    }

    #[test]
    fn test_config_sources_order_and_presence() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let sources = ConfigLoader::config_sources(Some(&missing));
        let kinds: Vec<_> = sources.iter().map(|s| s.kind).collect();

        assert_eq!(kinds.first(), Some(&"env"));
        assert_eq!(kinds.get(1), Some(&"explicit"));
        assert_eq!(kinds.last(), Some(&"default"));
        assert!(!sources[1].present);
        assert!(sources[1].to_string().starts_with("[ ] explicit"));
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(
            &path,
            r#"
[model]
name = "phi3"

[discussion]
max_rounds = 5
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.model.name, "phi3");
        assert_eq!(config.discussion.max_rounds, 5);
        // Untouched keys keep their defaults
        assert_eq!(config.discussion.brief_threshold, 10);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_file_reports_type_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(&path, "[discussion]\nmax_rounds = \"many\"\n").unwrap();

        assert!(ConfigLoader::load_file(&path).is_err());
    }
}
