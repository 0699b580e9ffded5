//! Layered configuration loading
//!
//! Settings come from a small figment stack: built-in defaults at the
//! bottom, then the per-user config file, then a config file in the
//! working directory, then an explicit `--config` path on top. Later
//! sources win per key, so a project file only needs the keys it
//! changes.

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// File names looked up in the working directory, first hit wins.
const PROJECT_FILE_NAMES: [&str; 2] = ["council.toml", ".council.toml"];

pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge every discovered source into a [`FileConfig`].
    ///
    /// `explicit` is the `--config` argument; it merges last and beats
    /// both the user-level and project-level files.
    pub fn load(explicit: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut stack = Figment::from(Serialized::defaults(FileConfig::default()));
        for source in Self::discovered_sources(explicit.map(PathBuf::as_path)) {
            stack = stack.merge(Toml::file(source));
        }
        stack.extract().map_err(Box::new)
    }

    /// Built-in defaults only, for `--no-config`.
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Config files that currently resolve, lowest priority first.
    fn discovered_sources(explicit: Option<&Path>) -> Vec<PathBuf> {
        let user = Self::user_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        let explicit = explicit.map(Path::to_path_buf);
        user.into_iter().chain(project).chain(explicit).collect()
    }

    /// Per-user config location: `<config dir>/llm-council/config.toml`.
    ///
    /// `None` only when the platform exposes no config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("llm-council").join("config.toml"))
    }

    /// First project file present in the working directory, if any.
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILE_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Show each source and whether it currently resolves to a file.
    pub fn print_config_sources() {
        println!("Config sources, lowest priority first:");
        println!("  built-in defaults");

        match Self::user_config_path() {
            Some(path) if path.exists() => println!("  {} (in use)", path.display()),
            Some(path) => println!("  {} (not present)", path.display()),
            None => println!("  no user config directory on this platform"),
        }

        match Self::project_config_path() {
            Some(path) => println!("  ./{} (in use)", path.display()),
            None => println!(
                "  ./{} or ./{} (not present)",
                PROJECT_FILE_NAMES[0], PROJECT_FILE_NAMES[1]
            ),
        }

        println!("  --config <path>, when passed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_user_config_path_under_app_dir() {
        let path = ConfigLoader::user_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("llm-council"));
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            base_url = "http://pc2:5000"
            health_interval_secs = 10
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.server.base_url, "http://pc2:5000");
        assert_eq!(config.server.health_interval_secs, 10);
    }

    #[test]
    fn test_explicit_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://pc2:5000\"\n").unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.server.base_url, "http://pc2:5000");
        assert_eq!(config.server.health_interval_secs, 30);
    }

    #[test]
    fn test_explicit_source_merges_last() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(&path, "").unwrap();

        let sources = ConfigLoader::discovered_sources(Some(path.as_path()));
        assert_eq!(sources.last(), Some(&path));
    }
}
