use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use iconsetgen_core::{IconsetError, Result};

use crate::icon::default_svg_path;

pub const DEFAULT_ICONSET_DIR: &str = "Assets.xcassets/AppIcon.appiconset";
pub const DEFAULT_CONVERTER: &str = "rsvg-convert";
pub const DEFAULT_INSTALL_HINT: &str = "install librsvg: brew install librsvg";
const CONFIG_FILE_NAME: &str = "iconset.conf";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub iconset_dir: PathBuf,
    pub svg_path: PathBuf,
    /// Converter command line, split on whitespace. Size and path arguments are appended.
    pub converter: String,
    pub install_hint: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iconset_dir: PathBuf::from(DEFAULT_ICONSET_DIR),
            svg_path: default_svg_path(),
            converter: DEFAULT_CONVERTER.to_string(),
            install_hint: DEFAULT_INSTALL_HINT.to_string(),
            log_file: default_log_file(),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "iconsetgen")
}

pub fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(CONFIG_FILE_NAME))
}

fn default_log_file() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_dir().join("iconsetgen.log"))
}

/// Resolves `~/` against the home directory; other paths are taken as given.
pub fn expand_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(base) = directories::BaseDirs::new() {
            return base.home_dir().join(rest);
        }
    }
    PathBuf::from(raw)
}

impl Config {
    /// Applies `key=value` lines on top of the current values.
    pub fn apply_str(&mut self, content: &str) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((k, v)) = line.split_once('=') else {
                continue;
            };
            let v = v.trim();
            match k.trim() {
                "iconset_dir" => self.iconset_dir = expand_path(v),
                "svg_path" => self.svg_path = expand_path(v),
                "converter" => {
                    if !v.is_empty() {
                        self.converter = v.to_string();
                    }
                }
                "install_hint" => self.install_hint = v.to_string(),
                "log_file" => {
                    self.log_file = if v.is_empty() {
                        None
                    } else {
                        Some(expand_path(v))
                    }
                }
                other => tracing::debug!(key = other, "ignoring unknown config key"),
            }
        }
    }
}

/// Loads the config file. An explicit path must be readable; the default
/// location may be absent.
pub fn read_config(explicit: Option<&Path>) -> Result<Config> {
    let mut cfg = Config::default();
    let (path, required) = match explicit {
        Some(p) => (Some(p.to_path_buf()), true),
        None => (config_file_path(), false),
    };
    let Some(path) = path else { return Ok(cfg) };
    match fs::read_to_string(&path) {
        Ok(content) => {
            cfg.apply_str(&content);
            tracing::debug!(path = %path.display(), "loaded config");
        }
        Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(IconsetError::ReadConfig { path, source }),
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(
            cfg.iconset_dir,
            PathBuf::from("Assets.xcassets/AppIcon.appiconset")
        );
        assert_eq!(cfg.converter, "rsvg-convert");
        assert!(cfg.svg_path.ends_with("enclave_icon.svg"));
    }

    #[test]
    fn test_apply_str_overrides_known_keys() {
        let mut cfg = Config::default();
        cfg.apply_str(
            "# local setup\n\
             iconset_dir = /tmp/App.appiconset\n\
             converter=sh ./fake.sh\n\
             bogus=1\n\
             no separator here\n\
             log_file=\n",
        );
        assert_eq!(cfg.iconset_dir, PathBuf::from("/tmp/App.appiconset"));
        assert_eq!(cfg.converter, "sh ./fake.sh");
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.install_hint, DEFAULT_INSTALL_HINT);
    }

    #[test]
    fn test_empty_converter_keeps_default() {
        let mut cfg = Config::default();
        cfg.apply_str("converter=   \n");
        assert_eq!(cfg.converter, DEFAULT_CONVERTER);
    }

    #[test]
    fn test_expand_path_home() {
        let p = expand_path("~/icons/out");
        assert!(p.ends_with("icons/out"));
        assert!(!p.starts_with("~"));
        assert_eq!(expand_path(" rel/dir "), PathBuf::from("rel/dir"));
    }

    #[test]
    fn test_read_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iconset.conf");
        fs::write(&path, "svg_path=/tmp/custom.svg\n").unwrap();
        let cfg = read_config(Some(&path)).unwrap();
        assert_eq!(cfg.svg_path, PathBuf::from("/tmp/custom.svg"));
    }

    #[test]
    fn test_missing_explicit_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.conf");
        let err = read_config(Some(&absent)).unwrap_err();
        assert!(matches!(err, IconsetError::ReadConfig { .. }));
    }
}
