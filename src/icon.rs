use std::fs;
use std::path::{Path, PathBuf};

use iconsetgen_core::{IconsetError, Result};

// Shield with a key on a dark rounded square, drawn on a 512 unit canvas.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#1a1a2e"/>
      <stop offset="100%" stop-color="#16213e"/>
    </linearGradient>
    <linearGradient id="shield" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#00d4ff"/>
      <stop offset="100%" stop-color="#0099cc"/>
    </linearGradient>
    <linearGradient id="key" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#ffd700"/>
      <stop offset="100%" stop-color="#ffaa00"/>
    </linearGradient>
  </defs>
  <rect x="20" y="20" width="472" height="472" rx="90" fill="url(#bg)"/>
  <path d="M256 80 L400 130 L400 280 C400 380 256 440 256 440 C256 440 112 380 112 280 L112 130 Z" 
        fill="none" stroke="url(#shield)" stroke-width="20" stroke-linejoin="round"/>
  <g transform="translate(256, 260) rotate(-45)">
    <circle cx="-60" cy="0" r="50" fill="url(#key)"/>
    <circle cx="-60" cy="0" r="20" fill="url(#bg)"/>
    <rect x="-20" y="-12" width="120" height="24" rx="8" fill="url(#key)"/>
    <rect x="70" y="-12" width="12" height="35" rx="3" fill="url(#key)"/>
    <rect x="90" y="-12" width="12" height="25" rx="3" fill="url(#key)"/>
  </g>
  <circle cx="256" cy="160" r="25" fill="url(#shield)"/>
  <rect x="244" y="155" width="24" height="20" rx="3" fill="url(#bg)"/>
  <path d="M250 155 L250 145 A12 12 0 0 1 262 145 L262 155" fill="none" stroke="url(#bg)" stroke-width="4"/>
</svg>"##;

pub const DEFAULT_SVG_NAME: &str = "enclave_icon.svg";

pub fn default_svg_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_SVG_NAME)
}

/// Writes the icon source to `path`, overwriting whatever is there.
pub fn write_svg_source(path: &Path) -> Result<()> {
    fs::write(path, ICON_SVG).map_err(|source| IconsetError::WriteSource {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = ICON_SVG.len(), "wrote vector source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_svg_source_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(&path, "old contents that are longer than nothing").unwrap();
        write_svg_source(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, ICON_SVG);
        assert!(written.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 512 512\">"
        ));
        assert!(written.ends_with("</svg>"));
    }

    #[test]
    fn test_write_svg_source_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.svg");
        match write_svg_source(&path) {
            Err(IconsetError::WriteSource { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
