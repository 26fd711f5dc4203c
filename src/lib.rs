pub mod config;
pub mod icon;
pub mod logger;
pub mod rasterize;

use std::path::PathBuf;

pub use iconsetgen_core::{
    IconsetError, ImageEntry, Info, MAC_ICON_SIZES, Manifest, RasterOutcome, RasterResult, Result,
    SizeSpec, write_manifest,
};

use config::Config;
use rasterize::{CommandRasterizer, Rasterizer};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: Vec<RasterResult>,
    pub manifest_path: PathBuf,
}

impl RunSummary {
    pub fn produced(&self) -> usize {
        self.results.iter().filter(|r| r.is_produced()).count()
    }
}

/// Source, then every size, then the manifest. Per-size failures never abort.
pub fn generate_with(cfg: &Config, rasterizer: &dyn Rasterizer) -> Result<RunSummary> {
    icon::write_svg_source(&cfg.svg_path)?;
    println!("Created SVG at {}", cfg.svg_path.display());

    let results = rasterize::rasterize_all(
        &MAC_ICON_SIZES,
        &cfg.svg_path,
        &cfg.iconset_dir,
        rasterizer,
        &cfg.install_hint,
    )?;

    let manifest_path = write_manifest(&cfg.iconset_dir, &results)?;
    println!("Updated {}", manifest_path.display());
    Ok(RunSummary {
        results,
        manifest_path,
    })
}

pub fn generate(cfg: &Config) -> Result<RunSummary> {
    generate_with(cfg, &CommandRasterizer::new(&cfg.converter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterize::ConvertError;
    use std::path::Path;

    struct AlwaysFails;

    impl Rasterizer for AlwaysFails {
        fn rasterize(
            &self,
            _svg: &Path,
            _out: &Path,
            _pixels: u32,
        ) -> std::result::Result<(), ConvertError> {
            Err(ConvertError::NotFound("rsvg-convert".into()))
        }
    }

    fn test_config(root: &Path) -> Config {
        Config {
            iconset_dir: root.join("AppIcon.appiconset"),
            svg_path: root.join("icon.svg"),
            log_file: None,
            ..Config::default()
        }
    }

    #[test]
    fn test_generate_without_converter_still_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        let summary = generate_with(&cfg, &AlwaysFails).unwrap();

        assert_eq!(summary.produced(), 0);
        assert!(cfg.svg_path.exists());
        let raw = std::fs::read(&summary.manifest_path).unwrap();
        let manifest: Manifest = serde_json::from_slice(&raw).unwrap();
        assert_eq!(manifest.images.len(), 10);
        assert!(manifest.images.iter().all(|e| e.filename.is_none()));
        assert_eq!(
            manifest.images[0],
            ImageEntry {
                filename: None,
                idiom: "mac".into(),
                scale: "1x".into(),
                size: "16x16".into(),
            }
        );
    }

    #[test]
    fn test_unwritable_svg_path_aborts_before_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = test_config(dir.path());
        cfg.svg_path = dir.path().join("missing").join("icon.svg");
        let err = generate_with(&cfg, &AlwaysFails).unwrap_err();
        assert!(matches!(err, IconsetError::WriteSource { .. }));
        assert!(!cfg.iconset_dir.join("Contents.json").exists());
    }
}
