use serde::{Deserialize, Serialize};

/// One required rendition: a base point size and its pixel scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSpec {
    pub base: u32,
    pub scale: u32,
}

impl SizeSpec {
    pub const fn new(base: u32, scale: u32) -> Self {
        Self { base, scale }
    }

    /// Edge length of the rendered square in pixels.
    pub fn pixels(&self) -> u32 {
        self.base * self.scale
    }

    pub fn filename(&self) -> String {
        format!("icon_{0}x{0}@{1}x.png", self.base, self.scale)
    }

    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.base)
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// macOS app icon renditions, in manifest order.
pub const MAC_ICON_SIZES: [SizeSpec; 10] = [
    SizeSpec::new(16, 1),
    SizeSpec::new(16, 2),
    SizeSpec::new(32, 1),
    SizeSpec::new(32, 2),
    SizeSpec::new(128, 1),
    SizeSpec::new(128, 2),
    SizeSpec::new(256, 1),
    SizeSpec::new(256, 2),
    SizeSpec::new(512, 1),
    SizeSpec::new(512, 2),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterOutcome {
    Produced(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterResult {
    pub spec: SizeSpec,
    pub outcome: RasterOutcome,
}

impl RasterResult {
    pub fn produced(spec: SizeSpec) -> Self {
        Self {
            spec,
            outcome: RasterOutcome::Produced(spec.filename()),
        }
    }

    pub fn missing(spec: SizeSpec) -> Self {
        Self {
            spec,
            outcome: RasterOutcome::Missing,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match &self.outcome {
            RasterOutcome::Produced(name) => Some(name.as_str()),
            RasterOutcome::Missing => None,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self.outcome, RasterOutcome::Produced(_))
    }
}

// Field order is the serialized key order in Contents.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}
