mod error;
mod manifest;
mod models;

pub use error::{IconsetError, Result};
pub use manifest::{write_manifest, MANIFEST_FILE};
pub use models::*;
