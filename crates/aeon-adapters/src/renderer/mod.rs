//! Project renderers.

mod manifest;
mod starter;

pub use manifest::{PackageManifest, TsConfig};
pub use starter::StarterRenderer;
