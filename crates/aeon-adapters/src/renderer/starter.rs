//! Renders the starter project for a template kind.

use std::path::Path;

use aeon_core::{
    application::{ApplicationError, ports::ProjectRenderer},
    domain::{ProjectStructure, TemplateKind},
    error::AeonResult,
};
use serde::Serialize;
use tracing::{debug, instrument};

use super::manifest::{PackageManifest, TsConfig};
use crate::templates::{GITIGNORE, entry_generator};

/// Renderer producing `package.json`, `tsconfig.json`, `src/index.ts` and `.gitignore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarterRenderer;

impl StarterRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectRenderer for StarterRenderer {
    #[instrument(skip(self, root))]
    fn render(
        &self,
        name: &str,
        template: TemplateKind,
        root: &Path,
    ) -> AeonResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);
        structure.add_directory("src");
        structure.add_file(
            "package.json",
            to_pretty_json(&PackageManifest::for_template(name, template))?,
        );
        structure.add_file("tsconfig.json", to_pretty_json(&TsConfig::default())?);
        structure.add_file_with_detail(
            Path::new("src").join("index.ts"),
            entry_generator(template)(),
            format!("({template} template)"),
        );
        structure.add_file(".gitignore", GITIGNORE.to_string());

        debug!(entries = structure.entry_count(), "Starter project rendered");
        Ok(structure)
    }
}

/// Two-space indented JSON with a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> AeonResult<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }
    })?;
    json.push('\n');
    Ok(json)
}
