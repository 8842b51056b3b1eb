//! Typed `package.json` and `tsconfig.json` for generated projects.

use std::collections::BTreeMap;

use aeon_core::domain::{TemplateKind, stack::FOUNDATION_PACKAGE, stack::FOUNDATION_VERSION_RANGE};
use serde::Serialize;

const REACT_RANGE: &str = "^19.0.0";

/// `package.json` of a starter project.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: Scripts,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    pub start: String,
}

impl PackageManifest {
    pub fn for_template(name: &str, template: TemplateKind) -> Self {
        let mut dependencies = BTreeMap::from([(
            FOUNDATION_PACKAGE.to_string(),
            FOUNDATION_VERSION_RANGE.to_string(),
        )]);
        let mut dev_dependencies = BTreeMap::from([
            ("typescript".to_string(), "^5.7.0".to_string()),
            ("@types/node".to_string(), "^22.0.0".to_string()),
        ]);

        if template.includes_ui_framework() {
            for pkg in ["react", "react-dom"] {
                dependencies.insert(pkg.into(), REACT_RANGE.into());
                dev_dependencies.insert(format!("@types/{pkg}"), REACT_RANGE.into());
            }
        }

        Self {
            name: name.to_string(),
            version: "0.0.1".into(),
            private: true,
            module_type: "module".into(),
            scripts: Scripts {
                dev: "bun run --watch src/index.ts".into(),
                build: "bun build src/index.ts --outdir dist --target node".into(),
                start: "bun run dist/index.js".into(),
            },
            dependencies,
            dev_dependencies,
        }
    }
}

/// `tsconfig.json` shared by every template.
#[derive(Debug, Clone, Serialize)]
pub struct TsConfig {
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub lib: Vec<String>,
    pub jsx: String,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
    pub declaration: bool,
    pub source_map: bool,
    pub out_dir: String,
    pub root_dir: String,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: "ES2022".into(),
                module: "ESNext".into(),
                module_resolution: "bundler".into(),
                lib: vec!["ES2022".into(), "DOM".into(), "DOM.Iterable".into()],
                jsx: "react-jsx".into(),
                strict: true,
                es_module_interop: true,
                skip_lib_check: true,
                declaration: true,
                source_map: true,
                out_dir: "dist".into(),
                root_dir: "src".into(),
            },
            include: vec!["src/**/*".into()],
            exclude: vec!["node_modules".into(), "dist".into()],
        }
    }
}
