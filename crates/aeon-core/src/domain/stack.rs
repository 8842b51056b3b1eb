//! Static registry of the packages re-exported by `@affectively/aeon-foundation`.
//!
//! Nothing is invoked through these entries; they only describe the stack
//! for help, info and splash output.

/// npm package that re-exports every namespace below.
pub const FOUNDATION_PACKAGE: &str = "@affectively/aeon-foundation";

/// Version range written into generated `package.json` files.
pub const FOUNDATION_VERSION_RANGE: &str = "^0.1.0";

/// Colour family used when rendering a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Aeon,
    AeonBright,
    Electric,
    Emerald,
    Gold,
}

/// One re-exported namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackPackage {
    /// Registry key and import subpath, e.g. `dash`.
    pub key: &'static str,
    /// Namespace exported from the umbrella package, e.g. `Dash`.
    pub namespace: &'static str,
    /// Layer name shown in the stack diagram.
    pub label: &'static str,
    /// Underlying npm package.
    pub package: &'static str,
    /// Short summary shown next to the import path.
    pub summary: &'static str,
    /// Longer description shown in the stack diagram.
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    /// Position in the stack diagram, 0 at the top.
    pub depth: u8,
}

impl StackPackage {
    /// Subpath import, e.g. `@affectively/aeon-foundation/dash`.
    pub fn import_path(&self) -> String {
        format!("{FOUNDATION_PACKAGE}/{}", self.key)
    }
}

/// Registry in import-listing order.
pub static STACK: &[StackPackage] = &[
    StackPackage {
        key: "aeon",
        namespace: "Aeon",
        label: "Aeon",
        package: "@affectively/aeon",
        summary: "Distributed sync & versioning",
        description: "Distributed sync, schema versioning, conflict resolution",
        icon: "@",
        accent: Accent::Aeon,
        depth: 5,
    },
    StackPackage {
        key: "pages",
        namespace: "Pages",
        label: "Aeon Flux",
        package: "@affectively/aeon-flux",
        summary: "Collaborative pages + CRDT flux",
        description: "Collaborative pages with CRDT flux state, ESI, zero-CLS",
        icon: "~",
        accent: Accent::AeonBright,
        depth: 2,
    },
    StackPackage {
        key: "dash",
        namespace: "Dash",
        label: "Dash",
        package: "@affectively/dash",
        summary: "CRDT state + WebRTC sync",
        description: "Distributed CRDT state management with WebRTC sync",
        icon: "*",
        accent: Accent::Emerald,
        depth: 3,
    },
    StackPackage {
        key: "relay",
        namespace: "Relay",
        label: "Relay",
        package: "@affectively/relay",
        summary: "Transport relay with discovery",
        description: "Transport relay with discovery, privacy & adaptive sync",
        icon: "⇄",
        accent: Accent::Emerald,
        depth: 4,
    },
    StackPackage {
        key: "edgework",
        namespace: "Edgework",
        label: "Edgework SDK",
        package: "@affectively/edgework-sdk",
        summary: "Edge AI + WebGPU inference",
        description: "Client-side AI inference, WebGPU, on-device RLHF",
        icon: ">",
        accent: Accent::Electric,
        depth: 1,
    },
    StackPackage {
        key: "aegis",
        namespace: "Aegis",
        label: "Aegis",
        package: "@affectively/auth",
        summary: "UCAN-based decentralized auth",
        description: "UCAN-based decentralized authentication & zero-trust",
        icon: "#",
        accent: Accent::Gold,
        depth: 6,
    },
    StackPackage {
        key: "neural",
        namespace: "Neural",
        label: "Neural",
        package: "@affectively/neural",
        summary: "WebGPU neural graph database",
        description: "WebGPU-accelerated neural graph database",
        icon: "◈",
        accent: Accent::Electric,
        depth: 0,
    },
];

/// `Auth` is kept as an alias of this namespace for older imports.
pub const LEGACY_AUTH_ALIAS: (&str, &str) = ("Auth", "Aegis");

/// Look up a package by registry key.
pub fn find(key: &str) -> Option<&'static StackPackage> {
    STACK.iter().find(|p| p.key == key)
}

/// Packages ordered top-to-bottom as drawn in the stack diagram.
pub fn layers() -> Vec<&'static StackPackage> {
    let mut layers: Vec<_> = STACK.iter().collect();
    layers.sort_by_key(|p| p.depth);
    layers
}

/// Every namespace, joined for import statements: `Aeon, Pages, ...`.
pub fn namespaces() -> Vec<&'static str> {
    STACK.iter().map(|p| p.namespace).collect()
}
