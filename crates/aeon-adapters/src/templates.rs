//! Entry-file generators for the starter templates.
//!
//! Each template kind maps to one generator producing `src/index.ts`.

use aeon_core::domain::TemplateKind;

/// Generator producing the contents of `src/index.ts`.
pub type EntryGenerator = fn() -> String;

/// Look up the entry generator for a template.
pub fn entry_generator(template: TemplateKind) -> EntryGenerator {
    match template {
        TemplateKind::Minimal => minimal_entry,
        TemplateKind::Full => full_entry,
        TemplateKind::EdgeAi => edge_ai_entry,
    }
}

/// Sync coordinator plus stack metadata.
pub fn minimal_entry() -> String {
    r#"/**
 * My Aeon Foundation App
 *
 * Built with the complete Aeon stack.
 */

import { Aeon, Edgework, STACK } from '@affectively/aeon-foundation';

console.log('Aeon Foundation Stack:', STACK.name, 'v' + STACK.version);
console.log('Packages:', Object.keys(STACK.packages).join(', '));

// Distributed Sync
const coordinator = new Aeon.SyncCoordinator();
console.log('SyncCoordinator ready');

// Your code here...
"#
    .to_string()
}

/// Every namespace imported; edge AI left commented out.
pub fn full_entry() -> String {
    r#"/**
 * My Aeon Foundation App
 *
 * Full-stack: sync, pages, dash, relay, edge AI, aegis, neural.
 */

import {
  Aeon,
  Pages,
  Dash,
  Relay,
  Edgework,
  Aegis,
  Neural,
  STACK,
} from '@affectively/aeon-foundation';

console.log('Aeon Foundation Stack:', STACK.name, 'v' + STACK.version);
console.log('');

// ── Distributed Sync ─────────────────────────────────
const coordinator = new Aeon.SyncCoordinator();
console.log('✓ SyncCoordinator initialized');

// ── Edge AI (uncomment to use) ───────────────────────
// const ai = await Edgework.EdgeworkSDK.init({
//   model: 'cyrano-360m',
//   onProgress: (p) => console.log(`  Downloading: ${p.percent}%`),
// });
// const response = await ai.generate('Hello from the edge!');
// console.log('AI:', response.text);

console.log('');
console.log('Your Aeon Foundation app is ready.');
console.log('Edit src/index.ts to get started.');
"#
    .to_string()
}

/// Async entry point: load a model, generate once, then stream.
pub fn edge_ai_entry() -> String {
    r#"/**
 * Edge AI App - Powered by Aeon Foundation
 *
 * Client-side AI inference with on-device RLHF.
 */

import { Edgework } from '@affectively/aeon-foundation';

const { Edgework: SDK } = Edgework;

async function main() {
  console.log('Initializing edge AI...');

  const ai = await SDK.init({
    model: 'cyrano-360m',
    onProgress: (p) => {
      process.stdout.write(`\r  Downloading model: ${p.percent}%`);
    },
  });

  console.log('\n✓ Model loaded');

  // Generate text
  const response = await ai.generate('How are you feeling today?');
  console.log('\nAI:', response.text);

  // Stream responses
  console.log('\nStreaming:');
  for await (const token of ai.stream('Tell me about emotions')) {
    process.stdout.write(token);
  }
  console.log('');
}

main().catch(console.error);
"#
    .to_string()
}

/// Contents of the generated `.gitignore`.
pub const GITIGNORE: &str = "node_modules/\ndist/\n*.tsbuildinfo\n.env\n.env.local\n.DS_Store\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_template_has_its_own_entry() {
        let minimal = entry_generator(TemplateKind::Minimal)();
        let full = entry_generator(TemplateKind::Full)();
        let edge = entry_generator(TemplateKind::EdgeAi)();

        assert!(minimal.contains("new Aeon.SyncCoordinator()"));
        assert!(!minimal.contains("Neural"));
        assert!(full.contains("  Neural,\n"));
        assert!(full.contains("// const ai = await Edgework.EdgeworkSDK.init({"));
        assert!(edge.contains("async function main()"));
        assert!(edge.contains("for await (const token of ai.stream('Tell me about emotions'))"));
        assert!(edge.ends_with("main().catch(console.error);\n"));
    }

    #[test]
    fn edge_entry_keeps_escapes_literal() {
        let edge = edge_ai_entry();
        assert!(edge.contains(r"process.stdout.write(`\r  Downloading model: ${p.percent}%`);"));
        assert!(edge.contains(r"console.log('\n✓ Model loaded');"));
    }

    #[test]
    fn gitignore_lists_build_outputs_and_env_files() {
        let lines: Vec<_> = GITIGNORE.lines().collect();
        assert_eq!(
            lines,
            ["node_modules/", "dist/", "*.tsbuildinfo", ".env", ".env.local", ".DS_Store"]
        );
    }
}
