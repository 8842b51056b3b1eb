//! Implementation of the `init` command (aliases `create`, `new`).
//!
//! Wires the real adapters into [`ScaffoldService`], runs it, and prints the
//! closing guide. Scaffolding itself lives in `aeon-core`.

use std::path::Path;

use tracing::{debug, instrument};

use aeon_adapters::{LocalFilesystem, StarterRenderer, SystemCommandRunner};
use aeon_core::{
    application::ScaffoldService,
    domain::{ScaffoldOptions, ScaffoldOutcome, ScaffoldReport, stack},
};

use crate::{
    cli::InitRequest,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    ui::{palette, splash},
};

/// Variable set by npm, pnpm, yarn and bun when they launch a binary.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

const BOX_INNER: usize = 41;
const READY: &str = "Your Aeon Foundation project is ready!";

/// Execute `init` against the current directory.
#[instrument(skip_all, fields(name = request.name.as_deref().unwrap_or_default()))]
pub fn execute(request: InitRequest, config: &AppConfig, out: &OutputManager) -> CliResult<()> {
    splash::show_minimal(out)?;

    let options = request.into_options(&config.defaults);
    debug!(?options, "Init options resolved");

    let cwd = std::env::current_dir()
        .with_cli_context(|| "Cannot determine the current directory")?;

    let service = ScaffoldService::new(
        Box::new(StarterRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
    )
    .with_user_agent(std::env::var(USER_AGENT_ENV).ok());

    scaffold(&service, &options, &cwd, out)?;
    Ok(())
}

/// Run the service and print the closing guide when a project was created.
pub fn scaffold(
    service: &ScaffoldService,
    options: &ScaffoldOptions,
    cwd: &Path,
    out: &OutputManager,
) -> CliResult<ScaffoldOutcome> {
    let outcome = service.init_project(options, cwd, out)?;
    if let ScaffoldOutcome::Created(report) = &outcome {
        print_ready(report, out)?;
    }
    Ok(outcome)
}

fn print_ready(report: &ScaffoldReport, out: &OutputManager) -> std::io::Result<()> {
    let p = out.palette();
    let bar = |s: &str| p.paint(s, palette::AEON);
    let fill = BOX_INNER - 1 - READY.chars().count();

    out.blank()?;
    out.print(&format!("  {}", bar(&format!("╭{}╮", "─".repeat(BOX_INNER)))))?;
    out.print(&format!(
        "  {} {}{}{}",
        bar("│"),
        p.bold(READY),
        " ".repeat(fill),
        bar("│")
    ))?;
    out.print(&format!("  {}", bar(&format!("╰{}╯", "─".repeat(BOX_INNER)))))?;
    out.blank()?;

    out.dim_line("Next steps:")?;
    out.shell_line(&format!("cd {}", report.name))?;
    out.shell_line(&report.package_manager.run_script("dev"))?;
    out.blank()?;

    out.dim_line("Import the full stack:")?;
    out.colored_line(
        &format!(
            "import {{ {} }} from '{}';",
            stack::namespaces().join(", "),
            stack::FOUNDATION_PACKAGE
        ),
        palette::ELECTRIC,
    )?;
    out.blank()?;

    out.dim_line("Or import individual modules:")?;
    for (symbol, key) in [
        ("SyncCoordinator", "aeon"),
        ("Edgework", "edgework"),
        ("NeuralGraph", "neural"),
    ] {
        let path = stack::find(key).map(|p| p.import_path()).unwrap_or_default();
        out.colored_line(
            &format!("import {{ {symbol} }} from '{path}';"),
            palette::ELECTRIC,
        )?;
    }
    out.blank()?;

    out.dim_line(&format!("Docs: {}", super::GITHUB_URL))?;
    out.blank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeon_adapters::{MemoryFilesystem, ScriptedRunner};
    use aeon_core::application::ports::Filesystem;
    use aeon_core::domain::{InstallOutcome, PackageManager, TemplateKind};

    fn service(fs: &MemoryFilesystem, runner: &ScriptedRunner) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(StarterRenderer::new()),
            Box::new(fs.clone()),
            Box::new(runner.clone()),
        )
    }

    fn options(pm: PackageManager, skip_install: bool) -> ScaffoldOptions {
        ScaffoldOptions {
            name: Some("demo".into()),
            template: TemplateKind::Full,
            skip_install,
            package_manager: Some(pm),
        }
    }

    #[test]
    fn created_project_prints_next_steps() {
        let fs = MemoryFilesystem::new();
        let runner = ScriptedRunner::new();
        let (out, buffer) = OutputManager::buffered(false, 80);

        let outcome = scaffold(
            &service(&fs, &runner),
            &options(PackageManager::Bun, true),
            Path::new("/work"),
            &out,
        )
        .unwrap();

        assert!(matches!(outcome, ScaffoldOutcome::Created(_)));
        let text = buffer.contents();
        assert!(text.contains("  ✓ Created src/index.ts (full template)\n"));
        assert!(text.contains("  │ Your Aeon Foundation project is ready!  │\n"));
        assert!(text.contains("  $ cd demo\n  $ bun run dev\n"));
        assert!(text.contains(
            "import { Aeon, Pages, Dash, Relay, Edgework, Aegis, Neural } from '@affectively/aeon-foundation';"
        ));
        assert!(text.contains("import { NeuralGraph } from '@affectively/aeon-foundation/neural';"));
        assert!(text.ends_with("  Docs: https://github.com/affectively-ai/aeon-foundation\n\n"));
        assert!(runner.runs().is_empty());
    }

    #[test]
    fn closing_box_rows_line_up() {
        let fs = MemoryFilesystem::new();
        let runner = ScriptedRunner::new();
        let (out, buffer) = OutputManager::buffered(false, 80);
        scaffold(
            &service(&fs, &runner),
            &options(PackageManager::Npm, true),
            Path::new("/work"),
            &out,
        )
        .unwrap();

        let text = buffer.contents();
        let rows: Vec<_> = text
            .lines()
            .filter(|l| l.starts_with("  ╭") || l.starts_with("  │ Your") || l.starts_with("  ╰"))
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|&w| w == rows[0]));
    }

    #[test]
    fn existing_directory_skips_the_guide() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/demo")).unwrap();
        let runner = ScriptedRunner::new();
        let (out, buffer) = OutputManager::buffered(false, 80);

        let outcome = scaffold(
            &service(&fs, &runner),
            &options(PackageManager::Npm, false),
            Path::new("/work"),
            &out,
        )
        .unwrap();

        assert!(matches!(outcome, ScaffoldOutcome::DirectoryExists { .. }));
        let text = buffer.contents();
        assert!(text.contains("  ✗ Directory already exists: demo\n"));
        assert!(!text.contains("ready!"));
        assert!(runner.runs().is_empty());
    }

    #[test]
    fn failed_install_still_prints_the_guide() {
        let fs = MemoryFilesystem::new();
        let runner = ScriptedRunner::new().with_failing("pnpm");
        let (out, buffer) = OutputManager::buffered(false, 80);

        let outcome = scaffold(
            &service(&fs, &runner),
            &options(PackageManager::Pnpm, false),
            Path::new("/work"),
            &out,
        )
        .unwrap();

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert!(matches!(report.install, InstallOutcome::Failed { .. }));

        let text = buffer.contents();
        assert!(text.contains("  ✗ Failed to install dependencies\n"));
        assert!(text.contains("  Run 'pnpm install' manually in demo/\n"));
        assert!(text.contains("  $ pnpm run dev\n"));
        assert_eq!(runner.runs().len(), 1);
    }
}
