//! Scaffold Service - creates a starter project on disk.
//!
//! Workflow:
//! 1. Resolve name, template and package manager
//! 2. Refuse to touch an existing directory
//! 3. Render and write the project structure
//! 4. Install dependencies (failure is reported, not fatal)

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem, ProjectRenderer, Reporter},
        services::detect_package_manager,
    },
    domain::{
        FsEntry, InstallOutcome, PackageManager, ProjectStructure, ScaffoldOptions,
        ScaffoldOutcome, ScaffoldReport,
    },
    error::AeonResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn ProjectRenderer>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    user_agent: Option<String>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        renderer: Box<dyn ProjectRenderer>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            runner,
            user_agent: None,
        }
    }

    /// Package-manager hint, normally the `npm_config_user_agent` variable.
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Resolve the package manager for `options`: explicit choice, else detection.
    pub fn resolve_package_manager(&self, options: &ScaffoldOptions) -> PackageManager {
        options.package_manager.unwrap_or_else(|| {
            detect_package_manager(self.user_agent.as_deref(), self.runner.as_ref())
        })
    }

    /// Scaffold a new project under `cwd`.
    ///
    /// Returns [`ScaffoldOutcome::DirectoryExists`] without writing anything
    /// when the target is already present. Filesystem failures are errors;
    /// a failed install is not.
    #[instrument(
        skip_all,
        fields(
            project = %options.project_name(),
            template = %options.template,
            cwd = %cwd.display()
        )
    )]
    pub fn init_project(
        &self,
        options: &ScaffoldOptions,
        cwd: &Path,
        reporter: &dyn Reporter,
    ) -> AeonResult<ScaffoldOutcome> {
        let name = options.project_name();
        let template = options.template;
        let package_manager = self.resolve_package_manager(options);
        let root = cwd.join(name);

        reporter.section("Scaffolding new Aeon Foundation project")?;
        reporter.spacer()?;

        if self.filesystem.exists(&root) {
            debug!(path = %root.display(), "Target directory already exists");
            reporter.fail(&format!("Directory already exists: {name}"), None)?;
            reporter.note("Choose a different name or remove the existing directory.")?;
            return Ok(ScaffoldOutcome::DirectoryExists { path: root });
        }

        let structure = self.renderer.render(name, template, &root)?;
        structure.validate()?;

        reporter.step("Creating project structure...")?;
        self.create_directories(&structure)?;
        reporter.done("Created project directory", Some(name))?;

        let files = self.write_files(&structure, reporter)?;
        info!(files = files.len(), "Project files written");

        let install = if options.skip_install {
            InstallOutcome::Skipped
        } else {
            reporter.spacer()?;
            self.install(package_manager, name, &root, reporter)?
        };

        info!(%package_manager, ?install, "Scaffold completed");
        Ok(ScaffoldOutcome::Created(ScaffoldReport {
            name: name.to_string(),
            root,
            template,
            package_manager,
            files,
            install,
        }))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create_directories(&self, structure: &ProjectStructure) -> AeonResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;
        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(&dir.path))?;
        }
        Ok(())
    }

    /// Write every file in order, reporting each one.
    fn write_files(
        &self,
        structure: &ProjectStructure,
        reporter: &dyn Reporter,
    ) -> AeonResult<Vec<String>> {
        let root = structure.root();
        let mut written = Vec::new();

        for entry in structure.entries() {
            let FsEntry::File(file) = entry else {
                continue;
            };
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;

            let display = file.display_path();
            reporter.done(&format!("Created {display}"), file.detail.as_deref())?;
            written.push(display);
        }

        Ok(written)
    }

    fn install(
        &self,
        pm: PackageManager,
        name: &str,
        root: &Path,
        reporter: &dyn Reporter,
    ) -> AeonResult<InstallOutcome> {
        let task = reporter.begin_task(&format!("Installing dependencies with {pm}..."))?;

        match self.runner.run(pm.program(), &pm.install_args(), root) {
            Ok(()) => {
                task.succeed(&format!("Dependencies installed with {pm}"))?;
                Ok(InstallOutcome::Succeeded)
            }
            Err(e) => {
                info!(error = %e, "Dependency install failed");
                task.fail("Failed to install dependencies")?;
                reporter.note(&format!("Run '{}' manually in {name}/", pm.install_command()))?;
                Ok(InstallOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::MockCommandRunner;
    use crate::application::ports::TaskProgress;
    use crate::domain::TemplateKind;
    use crate::error::AeonError;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeFs {
        dirs: Arc<Mutex<Vec<PathBuf>>>,
        files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
        fail_writes: bool,
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, path: &Path) -> AeonResult<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> AeonResult<()> {
            if self.fail_writes {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into());
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().iter().any(|d| d == path)
        }
    }

    struct TwoFileRenderer;

    impl ProjectRenderer for TwoFileRenderer {
        fn render(
            &self,
            name: &str,
            template: TemplateKind,
            root: &Path,
        ) -> AeonResult<ProjectStructure> {
            let mut structure = ProjectStructure::new(root).with_directory("src");
            structure.add_file("package.json", format!("{{\"name\":\"{name}\"}}"));
            structure.add_file_with_detail(
                Path::new("src").join("index.ts"),
                String::new(),
                format!("({template} template)"),
            );
            Ok(structure)
        }
    }

    #[derive(Default, Clone)]
    struct Lines(Rc<RefCell<Vec<String>>>);

    impl Lines {
        fn push(&self, line: String) -> io::Result<()> {
            self.0.borrow_mut().push(line);
            Ok(())
        }

        fn all(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl Reporter for Lines {
        fn section(&self, title: &str) -> io::Result<()> {
            self.push(format!("section {title}"))
        }
        fn step(&self, message: &str) -> io::Result<()> {
            self.push(format!("step {message}"))
        }
        fn done(&self, message: &str, detail: Option<&str>) -> io::Result<()> {
            self.push(format!("done {message} {}", detail.unwrap_or("")).trim_end().into())
        }
        fn fail(&self, message: &str, _detail: Option<&str>) -> io::Result<()> {
            self.push(format!("fail {message}"))
        }
        fn note(&self, message: &str) -> io::Result<()> {
            self.push(format!("note {message}"))
        }
        fn spacer(&self) -> io::Result<()> {
            Ok(())
        }
        fn begin_task(&self, message: &str) -> io::Result<Box<dyn TaskProgress + '_>> {
            self.push(format!("task {message}"))?;
            Ok(Box::new(self.clone()))
        }
    }

    impl TaskProgress for Lines {
        fn succeed(self: Box<Self>, message: &str) -> io::Result<()> {
            self.push(format!("succeed {message}"))
        }
        fn fail(self: Box<Self>, message: &str) -> io::Result<()> {
            self.push(format!("task-fail {message}"))
        }
    }

    fn service(fs: FakeFs, runner: MockCommandRunner) -> ScaffoldService {
        ScaffoldService::new(Box::new(TwoFileRenderer), Box::new(fs), Box::new(runner))
    }

    fn options(name: &str) -> ScaffoldOptions {
        ScaffoldOptions {
            name: Some(name.into()),
            package_manager: Some(PackageManager::Pnpm),
            ..Default::default()
        }
    }

    #[test]
    fn writes_files_in_order_and_installs() {
        let fs = FakeFs::default();
        let mut runner = MockCommandRunner::new();
        runner.expect_probe().never();
        runner
            .expect_run()
            .withf(|program, args, cwd| {
                program == "pnpm" && args == ["install"] && cwd == Path::new("/work/demo")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let lines = Lines::default();
        let outcome = service(fs.clone(), runner)
            .init_project(&options("demo"), Path::new("/work"), &lines)
            .unwrap();

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert_eq!(report.files, ["package.json", "src/index.ts"]);
        assert_eq!(report.install, InstallOutcome::Succeeded);
        assert!(fs.files.lock().unwrap().contains_key(Path::new("/work/demo/package.json")));
        assert_eq!(
            lines.all(),
            [
                "section Scaffolding new Aeon Foundation project",
                "step Creating project structure...",
                "done Created project directory demo",
                "done Created package.json",
                "done Created src/index.ts (minimal template)",
                "task Installing dependencies with pnpm...",
                "succeed Dependencies installed with pnpm",
            ]
        );
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let fs = FakeFs::default();
        fs.dirs.lock().unwrap().push(PathBuf::from("/work/taken"));
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let lines = Lines::default();
        let outcome = service(fs.clone(), runner)
            .init_project(&options("taken"), Path::new("/work"), &lines)
            .unwrap();

        assert_eq!(
            outcome,
            ScaffoldOutcome::DirectoryExists {
                path: PathBuf::from("/work/taken")
            }
        );
        assert!(fs.files.lock().unwrap().is_empty());
        assert_eq!(fs.dirs.lock().unwrap().len(), 1);
        assert!(lines.all().contains(&"fail Directory already exists: taken".to_string()));
    }

    #[test]
    fn install_failure_is_not_fatal() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|program, _, _| {
            Err(ApplicationError::CommandFailed {
                command: program.to_string(),
                reason: "exit status 1".into(),
            }
            .into())
        });

        let lines = Lines::default();
        let outcome = service(FakeFs::default(), runner)
            .init_project(&options("demo"), Path::new("/work"), &lines)
            .unwrap();

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert!(matches!(report.install, InstallOutcome::Failed { .. }));
        let lines = lines.all();
        assert!(lines.contains(&"task-fail Failed to install dependencies".to_string()));
        assert!(lines.contains(&"note Run 'pnpm install' manually in demo/".to_string()));
    }

    #[test]
    fn skip_install_never_runs_the_package_manager() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let mut opts = options("demo");
        opts.skip_install = true;
        let outcome = service(FakeFs::default(), runner)
            .init_project(&opts, Path::new("/work"), &Lines::default())
            .unwrap();

        assert!(matches!(
            outcome,
            ScaffoldOutcome::Created(ScaffoldReport {
                install: InstallOutcome::Skipped,
                ..
            })
        ));
    }

    #[test]
    fn filesystem_errors_propagate() {
        let fs = FakeFs {
            fail_writes: true,
            ..Default::default()
        };
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let err = service(fs, runner)
            .init_project(&options("demo"), Path::new("/work"), &Lines::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AeonError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn missing_package_manager_is_detected() {
        let mut runner = MockCommandRunner::new();
        runner.expect_probe().times(1).returning(|_, _| false);

        let svc = service(FakeFs::default(), runner)
            .with_user_agent(Some("npm/10.2.0 node/v20.11.0".into()));
        assert_eq!(
            svc.resolve_package_manager(&ScaffoldOptions::default()),
            PackageManager::Npm
        );
    }
}
