//! Package-manager detection.

use tracing::debug;

use crate::application::ports::CommandRunner;
use crate::domain::PackageManager;

/// Pick the package manager for a new project.
///
/// The user-agent hint (`npm_config_user_agent`) wins when it names bun,
/// pnpm or yarn. Otherwise bun is used if `bun --version` succeeds, and npm
/// is the fallback. Never fails.
pub fn detect_package_manager(
    user_agent: Option<&str>,
    runner: &dyn CommandRunner,
) -> PackageManager {
    if let Some(pm) = user_agent.and_then(PackageManager::from_user_agent) {
        debug!(%pm, "Package manager taken from user agent");
        return pm;
    }

    if runner.probe(PackageManager::Bun.program(), "--version") {
        debug!("bun found on PATH");
        return PackageManager::Bun;
    }

    debug!("Falling back to npm");
    PackageManager::Npm
}
