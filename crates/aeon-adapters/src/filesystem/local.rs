//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use aeon_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{AeonError, AeonResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> AeonResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AeonResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks and plain files both block scaffolding.
        path.symlink_metadata().is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> AeonError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
