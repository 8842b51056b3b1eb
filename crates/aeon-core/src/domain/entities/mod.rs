pub mod project_structure;

pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
