//! Application services.

pub mod detection;
pub mod scaffold_service;

pub use detection::detect_package_manager;
pub use scaffold_service::ScaffoldService;
