//! Terminal rendering: brand palette, splash, stack diagram and spinner.

pub mod diagram;
pub mod palette;
pub mod spinner;
pub mod splash;

pub use spinner::Spinner;
