//! Shared bootstrap pieces for the LearnPortal binaries.

pub mod logging;

pub use logging::init_logging;
