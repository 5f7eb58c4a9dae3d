// ============================================================================
// Utilities Module
// Helpers for binaries embedding the calculator
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
