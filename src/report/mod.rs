//! Report renderers for a detected test environment.
//!
//! - [`terminal`] — colored summary with a library table; respects `--quiet`.
//! - [`json`] — the environment plus suggested install commands as pretty JSON.

pub mod json;
pub mod terminal;
