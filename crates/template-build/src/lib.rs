//! template-build: build tree preparation for template-based frontends.
//!
//! The pipeline copies `src` into a fresh `tmp` tree and then runs three
//! in-place stages over it:
//! - `template.html` / `component.css` become `template.html.js` /
//!   `component.css.js` modules exporting their content
//! - in development mode, relative imports under `pages` lose one level of
//!   `../` ascent
//! - imports of the converted assets are pointed at the generated modules

pub mod cli;
pub mod clone;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod stages;
pub mod walk;

pub use config::{BuildConfig, Mode, StyleDeletion};
pub use error::{BuildError, FileError};
pub use orchestrator::run;
pub use output::BuildSummary;
