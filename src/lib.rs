//! Configuration tooling for Tinkerer-style blogs.
//!
//! The settings record itself lives in [`tinkr_config`]; this crate adds what a command line
//! needs around it: a pre-flight [`check`] that reports problems the renderer would otherwise
//! stop on, [`export`] of the record to the `conf.py` the renderer reads, and scaffolding for
//! new blogs in [`new`].

pub mod check;
pub mod error;
pub mod export;
pub mod new;

pub use check::{Diagnostic, Severity, check};
pub use error::Error;
pub use export::render_conf_py;
pub use new::create_new_project;
pub use tinkr_config::SiteConfig;
