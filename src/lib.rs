//! exclude-list - static analysis exclusion resolver
//!
//! Resolves a declarative JSON manifest of source-tree exclusions into the path
//! exclusion syntax of a static analysis tool:
//!
//! 1. [`manifest`] loads and structurally validates the manifest
//! 2. [`resolver`] checks every declared path (wildcards expanded) exists under the root
//! 3. [`tool`] renders the declared path in the active tool's syntax
//!
//! [`pipeline`] composes the three steps and fails on the first error.

pub mod cli;
pub mod commands;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod settings;
pub mod tool;

pub use error::{ErrorKind, ExcludeError, Result};
pub use manifest::Entry;
pub use pipeline::{Resolution, resolve_exclusions, resolve_exclusions_for};
pub use settings::Settings;
pub use tool::AnalysisTool;
