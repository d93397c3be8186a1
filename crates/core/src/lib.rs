//! Namespace resolution engine for PHP-shaped sources.
//!
//! Given a cursor position in an open file, the engine decides whether
//! the identifier under the cursor should be expanded to a
//! fully-qualified reference or shortened and imported via a new `use`
//! statement, searching the project for files that plausibly define the
//! symbol. It only ever computes edit plans; applying them and showing
//! the action menu is the host editor's job.

pub mod builtins;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod logging;
pub mod planner;
pub mod resolver;
pub mod scan;
pub mod token;
pub mod workspace;

pub use config::ResolverConfig;
pub use document::{Document, SourceDocument};
pub use engine::{ResolveQuery, ResolverEngine};
pub use error::{PhpscopeError, Result};
pub use planner::{ActionKind, EditPlan};
