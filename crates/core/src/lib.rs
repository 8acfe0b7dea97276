//! fiorigen — SAPUI5 webapp scaffolding and controller augmentation.
//!
//! This crate is the core library behind the `fiorigen` CLI. It scaffolds
//! artifacts into an existing UI5 webapp project and, for dialog fragments,
//! rewrites an already-authored controller by appending open/close handler
//! members to the object literal passed to `<Base>.extend(...)`.
//!
//! # Modules
//!
//! - [`ast`] — tree-sitter JavaScript parsing; [`ast::SourceDocument`]
//! - [`locate`] — rule-table discovery of the `extend()` member container
//! - [`synth`] — open/close handler synthesis from statement templates
//! - [`mutate`] — byte-splice member insertion and re-parse verification
//! - [`fragment`] — the `add fragment` pipeline (the orchestrator)
//! - [`scaffold`] — template-only `add view` / `add model`
//! - [`project`] — project root, manifest, candidate controllers
//! - [`templates`] — plain-text artifact templates
//! - [`error`] — the error taxonomy

pub mod ast;
pub mod error;
pub mod fragment;
pub mod locate;
pub mod mutate;
pub mod project;
pub mod scaffold;
pub mod synth;
pub mod templates;

pub use error::{Error, Result};
pub use fragment::{add_fragment, FragmentOutcome};
pub use project::Project;
pub use scaffold::{add_model, add_view, ModelOutcome, ViewOutcome};
pub use synth::capitalize;
