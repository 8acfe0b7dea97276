//! The `add fragment` orchestrator.
//!
//! Sequences the pipeline over a user-chosen controller:
//! Validating → Parsing → Locating → Synthesizing → Mutating → Serializing →
//! Writing. Every fallible step runs in memory before the Writing stage, so
//! a failure anywhere up to serialization leaves the filesystem untouched.
//! The Writing stage performs exactly two effects, in order: the fragment
//! artifact, then the rewritten controller. Those two writes are not
//! transactional — a failure between them leaves the artifact on disk and
//! the controller untouched, and a retry stops at the collision guard until
//! the artifact is removed by hand.

use std::path::PathBuf;

use tracing::debug;

use crate::ast::SourceDocument;
use crate::error::{Error, Result};
use crate::project::Project;
use crate::synth::capitalize;
use crate::{locate, mutate, synth, templates};

/// Paths and names produced by a successful `add fragment` run.
#[derive(Debug)]
pub struct FragmentOutcome {
    pub fragment_path: PathBuf,
    pub controller_path: PathBuf,
    pub open_handler: String,
    pub close_handler: String,
    /// Declared type name of the augmented container, when present.
    pub type_name: Option<String>,
}

/// Create `webapp/view/fragments/<Name>.fragment.xml` and append the
/// open/close handler pair to `controller_file` (a name under
/// `webapp/controller`, normally picked interactively by the caller).
pub fn add_fragment(
    project: &Project,
    controller_file: &str,
    identifier: &str,
) -> Result<FragmentOutcome> {
    let name = capitalize(identifier);

    // Validating: collision guard runs before the controller is even read.
    let fragment_path = project.fragments_dir().join(format!("{name}.fragment.xml"));
    if fragment_path.exists() {
        return Err(Error::Collision(fragment_path));
    }
    let controller_path = project.controller_dir().join(controller_file);
    if !controller_path.is_file() {
        return Err(Error::NotFound(format!("controller file '{controller_file}' not found")));
    }
    debug!(fragment = %fragment_path.display(), controller = controller_file, "validated");

    // Parsing
    let source = std::fs::read_to_string(&controller_path)?;
    let doc = SourceDocument::parse(source)?;
    debug!(bytes = doc.text().len(), "parsed");

    // Locating: first qualifying container in document order wins.
    let point = locate::find_extension_point(doc.root(), doc.text()).ok_or_else(|| {
        Error::NotFound(format!("no extend() member container found in '{controller_file}'"))
    })?;
    debug!(type_name = point.type_name.as_deref(), members = point.member_count, "located");

    // Synthesizing: open handler first.
    let members = synth::synthesize_handlers(&name, project.namespace())?;
    debug!(open = %members[0].name, close = %members[1].name, "synthesized");

    // Mutating
    let mutated = mutate::append_members(&doc, &point, &members);

    // Serializing: the mutated text must re-parse before anything hits disk.
    mutate::verify_reparse(&mutated)?;
    debug!(bytes = mutated.len(), "serialized");

    // Writing: artifact first, then the controller.
    std::fs::create_dir_all(project.fragments_dir())?;
    std::fs::write(&fragment_path, templates::render_fragment(&name))?;
    std::fs::write(&controller_path, mutated)?;
    debug!("written");

    let [open, close] = members;
    Ok(FragmentOutcome {
        fragment_path,
        controller_path,
        open_handler: open.name,
        close_handler: close.name,
        type_name: point.type_name,
    })
}
