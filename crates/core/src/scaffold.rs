//! Template-only scaffolding: `add view` and `add model`.
//!
//! These collaborators have no AST involvement — artifacts come from plain
//! text templates, and `add view` additionally inserts a route/target pair
//! into `webapp/manifest.json` and appends an i18n title key.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::project::Project;
use crate::synth::capitalize;
use crate::templates;

/// Paths and routing names produced by a successful `add view` run.
#[derive(Debug)]
pub struct ViewOutcome {
    pub view_path: PathBuf,
    pub controller_path: PathBuf,
    pub route: String,
    pub target: String,
    /// URL pattern registered for the route (the lowercased view name).
    pub pattern: String,
    pub i18n_updated: bool,
}

/// Create `webapp/view/<Name>.view.xml` plus its controller, register
/// `Route<Name>`/`Target<Name>` in the manifest, and append a title key to
/// `webapp/i18n/i18n.properties` when that file exists.
pub fn add_view(project: &mut Project, identifier: &str) -> Result<ViewOutcome> {
    let name = capitalize(identifier);

    let view_path = project.view_dir().join(format!("{name}.view.xml"));
    let controller_path = project.controller_dir().join(format!("{name}.controller.js"));
    if view_path.exists() {
        return Err(Error::Collision(view_path));
    }
    if controller_path.exists() {
        return Err(Error::Collision(controller_path));
    }

    std::fs::create_dir_all(project.view_dir())?;
    std::fs::create_dir_all(project.controller_dir())?;
    std::fs::write(&view_path, templates::render_view(project.namespace(), &name))?;
    std::fs::write(&controller_path, templates::render_controller(project.namespace(), &name))?;
    debug!(view = %view_path.display(), "view and controller written");

    let (route, target, pattern) = register_route(project, &name)?;
    project.save_manifest()?;

    let i18n_updated = append_i18n_title(project, &name)?;

    Ok(ViewOutcome { view_path, controller_path, route, target, pattern, i18n_updated })
}

/// Insert `Target<Name>` and `Route<Name>` under `sap.ui5.routing`, creating
/// the intermediate objects when the manifest does not have them yet.
fn register_route(project: &mut Project, name: &str) -> Result<(String, String, String)> {
    let route = format!("Route{name}");
    let target = format!("Target{name}");
    let pattern = name.to_lowercase();

    let routing = project
        .manifest_mut()
        .as_object_mut()
        .ok_or_else(|| Error::Configuration("manifest root is not an object".to_string()))?
        .entry("sap.ui5")
        .or_insert_with(|| serde_json::json!({}))
        .as_object_mut()
        .ok_or_else(|| Error::Configuration("manifest sap.ui5 is not an object".to_string()))?
        .entry("routing")
        .or_insert_with(|| serde_json::json!({}));

    let routing_map = routing
        .as_object_mut()
        .ok_or_else(|| Error::Configuration("manifest routing is not an object".to_string()))?;

    routing_map
        .entry("targets")
        .or_insert_with(|| serde_json::json!({}))
        .as_object_mut()
        .ok_or_else(|| Error::Configuration("manifest routing.targets is not an object".into()))?
        .insert(
            target.clone(),
            serde_json::json!({ "viewId": pattern, "viewName": name }),
        );

    routing_map
        .entry("routes")
        .or_insert_with(|| serde_json::json!([]))
        .as_array_mut()
        .ok_or_else(|| Error::Configuration("manifest routing.routes is not an array".into()))?
        .push(serde_json::json!({ "name": route, "pattern": pattern, "target": target }));

    debug!(route, target, pattern, "routing registered");
    Ok((route, target, pattern))
}

/// Append a `title<Name>` key when `webapp/i18n/i18n.properties` exists.
/// Missing i18n is non-fatal; the view still works without a title entry.
fn append_i18n_title(project: &Project, name: &str) -> Result<bool> {
    let i18n_path = project.webapp_dir().join("i18n/i18n.properties");
    if !i18n_path.exists() {
        warn!(path = %i18n_path.display(), "i18n.properties not found, skipping title key");
        return Ok(false);
    }
    let mut file = std::fs::OpenOptions::new().append(true).open(&i18n_path)?;
    writeln!(file, "\n# Title for {name} view\ntitle{name}={name}")?;
    Ok(true)
}

/// Path produced by a successful `add model` run.
#[derive(Debug)]
pub struct ModelOutcome {
    pub model_path: PathBuf,
}

/// Create `webapp/model/<Name>.js` from the JSON model template.
pub fn add_model(project: &Project, identifier: &str) -> Result<ModelOutcome> {
    let name = capitalize(identifier);
    let model_dir = project.webapp_dir().join("model");
    let model_path = model_dir.join(format!("{name}.js"));
    if model_path.exists() {
        return Err(Error::Collision(model_path));
    }
    std::fs::create_dir_all(&model_dir)?;
    std::fs::write(&model_path, templates::render_model())?;
    debug!(model = %model_path.display(), "model written");
    Ok(ModelOutcome { model_path })
}
