//! End-to-end tests for the scaffolding pipelines on a real temp project.

use std::path::Path;

use tempfile::TempDir;

use fiorigen_core::ast::SourceDocument;
use fiorigen_core::{add_fragment, add_model, add_view, locate, Error, Project};

const MANIFEST: &str = r#"{
  "sap.app": { "id": "com.acme.shop" },
  "sap.ui5": { "routing": { "routes": [], "targets": {} } }
}"#;

const HOME_CONTROLLER: &str = r#"sap.ui.define([
    "sap/ui/core/mvc/Controller"
], function (Controller) {
    "use strict";

    return Controller.extend("com.acme.shop.controller.Home", {
        onInit: function () {

        }
    });
});
"#;

/// A controller-shaped module with no extend() call anywhere.
const HELPER_MODULE: &str = r#"sap.ui.define([], function () {
    "use strict";

    return {
        format: function (value) {
            return String(value).trim();
        }
    };
});
"#;

fn scaffold_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let webapp = dir.path().join("webapp");
    std::fs::create_dir_all(webapp.join("controller")).unwrap();
    std::fs::create_dir_all(webapp.join("view")).unwrap();
    std::fs::create_dir_all(webapp.join("i18n")).unwrap();
    std::fs::write(webapp.join("manifest.json"), MANIFEST).unwrap();
    std::fs::write(webapp.join("controller/Home.controller.js"), HOME_CONTROLLER).unwrap();
    std::fs::write(webapp.join("i18n/i18n.properties"), "titleHome=Home\n").unwrap();
    dir
}

fn member_count(path: &Path) -> usize {
    let text = std::fs::read_to_string(path).unwrap();
    let doc = SourceDocument::parse(text).unwrap();
    locate::find_extension_point(doc.root(), doc.text())
        .map(|ep| ep.member_count)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// add fragment
// ---------------------------------------------------------------------------

#[test]
fn fragment_run_appends_two_deterministically_named_members() {
    let dir = scaffold_project();
    let project = Project::discover(dir.path()).unwrap();

    let outcome = add_fragment(&project, "Home.controller.js", "checkout").unwrap();
    assert_eq!(outcome.open_handler, "onOpenCheckoutDialog");
    assert_eq!(outcome.close_handler, "onCloseCheckoutDialog");
    assert_eq!(outcome.type_name.as_deref(), Some("com.acme.shop.controller.Home"));

    // Controller re-parses with exactly two more members than before.
    assert_eq!(member_count(&outcome.controller_path), 3);
    let controller = std::fs::read_to_string(&outcome.controller_path).unwrap();
    assert!(controller.contains("onOpenCheckoutDialog: function () {"));
    assert!(controller.contains("onCloseCheckoutDialog: function () {"));
    assert!(controller.contains(r#"name: "com.acme.shop.view.fragments.Checkout""#));

    // Artifact exists with the lowercased dialog id.
    let fragment = std::fs::read_to_string(&outcome.fragment_path).unwrap();
    assert!(fragment.contains(r#"id="checkoutDialog""#));
    assert!(outcome.fragment_path.ends_with("webapp/view/fragments/Checkout.fragment.xml"));
}

#[test]
fn no_extension_point_reports_not_found_and_writes_nothing() {
    let dir = scaffold_project();
    let webapp = dir.path().join("webapp");
    std::fs::write(webapp.join("controller/Formatter.js"), HELPER_MODULE).unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let err = add_fragment(&project, "Formatter.js", "checkout").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "expected NotFound, got {err:?}");

    // No filesystem mutation occurred.
    assert!(!webapp.join("view/fragments/Checkout.fragment.xml").exists());
    assert!(!webapp.join("view/fragments").exists());
    let after = std::fs::read_to_string(webapp.join("controller/Formatter.js")).unwrap();
    assert_eq!(after, HELPER_MODULE);
}

#[test]
fn existing_artifact_collides_before_the_source_is_touched() {
    let dir = scaffold_project();
    let webapp = dir.path().join("webapp");
    std::fs::create_dir_all(webapp.join("view/fragments")).unwrap();
    std::fs::write(webapp.join("view/fragments/Checkout.fragment.xml"), "<existing/>").unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let err = add_fragment(&project, "Home.controller.js", "checkout").unwrap_err();
    assert!(matches!(err, Error::Collision(_)), "expected Collision, got {err:?}");

    // Source byte-identical to its pre-run state; artifact untouched.
    let controller = std::fs::read_to_string(webapp.join("controller/Home.controller.js")).unwrap();
    assert_eq!(controller, HOME_CONTROLLER);
    let artifact = std::fs::read_to_string(webapp.join("view/fragments/Checkout.fragment.xml")).unwrap();
    assert_eq!(artifact, "<existing/>");
}

#[test]
fn unparseable_controller_reports_syntax_and_writes_nothing() {
    let dir = scaffold_project();
    let webapp = dir.path().join("webapp");
    let broken = "sap.ui.define([, function ( {";
    std::fs::write(webapp.join("controller/Broken.controller.js"), broken).unwrap();
    let project = Project::discover(dir.path()).unwrap();

    let err = add_fragment(&project, "Broken.controller.js", "checkout").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)), "expected Syntax, got {err:?}");
    assert!(!webapp.join("view/fragments/Checkout.fragment.xml").exists());
    let after = std::fs::read_to_string(webapp.join("controller/Broken.controller.js")).unwrap();
    assert_eq!(after, broken);
}

#[test]
fn unsafe_identifier_fails_before_any_write() {
    let dir = scaffold_project();
    let webapp = dir.path().join("webapp");
    let project = Project::discover(dir.path()).unwrap();

    let err = add_fragment(&project, "Home.controller.js", "not an ident").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)), "expected Syntax, got {err:?}");
    assert!(!webapp.join("view/fragments").exists());
    let after = std::fs::read_to_string(webapp.join("controller/Home.controller.js")).unwrap();
    assert_eq!(after, HOME_CONTROLLER);
}

// Characterizes the duplication-preserving policy: a second run with the same
// identifier appends a second pair; nothing deduplicates by member name.
#[test]
fn double_run_appends_duplicate_pair() {
    let dir = scaffold_project();
    let webapp = dir.path().join("webapp");
    let project = Project::discover(dir.path()).unwrap();

    add_fragment(&project, "Home.controller.js", "checkout").unwrap();
    // Clear the collision guard the way an operator would.
    std::fs::remove_file(webapp.join("view/fragments/Checkout.fragment.xml")).unwrap();
    let outcome = add_fragment(&project, "Home.controller.js", "checkout").unwrap();

    assert_eq!(member_count(&outcome.controller_path), 5);
    let controller = std::fs::read_to_string(&outcome.controller_path).unwrap();
    assert_eq!(controller.matches("onOpenCheckoutDialog:").count(), 2);
    assert_eq!(controller.matches("onCloseCheckoutDialog:").count(), 2);
}

#[test]
fn identifier_is_capitalized_for_names_and_lowercased_for_the_dialog_id() {
    let dir = scaffold_project();
    let project = Project::discover(dir.path()).unwrap();

    let outcome = add_fragment(&project, "Home.controller.js", "userSettings").unwrap();
    assert_eq!(outcome.open_handler, "onOpenUserSettingsDialog");
    let fragment = std::fs::read_to_string(&outcome.fragment_path).unwrap();
    assert!(fragment.contains(r#"id="usersettingsDialog""#), "{fragment}");
    let controller = std::fs::read_to_string(&outcome.controller_path).unwrap();
    assert!(controller.contains(r#"this.byId("usersettingsDialog").close();"#));
}

// Round-trip: detection over a file with no extension point must be able to
// reproduce the document unchanged.
#[test]
fn detection_round_trip_is_lossless() {
    let doc = SourceDocument::parse(HELPER_MODULE.to_string()).unwrap();
    assert!(locate::find_extension_point(doc.root(), doc.text()).is_none());
    assert_eq!(doc.serialize(), HELPER_MODULE);
}

// ---------------------------------------------------------------------------
// add view / add model
// ---------------------------------------------------------------------------

#[test]
fn view_run_writes_both_files_and_registers_the_route() {
    let dir = scaffold_project();
    let mut project = Project::discover(dir.path()).unwrap();

    let outcome = add_view(&mut project, "products").unwrap();
    assert!(outcome.view_path.ends_with("webapp/view/Products.view.xml"));
    assert!(outcome.controller_path.ends_with("webapp/controller/Products.controller.js"));
    assert_eq!(outcome.route, "RouteProducts");
    assert_eq!(outcome.target, "TargetProducts");
    assert_eq!(outcome.pattern, "products");
    assert!(outcome.i18n_updated);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("webapp/manifest.json")).unwrap())
            .unwrap();
    let routing = &manifest["sap.ui5"]["routing"];
    assert_eq!(routing["targets"]["TargetProducts"]["viewName"], "Products");
    assert_eq!(routing["targets"]["TargetProducts"]["viewId"], "products");
    let routes = routing["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["name"], "RouteProducts");
    assert_eq!(routes[0]["pattern"], "products");
    assert_eq!(routes[0]["target"], "TargetProducts");

    let i18n = std::fs::read_to_string(dir.path().join("webapp/i18n/i18n.properties")).unwrap();
    assert!(i18n.contains("titleProducts=Products"));

    // The generated controller is a valid future augmentation target.
    assert_eq!(member_count(&outcome.controller_path), 1);
}

// A view name that itself starts with "Route" must not confuse the reported
// pattern: the outcome carries the registered pattern, never a string derived
// back from the route name.
#[test]
fn route_prefixed_view_name_keeps_its_pattern() {
    let dir = scaffold_project();
    let mut project = Project::discover(dir.path()).unwrap();

    let outcome = add_view(&mut project, "routerSettings").unwrap();
    assert_eq!(outcome.route, "RouteRouterSettings");
    assert_eq!(outcome.pattern, "routersettings");

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("webapp/manifest.json")).unwrap())
            .unwrap();
    let routes = manifest["sap.ui5"]["routing"]["routes"].as_array().unwrap();
    assert_eq!(routes[0]["pattern"], outcome.pattern.as_str());
}

#[test]
fn view_collision_aborts_without_touching_the_manifest() {
    let dir = scaffold_project();
    std::fs::write(dir.path().join("webapp/view/Products.view.xml"), "<mvc:View/>").unwrap();
    let mut project = Project::discover(dir.path()).unwrap();

    let err = add_view(&mut project, "products").unwrap_err();
    assert!(matches!(err, Error::Collision(_)));
    let manifest = std::fs::read_to_string(dir.path().join("webapp/manifest.json")).unwrap();
    assert_eq!(manifest, MANIFEST);
}

#[test]
fn model_run_writes_the_module_once() {
    let dir = scaffold_project();
    let project = Project::discover(dir.path()).unwrap();

    let outcome = add_model(&project, "cart").unwrap();
    assert!(outcome.model_path.ends_with("webapp/model/Cart.js"));
    let js = std::fs::read_to_string(&outcome.model_path).unwrap();
    assert!(js.contains("JSONModel"));

    let err = add_model(&project, "cart").unwrap_err();
    assert!(matches!(err, Error::Collision(_)));
}
