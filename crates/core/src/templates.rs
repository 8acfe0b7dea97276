//! Text templates for generated artifacts.
//!
//! All artifacts here are produced by plain placeholder substitution, never
//! by the AST engine: `{namespace}` is the app id from the manifest,
//! `{Name}` the capitalized identifier, `{name}` its lowercased form.

/// XML view shell, wired to its controller and an i18n page title.
const VIEW: &str = r#"<mvc:View
    controllerName="{namespace}.controller.{Name}"
    xmlns="sap.m"
    xmlns:mvc="sap.ui.core.mvc">
    <Page title="{i18n>title{Name}}">
        <content></content>
    </Page>
</mvc:View>
"#;

/// Controller shell extending the project's BaseController.
const CONTROLLER: &str = r#"sap.ui.define([
    "{namespace}/controller/BaseController"
], function (BaseController) {
    "use strict";

    return BaseController.extend("{namespace}.controller.{Name}", {
        onInit: function () {

        }
    });
});
"#;

/// JSON model factory module.
const MODEL: &str = r#"sap.ui.define([
    "sap/ui/model/json/JSONModel"
], function (JSONModel) {
    "use strict";

    return {
        /**
         * Creates a new JSON model with initial data.
         * @returns {sap.ui.model.json.JSONModel} The new JSON model instance.
         */
        create: function () {
            const oModel = new JSONModel({
                someProperty: "Initial Value",
                editMode: false
            });
            return oModel;
        }
    };
});
"#;

/// Dialog fragment. The element id is the lowercased identifier plus
/// "Dialog", which the synthesized close handler targets via `byId`.
const FRAGMENT: &str = r#"<core:FragmentDefinition
    xmlns="sap.m"
    xmlns:core="sap.ui.core">
    <Dialog
        id="{name}Dialog"
        title="{Name}">
        <content>
        </content>
        <beginButton>
            <Button text="OK" press=".onClose{Name}Dialog"/>
        </beginButton>
        <endButton>
            <Button text="Cancel" press=".onClose{Name}Dialog"/>
        </endButton>
    </Dialog>
</core:FragmentDefinition>
"#;

fn render(template: &str, namespace: &str, name: &str) -> String {
    template
        .replace("{namespace}", namespace)
        .replace("{Name}", name)
        .replace("{name}", &name.to_lowercase())
}

pub fn render_view(namespace: &str, name: &str) -> String {
    render(VIEW, namespace, name)
}

pub fn render_controller(namespace: &str, name: &str) -> String {
    render(CONTROLLER, namespace, name)
}

pub fn render_model() -> String {
    MODEL.to_string()
}

pub fn render_fragment(name: &str) -> String {
    render(FRAGMENT, "", name)
}
