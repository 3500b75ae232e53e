//! Form dialog tests
//!
//! Everything here runs headless: sessions are built and driven through the
//! public API, editing cells the way the bound widgets would.

use formbox::{
    login_fields, FieldKind, FieldSpec, FieldValue, FormConfig, FormDialog, FormError,
    FormSession,
};

/// The spec list used by most scenarios: a text field with a default and a
/// pre-checked checkbox.
fn sample_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("username").with_default("bob"),
        FieldSpec::checkbox("active").with_default(true),
    ]
}

#[test]
fn commit_without_edits_returns_the_defaults() {
    let session = FormSession::new(sample_specs()).unwrap();
    let result = session.commit().into_result();

    assert_eq!(result.len(), 2);
    assert_eq!(result["username"], FieldValue::Text("bob".into()));
    assert_eq!(result["active"], FieldValue::Flag(true));
}

#[test]
fn cancel_returns_an_empty_mapping_regardless_of_edits() {
    let mut session = FormSession::new(sample_specs()).unwrap();
    *session.value_mut("username").unwrap() = FieldValue::Text("edited".into());
    *session.value_mut("active").unwrap() = FieldValue::Flag(false);

    let outcome = session.cancel();
    assert!(outcome.is_cancelled());
    assert!(outcome.into_result().is_empty());
}

#[test]
fn nameless_specs_are_absent_from_form_and_result() {
    let mut specs = sample_specs();
    specs.push(FieldSpec {
        label: Some("Orphan".into()),
        ..FieldSpec::default()
    });

    let session = FormSession::new(specs).unwrap();
    assert_eq!(session.fields().len(), 2);

    let result = session.commit().into_result();
    assert_eq!(
        result.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["active", "username"]
    );
}

#[test]
fn selected_option_flows_into_the_result() {
    let mut session = FormSession::new(vec![
        FieldSpec::select("role", ["A", "B"]).with_default("A")
    ])
    .unwrap();

    // The dropdown is restricted to the options, so an edit is always a
    // member of the list.
    *session.value_mut("role").unwrap() = FieldValue::Text("B".into());

    let result = session.commit().into_result();
    assert_eq!(result["role"], FieldValue::Text("B".into()));
}

#[test]
fn committed_values_keep_their_cell_types() {
    let session = FormSession::new(vec![
        FieldSpec::text("name").with_default("x"),
        FieldSpec::secret("token"),
        FieldSpec::checkbox("flag"),
        FieldSpec::select("pick", ["one"]),
    ])
    .unwrap();

    let result = session.commit().into_result();
    assert!(result["name"].as_str().is_some());
    assert!(result["token"].as_str().is_some());
    assert!(result["flag"].as_bool().is_some());
    assert_eq!(result["pick"], FieldValue::Text("one".into()));
}

#[test]
fn duplicate_names_fail_construction() {
    let err = FormDialog::new(
        FormConfig::default(),
        vec![FieldSpec::text("user"), FieldSpec::checkbox("user")],
    )
    .unwrap_err();
    assert!(matches!(err, FormError::DuplicateField(name) if name == "user"));
}

#[test]
fn dialog_construction_keeps_config_and_fields() {
    let config = FormConfig {
        title: "Login".into(),
        error_message: Some("Authentication failed".into()),
        ..FormConfig::default()
    };
    let dialog = FormDialog::new(config, sample_specs()).unwrap();

    assert_eq!(dialog.config().title, "Login");
    assert_eq!(dialog.config().ok_label(), "OK");
    assert_eq!(dialog.session().fields().len(), 2);
}

#[test]
fn login_fields_prepend_username_and_password() {
    let fields = login_fields("admin");
    assert_eq!(fields[0].name, "username");
    assert_eq!(fields[0].kind, FieldKind::Text);
    assert_eq!(fields[0].default, Some(FieldValue::Text("admin".into())));
    assert_eq!(fields[1].name, "password");
    assert_eq!(fields[1].kind, FieldKind::Secret);
}

#[test]
fn result_mapping_serializes_to_plain_json() {
    let session = FormSession::new(sample_specs()).unwrap();
    let result = session.commit().into_result();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "username": "bob", "active": true })
    );
}

#[test]
fn field_spec_array_parses_like_the_original_dict_list() {
    let specs: Vec<FieldSpec> = serde_json::from_str(
        r#"[
            {"name": "username", "type": "text", "default": "bob"},
            {"name": "password", "type": "hidden_text", "label": "Password: "},
            {"name": "domain", "type": "select", "options": ["Local", "US"], "default": "US"},
            {"name": "readonly", "type": "checkbox", "default": false}
        ]"#,
    )
    .unwrap();

    let session = FormSession::new(specs).unwrap();
    let result = session.commit().into_result();
    assert_eq!(result["username"], FieldValue::Text("bob".into()));
    assert_eq!(result["password"], FieldValue::Text(String::new()));
    assert_eq!(result["domain"], FieldValue::Text("US".into()));
    assert_eq!(result["readonly"], FieldValue::Flag(false));
}
