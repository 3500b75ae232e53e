//! Field Descriptors and Value Cells
//!
//! A form is declared as a list of [`FieldSpec`]s. Normalization turns that
//! list into the typed value cells the dialog renders and later collects
//! into the result mapping.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::form::FormError;

/// Field kind, selecting the input widget and the cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain single-line text entry.
    #[default]
    Text,
    /// Single-line text entry with masked characters.
    #[serde(alias = "hidden_text")]
    Secret,
    /// Boolean toggle.
    Checkbox,
    /// Fixed-choice dropdown restricted to the spec's `options`.
    Select,
}

/// Current value of one field's cell.
///
/// Serializes untagged, so a committed mapping comes out as plain JSON
/// strings and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// Declarative description of one form input.
///
/// The serde format follows the classic "list of dicts" shape:
///
/// ```json
/// { "name": "role", "label": "Role: ", "type": "select",
///   "options": ["admin", "user"], "default": "user" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Result-mapping key. Specs without a name are dropped during
    /// normalization.
    #[serde(default)]
    pub name: String,
    /// Display label; the name is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// Initial cell value; empty string / unchecked when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
    /// Choices for [`FieldKind::Select`]; ignored by other kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldSpec {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            ..Self::default()
        }
    }

    pub fn secret(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Secret,
            ..Self::default()
        }
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Checkbox,
            ..Self::default()
        }
    }

    pub fn select(
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Select,
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<FieldValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Seed the cell for this spec.
    ///
    /// Checkbox cells only accept boolean defaults, the rest only strings; a
    /// mismatched default falls back to the kind's empty value. Select cells
    /// are clamped to the option list so the committed value is always one
    /// of `options`.
    fn seed(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Secret => match &self.default {
                Some(FieldValue::Text(text)) => FieldValue::Text(text.clone()),
                Some(FieldValue::Flag(_)) => {
                    warn!("field '{}': boolean default on a text field, ignoring", self.name);
                    FieldValue::Text(String::new())
                }
                None => FieldValue::Text(String::new()),
            },
            FieldKind::Checkbox => match &self.default {
                Some(FieldValue::Flag(flag)) => FieldValue::Flag(*flag),
                Some(FieldValue::Text(_)) => {
                    warn!("field '{}': text default on a checkbox, ignoring", self.name);
                    FieldValue::Flag(false)
                }
                None => FieldValue::Flag(false),
            },
            FieldKind::Select => {
                let default = self.default.as_ref().and_then(FieldValue::as_str);
                let choice = match default {
                    Some(text) if self.options.iter().any(|o| o == text) => text.to_owned(),
                    other => {
                        if let Some(stray) = other {
                            warn!(
                                "field '{}': default '{}' is not an option, using the first option",
                                self.name, stray
                            );
                        }
                        self.options.first().cloned().unwrap_or_default()
                    }
                };
                FieldValue::Text(choice)
            }
        }
    }
}

/// A retained field: its spec plus the seeded cell.
#[derive(Debug, Clone)]
pub struct Field {
    pub spec: FieldSpec,
    pub value: FieldValue,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Display label, falling back to the field name.
    pub fn label(&self) -> &str {
        self.spec.label.as_deref().unwrap_or(&self.spec.name)
    }
}

/// Normalize a spec list into seeded fields.
///
/// Nameless specs are dropped (with a warning); duplicate names are a
/// structural error rather than last-write-wins.
pub(crate) fn normalize(specs: Vec<FieldSpec>) -> Result<Vec<Field>, FormError> {
    let mut fields: Vec<Field> = Vec::with_capacity(specs.len());
    for spec in specs {
        if spec.name.is_empty() {
            warn!("dropping field spec without a name (label: {:?})", spec.label);
            continue;
        }
        if fields.iter().any(|f| f.spec.name == spec.name) {
            return Err(FormError::DuplicateField(spec.name));
        }
        let value = spec.seed();
        fields.push(Field { spec, value });
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nameless_specs_are_dropped() {
        let specs = vec![
            FieldSpec::text("username"),
            FieldSpec {
                label: Some("Orphan".into()),
                ..FieldSpec::default()
            },
        ];
        let fields = normalize(specs).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), "username");
        // Label falls back to the name when unset.
        assert_eq!(fields[0].label(), "username");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let specs = vec![FieldSpec::text("user"), FieldSpec::secret("user")];
        match normalize(specs) {
            Err(FormError::DuplicateField(name)) => assert_eq!(name, "user"),
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }

    #[test]
    fn defaults_seed_the_cells() {
        let specs = vec![
            FieldSpec::text("username").with_default("bob"),
            FieldSpec::checkbox("active").with_default(true),
            FieldSpec::secret("password"),
        ];
        let fields = normalize(specs).unwrap();
        assert_eq!(fields[0].value, FieldValue::Text("bob".into()));
        assert_eq!(fields[1].value, FieldValue::Flag(true));
        assert_eq!(fields[2].value, FieldValue::Text(String::new()));
    }

    #[test]
    fn select_default_outside_options_is_clamped() {
        let fields = normalize(vec![
            FieldSpec::select("role", ["A", "B"]).with_default("C")
        ])
        .unwrap();
        assert_eq!(fields[0].value, FieldValue::Text("A".into()));

        // No options at all leaves an empty cell.
        let fields = normalize(vec![FieldSpec::select("empty", Vec::<String>::new())]).unwrap();
        assert_eq!(fields[0].value, FieldValue::Text(String::new()));
    }

    #[test]
    fn mismatched_default_type_falls_back() {
        let fields = normalize(vec![
            FieldSpec::checkbox("active").with_default("yes"),
            FieldSpec::text("note").with_default(true),
        ])
        .unwrap();
        assert_eq!(fields[0].value, FieldValue::Flag(false));
        assert_eq!(fields[1].value, FieldValue::Text(String::new()));
    }

    #[test]
    fn specs_parse_from_the_dict_wire_format() {
        let spec: FieldSpec = serde_json::from_str(
            r#"{"name": "password", "type": "hidden_text", "label": "Password: "}"#,
        )
        .unwrap();
        assert_eq!(spec.kind, FieldKind::Secret);
        assert_eq!(spec.label.as_deref(), Some("Password: "));

        let spec: FieldSpec = serde_json::from_str(
            r#"{"name": "domain", "type": "select", "options": ["Local", "US"], "default": "Local"}"#,
        )
        .unwrap();
        assert_eq!(spec.kind, FieldKind::Select);
        assert_eq!(spec.default, Some(FieldValue::Text("Local".into())));

        // Missing type means plain text.
        let spec: FieldSpec = serde_json::from_str(r#"{"name": "note"}"#).unwrap();
        assert_eq!(spec.kind, FieldKind::Text);

        // Boolean defaults stay booleans.
        let spec: FieldSpec =
            serde_json::from_str(r#"{"name": "readonly", "type": "checkbox", "default": false}"#)
                .unwrap();
        assert_eq!(spec.default, Some(FieldValue::Flag(false)));
    }
}
