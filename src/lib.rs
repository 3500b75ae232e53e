//! formbox
//!
//! Declarative modal form dialogs for quick configuration and login prompts
//! in desktop scripts. Describe the form as a list of [`FieldSpec`]s, run
//! it, and get back a name → value mapping — empty when the user cancelled:
//!
//! ```no_run
//! use formbox::{run_form, FieldSpec, FormConfig};
//!
//! let config = FormConfig {
//!     title: "Settings".into(),
//!     header: "Connection settings".into(),
//!     ..FormConfig::default()
//! };
//! let fields = vec![
//!     FieldSpec::text("host").with_default("localhost"),
//!     FieldSpec::checkbox("tls").with_label("Use TLS?"),
//!     FieldSpec::select("region", ["eu", "us"]).with_default("eu"),
//! ];
//!
//! let result = run_form(config, fields)?;
//! if result.is_empty() {
//!     println!("cancelled");
//! }
//! # Ok::<(), formbox::FormError>(())
//! ```

pub mod config;
pub mod field;
pub mod form;
pub mod gui;
pub mod theme;

pub use config::FormConfig;
pub use field::{Field, FieldKind, FieldSpec, FieldValue};
pub use form::{FormDialog, FormError, FormOutcome, FormResult, FormSession};
pub use theme::{BuiltinThemes, ThemeRegistry};

/// Build and run a form dialog, returning the plain result mapping (empty
/// when cancelled).
pub fn run_form(config: FormConfig, fields: Vec<FieldSpec>) -> Result<FormResult, FormError> {
    Ok(FormDialog::new(config, fields)?.run()?.into_result())
}

/// The two standard login fields: username (text) and password (masked).
pub fn login_fields(default_username: &str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("username")
            .with_label("Username: ")
            .with_default(default_username),
        FieldSpec::secret("password").with_label("Password: "),
    ]
}

/// Run a login prompt: username and password prepended to `extra_fields`.
///
/// Unset title and OK-button label default to "Log In" instead of the plain
/// form defaults.
pub fn login_form(
    mut config: FormConfig,
    default_username: &str,
    extra_fields: Vec<FieldSpec>,
) -> Result<FormResult, FormError> {
    if config.title.is_empty() {
        config.title = "Log In".into();
    }
    if config.ok_label.is_none() {
        config.ok_label = Some("Log In".into());
    }

    let mut fields = login_fields(default_username);
    fields.extend(extra_fields);
    run_form(config, fields)
}
