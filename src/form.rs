//! Form State and the Terminal State Machine
//!
//! A [`FormSession`] owns the value cells for one dialog instance and makes
//! exactly one transition, to committed or cancelled. Committing and
//! cancelling consume the session, so the outcome is an explicit return
//! value rather than state inspected after the event loop exits.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::info;

use crate::config::FormConfig;
use crate::field::{normalize, Field, FieldSpec, FieldValue};

/// Committed mapping from field name to final value.
pub type FormResult = BTreeMap<String, FieldValue>;

/// Errors from constructing or running a dialog.
#[derive(Debug, Error)]
pub enum FormError {
    /// Two field specs shared a name.
    #[error("duplicate field name: {0}")]
    DuplicateField(String),

    /// The windowing backend failed to open or run the dialog.
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

/// Terminal outcome of one dialog lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Committed(FormResult),
    Cancelled,
}

impl FormOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FormOutcome::Cancelled)
    }

    /// Collapse to the plain-mapping contract: the committed values, or an
    /// empty mapping when cancelled.
    pub fn into_result(self) -> FormResult {
        match self {
            FormOutcome::Committed(result) => result,
            FormOutcome::Cancelled => FormResult::new(),
        }
    }
}

/// The live form: seeded value cells in declaration order.
///
/// Sessions are single-use; a re-prompt (say, after a failed login check)
/// means building a fresh session with an updated error banner.
#[derive(Debug)]
pub struct FormSession {
    fields: Vec<Field>,
}

impl FormSession {
    /// Normalize `specs` and seed one cell per retained field.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self, FormError> {
        Ok(Self {
            fields: normalize(specs)?,
        })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name() == name).map(|f| &f.value)
    }

    /// Mutable access to one cell, as the bound widget would have it.
    pub fn value_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .map(|f| &mut f.value)
    }

    /// Read every cell into the result mapping.
    pub fn commit(self) -> FormOutcome {
        let result: FormResult = self
            .fields
            .into_iter()
            .map(|f| (f.spec.name, f.value))
            .collect();
        info!("form committed: {} values", result.len());
        FormOutcome::Committed(result)
    }

    /// Discard every edit.
    pub fn cancel(self) -> FormOutcome {
        info!("form cancelled");
        FormOutcome::Cancelled
    }
}

/// A fully built dialog, ready to run once.
///
/// `new` is the whole construction contract: filter, validate and seed the
/// fields, pair them with an immutable [`FormConfig`].
#[derive(Debug)]
pub struct FormDialog {
    config: FormConfig,
    session: FormSession,
}

impl FormDialog {
    pub fn new(config: FormConfig, specs: Vec<FieldSpec>) -> Result<Self, FormError> {
        Ok(Self {
            config,
            session: FormSession::new(specs)?,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Open the window and block until the user commits or cancels.
    pub fn run(self) -> Result<FormOutcome, FormError> {
        crate::gui::run_form(self)
    }

    /// Tear the dialog apart without running it.
    pub fn into_parts(self) -> (FormConfig, FormSession) {
        (self.config, self.session)
    }
}
