//! Multi-step form state machine.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use super::rules::wire_name;

/// A problem with one field of a lead form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadFieldError {
    /// Field key as it appears in the request JSON.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl LeadFieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flattens `validator` output into field errors, sorted by field name
    /// and keyed by the camelCase wire name.
    #[must_use]
    pub fn from_validation(errors: &ValidationErrors) -> Vec<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = wire_name(&field);
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
                    Self::new(field.clone(), message)
                })
            })
            .collect()
    }
}

impl fmt::Display for LeadFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Lead form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    /// The step has invalid fields.
    #[error("{step} step is incomplete ({} problem(s))", .fields.len())]
    Incomplete {
        /// Name of the failing step.
        step: &'static str,
        /// Invalid fields.
        fields: Vec<LeadFieldError>,
    },

    /// `next` was called on the last step.
    #[error("already on the last step")]
    NoNextStep,
}

impl LeadFormError {
    /// Returns the error code for display and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Incomplete { .. } => "STEP_INCOMPLETE",
            Self::NoNextStep => "NO_NEXT_STEP",
        }
    }
}

/// A form split into ordered steps, each validated on its own.
pub trait StepForm {
    /// Step identifier.
    type Step: Copy + Eq + fmt::Debug + 'static;

    /// Steps in order. Never empty.
    const STEPS: &'static [Self::Step];

    /// Display name of a step.
    fn step_name(step: Self::Step) -> &'static str;

    /// Problems with the fields belonging to `step`.
    fn check_step(&self, step: Self::Step) -> Vec<LeadFieldError>;
}

/// Walks a [`StepForm`] one step at a time.
///
/// Moving forward requires the current step to be valid; moving back never
/// does. Submission requires every step to be valid.
#[derive(Debug, Clone)]
pub struct Wizard<F: StepForm> {
    form: F,
    index: usize,
}

impl<F: StepForm> Wizard<F> {
    /// Starts at the first step.
    pub fn new(form: F) -> Self {
        Self { form, index: 0 }
    }

    /// The form.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Current step.
    pub fn current_step(&self) -> F::Step {
        F::STEPS[self.index]
    }

    /// 1-based position of the current step.
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        F::STEPS.len()
    }

    /// Returns true on the last step.
    pub fn is_last_step(&self) -> bool {
        self.index + 1 == F::STEPS.len()
    }

    /// Validates the current step only.
    pub fn validate_current(&self) -> Result<(), LeadFormError> {
        Self::check(&self.form, self.current_step())
    }

    /// Advances when the current step is valid.
    pub fn next(&mut self) -> Result<F::Step, LeadFormError> {
        if self.is_last_step() {
            return Err(LeadFormError::NoNextStep);
        }
        self.validate_current()?;
        self.index += 1;
        Ok(self.current_step())
    }

    /// Goes back one step; stays put on the first.
    pub fn back(&mut self) -> F::Step {
        self.index = self.index.saturating_sub(1);
        self.current_step()
    }

    /// Validates every step and returns the form ready to send.
    pub fn submission(&self) -> Result<&F, LeadFormError> {
        for &step in F::STEPS {
            Self::check(&self.form, step)?;
        }
        Ok(&self.form)
    }

    fn check(form: &F, step: F::Step) -> Result<(), LeadFormError> {
        let fields = form.check_step(step);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(LeadFormError::Incomplete {
                step: F::step_name(step),
                fields,
            })
        }
    }
}
