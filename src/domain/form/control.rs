//! Single form control state.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::validators::{ValidationError, Validator};

/// Value of one input plus its interaction flags.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct FormControl {
    value: String,
    #[zeroize(skip)]
    validators: Vec<Validator>,
    touched: bool,
    dirty: bool,
}

impl FormControl {
    /// Creates control with initial value and rules.
    #[must_use]
    pub fn new(initial: impl Into<String>, validators: impl Into<Vec<Validator>>) -> Self {
        Self {
            value: initial.into(),
            validators: validators.into(),
            touched: false,
            dirty: false,
        }
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces value and marks the control dirty.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value.zeroize();
        self.value = value.into();
        self.dirty = true;
    }

    /// Records that the control lost focus.
    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    /// Returns whether the control has been blurred at least once.
    #[must_use]
    pub const fn touched(&self) -> bool {
        self.touched
    }

    /// Returns whether the value was changed by the user.
    #[must_use]
    pub const fn dirty(&self) -> bool {
        self.dirty
    }

    /// Returns every failing rule, in declaration order.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| v.validate(&self.value))
            .collect()
    }

    /// Returns the first failing rule.
    #[must_use]
    pub fn first_error(&self) -> Option<ValidationError> {
        self.validators.iter().find_map(|v| v.validate(&self.value))
    }

    /// Returns whether every rule passes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    /// Returns whether any rule fails.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Clears value and interaction flags.
    pub fn reset(&mut self) {
        self.value.zeroize();
        self.touched = false;
        self.dirty = false;
    }
}
