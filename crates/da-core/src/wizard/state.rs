use crate::draft::FormDraft;
use crate::requirements::validation::{validate_step, ValidationErrors, STEP_COUNT};
use crate::requirements::{Budget, PartialRequirements, ProjectRequirements};

/// In-memory state of the four-step requirements wizard.
///
/// Step transitions:
/// ```text
///   1 ──advance (validates step 1)──► 2 ──► 3 ──► 4 ──finish──► ProjectRequirements
///   ◄──back (no validation, floors at 1)──
///   goto(n): backwards always allowed, forwards only by one step (validated)
/// ```
#[derive(Debug, Clone)]
pub struct WizardState {
    data: PartialRequirements,
    current_step: u32,
    errors: ValidationErrors,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh wizard at step 1 with the form's preselected defaults
    /// (moderate complexity, medium budget).
    pub fn new() -> Self {
        let data = PartialRequirements {
            complexity: Some(3),
            budget: Some(Budget::Medium),
            ..Default::default()
        };
        Self {
            data,
            current_step: 1,
            errors: ValidationErrors::new(),
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn data(&self) -> &PartialRequirements {
        &self.data
    }

    /// Validation errors from the last failed transition.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Merge edited fields into the snapshot. Any prior errors are cleared;
    /// they refer to values the user has just changed.
    pub fn apply(&mut self, update: PartialRequirements) {
        self.data.merge(update);
        self.errors.clear();
    }

    /// Validate the current step, recording errors. Returns whether it
    /// passed.
    pub fn validate_current(&mut self) -> bool {
        self.errors = validate_step(self.current_step, &self.data);
        self.errors.is_empty()
    }

    /// Move to the next step if the current one validates. The last step
    /// validates but does not advance further.
    pub fn advance(&mut self) -> bool {
        if !self.validate_current() {
            return false;
        }
        if self.current_step < STEP_COUNT {
            self.current_step += 1;
        }
        true
    }

    /// Move back one step. No validation; floors at step 1.
    pub fn back(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.errors.clear();
    }

    /// Jump to `step`: already-visited steps are always reachable, the next
    /// step only through validation, anything further is refused.
    pub fn goto(&mut self, step: u32) -> bool {
        if step >= 1 && step < self.current_step {
            self.current_step = step;
            self.errors.clear();
            return true;
        }
        if step == self.current_step + 1 {
            return self.advance();
        }
        step == self.current_step
    }

    /// Adopt a stored draft's data and step.
    pub fn restore(&mut self, draft: &FormDraft) {
        self.data = draft.data.clone();
        self.current_step = draft.current_step.clamp(1, STEP_COUNT);
        self.errors.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run the final validation and yield the completed requirements, or
    /// the field errors blocking submission.
    pub fn finish(&mut self) -> Result<ProjectRequirements, ValidationErrors> {
        let errors = validate_step(STEP_COUNT, &self.data);
        if errors.is_empty() {
            Ok(self.data.clone().into_complete())
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }
}
