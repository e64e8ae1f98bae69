//! Use case driving one run of the requirements wizard.
//! 需求向导的会话用例。

use da_core::requirements::validation::ValidationErrors;
use da_core::requirements::{PartialRequirements, ProjectRequirements};
use da_core::wizard::WizardState;
use tracing::{debug, info, info_span};

use crate::drafts::DraftManager;

/// Drives one run of the requirements wizard, keeping the draft slot in
/// sync with every edit:
///
/// - resume from a stored draft on entry,
/// - debounced auto-save after every change or step transition,
/// - clear the draft (and cancel the pending save) on submit or discard.
pub struct WizardSession {
    state: WizardState,
    drafts: DraftManager,
    resumed_from: Option<String>,
}

impl WizardSession {
    /// Start a session, resuming from a stored draft when a live one
    /// exists.
    pub fn begin(drafts: DraftManager) -> Self {
        let span = info_span!("wizard.begin");
        let _guard = span.enter();

        let mut state = WizardState::new();
        let resumed_from = match drafts.load() {
            Some(draft) => {
                info!(step = draft.current_step, "resuming wizard from draft");
                let saved_at = draft.saved_at_local();
                state.restore(&draft);
                saved_at
            }
            None => None,
        };

        Self {
            state,
            drafts,
            resumed_from,
        }
    }

    /// Saved-at notice for the "resume draft" banner, present when this
    /// session restored a draft.
    pub fn resumed_from(&self) -> Option<&str> {
        self.resumed_from.as_deref()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> u32 {
        self.state.current_step()
    }

    /// Merge edited fields and schedule a debounced auto-save of the
    /// resulting snapshot.
    pub fn apply(&mut self, update: PartialRequirements) {
        self.state.apply(update);
        self.schedule_save();
    }

    /// Validate and move to the next step; the new position is auto-saved.
    pub fn advance(&mut self) -> bool {
        if !self.state.advance() {
            debug!(step = self.state.current_step(), "step blocked by validation");
            return false;
        }
        self.schedule_save();
        true
    }

    /// Move back one step; the new position is auto-saved.
    pub fn back(&mut self) {
        self.state.back();
        self.schedule_save();
    }

    /// Jump to an already-visited step, or to the next one through
    /// validation.
    pub fn goto(&mut self, step: u32) -> bool {
        if !self.state.goto(step) {
            return false;
        }
        self.schedule_save();
        true
    }

    /// Run the final validation and complete the wizard. On success the
    /// stored draft is cleared and any pending auto-save cancelled; on
    /// failure both are left untouched so the user can keep editing.
    pub fn submit(&mut self) -> Result<ProjectRequirements, ValidationErrors> {
        let span = info_span!("wizard.submit");
        let _guard = span.enter();

        let requirements = self.state.finish()?;
        self.drafts.cancel_pending_save();
        self.drafts.clear();
        info!("wizard submitted, draft cleared");
        Ok(requirements)
    }

    /// Abandon the run: reset the state and drop the stored draft along
    /// with any pending save.
    pub fn discard(&mut self) {
        self.drafts.cancel_pending_save();
        self.drafts.clear();
        self.state.reset();
        info!("wizard discarded, draft cleared");
    }

    fn schedule_save(&self) {
        self.drafts
            .auto_save(self.state.current_step(), self.state.data().clone());
    }
}
