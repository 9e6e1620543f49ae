//! Waitlist form state machine

use super::field::FormField;
use super::step::{FormVariant, StepId};
use super::validation::ValidationError;
use crate::state::Lead;

/// Result of trying to move forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The active field failed validation; the step did not change
    Blocked(ValidationError),
    /// Moved to the given step index
    Moved(usize),
    /// Last step validated; the lead is ready to be sent
    Submit(Lead),
    /// A submission is in flight or already done; nothing happened
    Ignored,
}

/// Result of trying to move backward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the given step index
    Moved(usize),
    /// Retreated from the first step; all state was reset
    Cancelled,
    /// A submission is in flight; nothing happened
    Ignored,
}

/// Step-sequenced waitlist form
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    variant: FormVariant,
    fields: Vec<FormField>,
    current_step: usize,
    /// Collapsed forms show only the email prompt
    pub is_open: bool,
    pub is_submitting: bool,
    pub is_complete: bool,
}

impl WaitlistForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: variant
                .steps()
                .iter()
                .copied()
                .map(FormField::for_step)
                .collect(),
            current_step: 0,
            is_open: false,
            is_submitting: false,
            is_complete: false,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, step: StepId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.step == step)
    }

    #[cfg(test)]
    fn field_mut(&mut self, step: StepId) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.step == step)
    }

    pub fn step_count(&self) -> usize {
        self.fields.len()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.fields.len()
    }

    pub fn active_field(&self) -> &FormField {
        &self.fields[self.current_step]
    }

    fn active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.current_step]
    }

    /// Error currently recorded for a step
    pub fn error(&self, step: StepId) -> Option<ValidationError> {
        self.field(step).and_then(|f| f.error)
    }

    /// Active field has a value and no outstanding error
    pub fn can_proceed(&self) -> bool {
        let field = self.active_field();
        !field.is_empty() && field.error.is_none()
    }

    /// Whether keyboard edits reach the form
    fn is_editable(&self) -> bool {
        !self.is_submitting && !self.is_complete
    }

    /// Expand the collapsed form into step-by-step mode
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Set a step's value directly, skipping keyboard editing
    #[cfg(test)]
    pub fn set_value(&mut self, step: StepId, value: &str) {
        if let Some(field) = self.field_mut(step) {
            field.set_text(value);
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.is_editable() {
            self.active_field_mut().push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_editable() {
            self.active_field_mut().pop_char();
        }
    }

    pub fn select_next(&mut self) {
        if self.is_editable() {
            self.active_field_mut().select_next();
        }
    }

    pub fn select_prev(&mut self) {
        if self.is_editable() {
            self.active_field_mut().select_prev();
        }
    }

    /// Validate the active step and move forward, or hand back the lead on the last step
    pub fn advance(&mut self) -> Advance {
        if !self.is_editable() {
            return Advance::Ignored;
        }

        if let Err(error) = self.active_field_mut().validate() {
            return Advance::Blocked(error);
        }

        if self.is_last_step() {
            self.is_submitting = true;
            Advance::Submit(self.lead())
        } else {
            self.current_step += 1;
            Advance::Moved(self.current_step)
        }
    }

    /// Step back one, or cancel the whole form from the first step
    pub fn retreat(&mut self) -> Retreat {
        if self.is_submitting {
            return Retreat::Ignored;
        }

        if self.current_step == 0 {
            self.cancel();
            Retreat::Cancelled
        } else {
            self.current_step -= 1;
            Retreat::Moved(self.current_step)
        }
    }

    /// Discard everything and collapse the form
    pub fn cancel(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.current_step = 0;
        self.is_open = false;
        self.is_submitting = false;
        self.is_complete = false;
    }

    /// Mark the in-flight submission as accepted; the lead is discarded
    pub fn submission_succeeded(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.is_submitting = false;
        self.is_complete = true;
    }

    /// Return to the final step with every value kept
    pub fn submission_failed(&mut self) {
        self.is_submitting = false;
        self.current_step = self.fields.len().saturating_sub(1);
    }

    /// Snapshot the collected values
    pub fn lead(&self) -> Lead {
        let text = |step| {
            self.field(step)
                .map(|f| f.as_text().to_string())
                .unwrap_or_default()
        };
        Lead {
            email: text(StepId::Email),
            phone: self
                .field(StepId::Phone)
                .map(|f| f.as_text().to_string()),
            company: text(StepId::Company),
            sector: text(StepId::Sector),
            size: text(StepId::Size),
        }
    }
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill the active step with a value its validator accepts
    fn fill_valid(form: &mut WaitlistForm) {
        let value = match form.active_field().step {
            StepId::Email => "a@b.com",
            StepId::Phone => "+57 300 123 4567",
            StepId::Company => "Mi Empresa",
            StepId::Sector => "Salud",
            StepId::Size => "11-50 empleados",
        };
        let step = form.active_field().step;
        form.set_value(step, value);
    }

    fn fill_invalid(form: &mut WaitlistForm) {
        let value = match form.active_field().step {
            StepId::Email => "bad",
            StepId::Phone => "12",
            StepId::Company => "x",
            StepId::Sector | StepId::Size => "",
        };
        let step = form.active_field().step;
        form.set_value(step, value);
    }

    fn form_at_last_step(variant: FormVariant) -> WaitlistForm {
        let mut form = WaitlistForm::new(variant);
        form.open();
        while !form.is_last_step() {
            fill_valid(&mut form);
            form.advance();
        }
        fill_valid(&mut form);
        form
    }

    mod advance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_value_keeps_step_and_sets_error() {
            for variant in [FormVariant::Standard, FormVariant::WithPhone] {
                let mut form = WaitlistForm::new(variant);
                for index in 0..form.step_count() {
                    assert_eq!(form.current_step(), index);
                    fill_invalid(&mut form);
                    let step = form.active_field().step;

                    assert!(matches!(form.advance(), Advance::Blocked(_)));
                    assert_eq!(form.current_step(), index);
                    assert!(form.error(step).is_some());

                    fill_valid(&mut form);
                    form.advance();
                }
            }
        }

        #[test]
        fn test_valid_value_clears_error_and_moves_one_step() {
            let mut form = WaitlistForm::new(FormVariant::WithPhone);
            for index in 0..form.step_count() - 1 {
                let step = form.active_field().step;
                fill_invalid(&mut form);
                form.advance();
                fill_valid(&mut form);
                // stale error left over from an earlier attempt
                form.fields[index].error = Some(ValidationError::InvalidEmail);

                assert_eq!(form.advance(), Advance::Moved(index + 1));
                assert!(form.error(step).is_none());
            }
        }

        #[test]
        fn test_bad_email_message() {
            let mut form = WaitlistForm::default();
            form.set_value(StepId::Email, "bad");
            assert_eq!(form.advance(), Advance::Blocked(ValidationError::InvalidEmail));
            assert_eq!(
                form.error(StepId::Email).map(|e| e.to_string()),
                Some("Por favor ingresa un correo válido".to_string())
            );
        }

        #[test]
        fn test_good_email_proceeds() {
            let mut form = WaitlistForm::default();
            form.set_value(StepId::Email, "a@b.com");
            assert_eq!(form.advance(), Advance::Moved(1));
            assert!(form.error(StepId::Email).is_none());
        }

        #[test]
        fn test_last_step_triggers_submission() {
            let mut form = form_at_last_step(FormVariant::WithPhone);
            let outcome = form.advance();

            assert_eq!(
                outcome,
                Advance::Submit(Lead {
                    email: "a@b.com".to_string(),
                    phone: Some("+57 300 123 4567".to_string()),
                    company: "Mi Empresa".to_string(),
                    sector: "Salud".to_string(),
                    size: "11-50 empleados".to_string(),
                })
            );
            assert!(form.is_submitting);
            assert_eq!(form.current_step(), form.step_count() - 1);
        }

        #[test]
        fn test_standard_variant_lead_has_no_phone() {
            let mut form = form_at_last_step(FormVariant::Standard);
            match form.advance() {
                Advance::Submit(lead) => assert!(lead.phone.is_none()),
                other => panic!("expected submission, got {other:?}"),
            }
        }

        #[test]
        fn test_advance_ignored_while_submitting() {
            let mut form = form_at_last_step(FormVariant::Standard);
            assert!(matches!(form.advance(), Advance::Submit(_)));
            assert_eq!(form.advance(), Advance::Ignored);
        }

        #[test]
        fn test_edits_ignored_while_submitting() {
            let mut form = form_at_last_step(FormVariant::Standard);
            form.advance();
            form.select_prev();
            assert_eq!(form.active_field().as_text(), "11-50 empleados");
        }
    }

    mod retreat {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_moves_back_one_step() {
            let mut form = WaitlistForm::default();
            form.open();
            fill_valid(&mut form);
            form.advance();
            fill_valid(&mut form);
            form.advance();
            assert_eq!(form.retreat(), Retreat::Moved(1));
            assert_eq!(form.retreat(), Retreat::Moved(0));
        }

        #[test]
        fn test_values_survive_retreat() {
            let mut form = WaitlistForm::default();
            form.set_value(StepId::Email, "a@b.com");
            form.advance();
            form.retreat();
            assert_eq!(form.active_field().as_text(), "a@b.com");
        }

        #[test]
        fn test_retreat_from_first_step_resets_everything() {
            let mut form = WaitlistForm::default();
            form.open();
            form.set_value(StepId::Email, "bad");
            form.advance();
            form.set_value(StepId::Company, "Acme");

            assert_eq!(form.retreat(), Retreat::Cancelled);
            assert_eq!(form.current_step(), 0);
            assert!(!form.is_open);
            assert!(!form.is_complete);
            for field in form.fields() {
                assert!(field.is_empty(), "{} not cleared", field.name());
                assert!(field.error.is_none(), "{} error not cleared", field.name());
            }
        }

        #[test]
        fn test_retreat_ignored_while_submitting() {
            let mut form = form_at_last_step(FormVariant::WithPhone);
            form.advance();
            assert_eq!(form.retreat(), Retreat::Ignored);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_marks_complete() {
            let mut form = form_at_last_step(FormVariant::WithPhone);
            form.advance();
            form.submission_succeeded();
            assert!(form.is_complete);
            assert!(!form.is_submitting);
            assert_eq!(form.lead().email, "");
            assert_eq!(form.advance(), Advance::Ignored);
        }

        #[test]
        fn test_failure_keeps_data_and_stays_editable() {
            let mut form = form_at_last_step(FormVariant::WithPhone);
            let before = form.lead();
            form.advance();
            form.submission_failed();

            assert!(!form.is_complete);
            assert!(!form.is_submitting);
            assert!(form.is_last_step());
            assert_eq!(form.lead(), before);
            assert!(matches!(form.advance(), Advance::Submit(_)));
        }
    }

    mod state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_collapsed_at_first_step() {
            let form = WaitlistForm::new(FormVariant::Standard);
            assert!(!form.is_open);
            assert_eq!(form.current_step(), 0);
            assert_eq!(form.step_count(), 4);
            assert_eq!(form.active_field().step, StepId::Email);
        }

        #[test]
        fn test_can_proceed_requires_value_without_error() {
            let mut form = WaitlistForm::default();
            assert!(!form.can_proceed());
            form.input_char('x');
            assert!(form.can_proceed());
            form.advance();
            assert!(!form.can_proceed());
            form.backspace();
            form.input_char('y');
            assert!(form.can_proceed());
        }

        #[test]
        fn test_prefilled_email_survives_open() {
            let mut form = WaitlistForm::default();
            form.set_value(StepId::Email, "pre@fill.co");
            form.open();
            assert_eq!(form.active_field().as_text(), "pre@fill.co");
        }
    }
}
