use std::collections::HashSet;

use super::form::{ApplicationForm, FieldId};
use super::steps::{self, FieldError, TOTAL_STEPS};

/// Navigation state for the casting wizard: current step, the high-water
/// mark gating backward/lateral jumps, the touched set that suppresses
/// premature error display, and the post-submission lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    pub step: usize,
    pub max_step: usize,
    pub touched: HashSet<FieldId>,
    pub submitted: bool,
}

impl Wizard {
    pub fn touch(&mut self, id: FieldId) {
        self.touched.insert(id);
    }

    pub fn touch_step(&mut self, form: &ApplicationForm) {
        for id in steps::fields_for_step(self.step, form) {
            self.touched.insert(id);
        }
    }

    pub fn touch_all(&mut self, form: &ApplicationForm) {
        for step in 0..TOTAL_STEPS {
            for id in steps::fields_for_step(step, form) {
                self.touched.insert(id);
            }
        }
    }

    /// Marks the current step's fields touched and, if they all validate,
    /// moves forward and raises the high-water mark. On failure the
    /// step-scoped error list is returned for the page to surface; the
    /// position does not change.
    pub fn advance(&mut self, form: &ApplicationForm) -> Result<(), Vec<FieldError>> {
        self.touch_step(form);
        let errors = steps::step_errors(form, self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.max_step = self.max_step.max(self.step + 1).min(TOTAL_STEPS - 1);
        self.step = (self.step + 1).min(TOTAL_STEPS - 1);
        Ok(())
    }

    /// Back navigation never re-validates.
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Lateral navigation to any previously reached step; locked once the
    /// application has been submitted.
    pub fn jump_to(&mut self, index: usize) {
        if self.submitted || index > self.max_step {
            return;
        }
        self.step = index;
    }

    pub fn reachable(&self, index: usize) -> bool {
        !self.submitted && index <= self.max_step
    }

    pub fn is_last(&self) -> bool {
        self.step == TOTAL_STEPS - 1
    }

    /// Post-submission reset: progress is wound back and navigation locks
    /// until a new application is started.
    pub fn complete(&mut self) {
        self.submitted = true;
        self.step = 0;
        self.max_step = 0;
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::form::FormAction;
    use crate::casting::steps;
    use std::rc::Rc;
    use yew::Reducible;

    fn apply(form: ApplicationForm, action: FormAction) -> ApplicationForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    fn filled_basics() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        for action in [
            FormAction::SetFullName("Jane Doe".into()),
            FormAction::SetCity("Mumbai".into()),
            FormAction::SetEmail("jane@x.com".into()),
            FormAction::SetDob("1998-04-12".into()),
        ] {
            form = apply(form, action);
        }
        form
    }

    #[test]
    fn failed_advance_keeps_position_and_high_water_mark() {
        let mut wizard = Wizard::default();
        let form = ApplicationForm::default();
        let errors = wizard.advance(&form).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(wizard.step, 0);
        assert_eq!(wizard.max_step, 0);
        assert!(wizard.touched.contains(&FieldId::FullName));
        assert!(wizard.touched.contains(&FieldId::Dob));
    }

    #[test]
    fn successful_advance_moves_forward() {
        let mut wizard = Wizard::default();
        let form = filled_basics();
        assert!(wizard.advance(&form).is_ok());
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.max_step, 1);
    }

    #[test]
    fn retreat_floors_at_zero_without_validating() {
        let mut wizard = Wizard::default();
        wizard.retreat();
        assert_eq!(wizard.step, 0);

        wizard.step = 3;
        wizard.max_step = 3;
        wizard.retreat();
        assert_eq!(wizard.step, 2);
        assert_eq!(wizard.max_step, 3);
    }

    #[test]
    fn jump_is_bounded_by_the_high_water_mark() {
        let mut wizard = Wizard {
            step: 1,
            max_step: 3,
            ..Wizard::default()
        };
        wizard.jump_to(5);
        assert_eq!(wizard.step, 1);
        wizard.jump_to(3);
        assert_eq!(wizard.step, 3);
        wizard.jump_to(0);
        assert_eq!(wizard.step, 0);
    }

    #[test]
    fn jump_is_locked_after_submission() {
        let mut wizard = Wizard {
            step: 2,
            max_step: 6,
            submitted: true,
            ..Wizard::default()
        };
        wizard.jump_to(1);
        assert_eq!(wizard.step, 2);
        assert!(!wizard.reachable(0));
    }

    #[test]
    fn complete_rewinds_and_locks() {
        let mut wizard = Wizard {
            step: 6,
            max_step: 6,
            ..Wizard::default()
        };
        wizard.touched.insert(FieldId::Email);
        wizard.complete();
        assert!(wizard.submitted);
        assert_eq!(wizard.step, 0);
        assert_eq!(wizard.max_step, 0);
        assert!(wizard.touched.is_empty());
    }

    #[test]
    fn walks_the_whole_wizard_end_to_end() {
        let mut wizard = Wizard::default();
        let mut form = filled_basics();

        assert!(wizard.advance(&form).is_ok());
        assert_eq!(wizard.step, 1);

        // Portfolio: availability is the only hard requirement.
        assert!(wizard.advance(&form).is_err());
        form = apply(form, FormAction::SetAvailability("October, flexible".into()));
        assert!(wizard.advance(&form).is_ok());

        // Measurements and categories are optional throughout.
        assert!(wizard.advance(&form).is_ok());
        assert!(wizard.advance(&form).is_ok());

        // Comfort passes while the opt-in stays off.
        assert!(wizard.advance(&form).is_ok());
        assert_eq!(wizard.step, 5);

        form = apply(
            form,
            FormAction::SetImageLinks("https://a.com https://b.com https://c.com".into()),
        );
        assert!(wizard.advance(&form).is_ok());
        assert!(wizard.is_last());
        assert_eq!(wizard.max_step, 6);

        // Review gates on the conduct consent.
        assert!(!steps::is_valid(&form));
        form = apply(form, FormAction::SetPoshConsent(true));
        assert!(steps::is_valid(&form));

        // Free navigation back across every reached step.
        wizard.jump_to(0);
        assert_eq!(wizard.step, 0);
        wizard.jump_to(6);
        assert_eq!(wizard.step, 6);
    }

    #[test]
    fn advance_saturates_on_the_last_step() {
        let mut wizard = Wizard {
            step: 6,
            max_step: 6,
            ..Wizard::default()
        };
        let mut form = filled_basics();
        form = apply(form, FormAction::SetPoshConsent(true));
        assert!(wizard.advance(&form).is_ok());
        assert_eq!(wizard.step, 6);
        assert_eq!(wizard.max_step, 6);
    }
}
