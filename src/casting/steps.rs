use std::collections::HashSet;

use super::form::{ApplicationForm, FieldId};
use super::links::split_link_tokens;
use super::validators;

pub const STEP_LABELS: [&str; 7] = [
    "Basics",
    "Portfolio",
    "Measures",
    "Categories",
    "Comfort",
    "Links",
    "Review",
];
pub const TOTAL_STEPS: usize = STEP_LABELS.len();

/// The always-required items counted by the progress readout.
pub const TOTAL_REQUIRED: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub id: FieldId,
    pub label: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(id: FieldId, message: &str) -> Self {
        FieldError {
            id,
            label: id.label(),
            message: message.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Neutral,
    Success,
    Error,
}

/// The fields whose validity gates forward navigation out of `step`.
/// Mirrors the wizard layout: conditional members appear only while the
/// nudity opt-in is on.
pub fn fields_for_step(step: usize, form: &ApplicationForm) -> Vec<FieldId> {
    match step {
        0 => vec![FieldId::FullName, FieldId::City, FieldId::Email, FieldId::Dob],
        1 => vec![
            FieldId::PortfolioUrl,
            FieldId::Availability,
            FieldId::Phone,
            FieldId::Experience,
        ],
        2 => vec![FieldId::HeightCm, FieldId::Chest, FieldId::Waist, FieldId::Hips],
        3 => vec![
            FieldId::Categories,
            FieldId::Moods,
            FieldId::DressSize,
            FieldId::ShoeSize,
        ],
        4 => {
            let mut fields = vec![
                FieldId::OpenToNude,
                FieldId::ComfortLevels,
                FieldId::NudePreference,
            ];
            if form.open_to_nude {
                fields.push(FieldId::NudeConsent);
            }
            fields
        }
        5 => {
            let mut fields = vec![FieldId::ImageLinks, FieldId::Message];
            if form.open_to_nude {
                fields.push(FieldId::PrivacyNotes);
            }
            fields
        }
        6 => vec![FieldId::PoshConsent],
        _ => Vec::new(),
    }
}

/// `None` when the field passes; the user-facing message otherwise.
/// Fields with no validator (optional free inputs, set toggles) always pass.
pub fn field_message(form: &ApplicationForm, id: FieldId) -> Option<String> {
    let check = |ok: bool, message: &str| {
        if ok {
            None
        } else {
            Some(message.to_string())
        }
    };
    match id {
        FieldId::Dob => check(
            !form.dob.trim().is_empty() && validators::is_adult(&form.dob),
            "Enter your DOB (18+ only)",
        ),
        FieldId::FullName => check(validators::name_ok(&form.full_name), "Enter your full name"),
        FieldId::Email => check(validators::email_ok(&form.email), "Enter a valid email"),
        FieldId::Phone => check(
            validators::phone_ok(form.phone.as_deref().unwrap_or_default()),
            "Enter a valid number or leave blank",
        ),
        FieldId::City => check(validators::name_ok(&form.city), "Enter your city"),
        FieldId::PortfolioUrl => check(
            form.portfolio_url
                .as_deref()
                .map_or(true, validators::url_ok),
            "Optional — add https:// if you have a link",
        ),
        FieldId::Availability => check(
            validators::name_ok(&form.availability),
            "Add dates or a window",
        ),
        FieldId::ImageLinks => {
            let count = split_link_tokens(&form.image_links).valid.len();
            check(
                !form.image_links.trim().is_empty()
                    && (validators::MIN_LINKS..=validators::MAX_LINKS).contains(&count),
                "Add 3–6 public links",
            )
        }
        FieldId::Message => check(
            validators::message_ok(form.message.as_deref().unwrap_or_default()),
            "Keep it under 280 characters",
        ),
        FieldId::PoshConsent => check(
            form.posh_consent,
            "Agree to our safe, respectful code of conduct",
        ),
        FieldId::NudeConsent => check(
            !form.open_to_nude || form.nude_consent,
            "Confirm consent for nude levels",
        ),
        _ => None,
    }
}

pub fn step_errors(form: &ApplicationForm, step: usize) -> Vec<FieldError> {
    fields_for_step(step, form)
        .into_iter()
        .filter_map(|id| field_message(form, id).map(|msg| FieldError::new(id, &msg)))
        .collect()
}

pub fn can_proceed(form: &ApplicationForm, step: usize) -> bool {
    step_errors(form, step).is_empty()
}

/// Aggregate error list for submission: every gated field across all
/// steps, in review order.
pub fn form_errors(form: &ApplicationForm) -> Vec<FieldError> {
    let mut order = vec![
        FieldId::Dob,
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::City,
        FieldId::PortfolioUrl,
        FieldId::Availability,
        FieldId::ImageLinks,
        FieldId::Message,
        FieldId::PoshConsent,
    ];
    if form.open_to_nude {
        order.push(FieldId::NudeConsent);
    }
    order
        .into_iter()
        .filter_map(|id| field_message(form, id).map(|msg| FieldError::new(id, &msg)))
        .collect()
}

pub fn is_valid(form: &ApplicationForm) -> bool {
    form_errors(form).is_empty()
}

/// Touched-aware status for color-coded field feedback. The optional
/// portfolio link stays neutral while empty.
pub fn status_of(form: &ApplicationForm, touched: &HashSet<FieldId>, id: FieldId) -> FieldStatus {
    if !touched.contains(&id) {
        return FieldStatus::Neutral;
    }
    if id == FieldId::PortfolioUrl && form.portfolio_url.is_none() {
        return FieldStatus::Neutral;
    }
    if field_message(form, id).is_none() {
        FieldStatus::Success
    } else {
        FieldStatus::Error
    }
}

/// How many of the eight always-required items are satisfied.
pub fn required_filled(form: &ApplicationForm) -> usize {
    [
        validators::name_ok(&form.full_name),
        !form.email.trim().is_empty(),
        !form.city.trim().is_empty(),
        !form.availability.trim().is_empty(),
        !form.image_links.trim().is_empty(),
        !form.dob.trim().is_empty() && validators::is_adult(&form.dob),
        form.posh_consent,
        !form.open_to_nude || form.nude_consent,
    ]
    .iter()
    .filter(|ok| **ok)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::form::FormAction;
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
    fn step_field_table_matches_the_wizard_layout() {
        let form = ApplicationForm::default();
        assert_eq!(
            fields_for_step(0, &form),
            vec![FieldId::FullName, FieldId::City, FieldId::Email, FieldId::Dob]
        );
        assert_eq!(
            fields_for_step(1, &form),
            vec![
                FieldId::PortfolioUrl,
                FieldId::Availability,
                FieldId::Phone,
                FieldId::Experience
            ]
        );
        assert_eq!(
            fields_for_step(4, &form),
            vec![
                FieldId::OpenToNude,
                FieldId::ComfortLevels,
                FieldId::NudePreference
            ]
        );
        assert_eq!(
            fields_for_step(5, &form),
            vec![FieldId::ImageLinks, FieldId::Message]
        );
        assert_eq!(fields_for_step(6, &form), vec![FieldId::PoshConsent]);
        assert!(fields_for_step(7, &form).is_empty());
    }

    #[test]
    fn consent_fields_join_their_steps_while_opted_in() {
        let mut form = filled_basics();
        form = apply(form, FormAction::SetOpenToNude(true));
        assert!(fields_for_step(4, &form).contains(&FieldId::NudeConsent));
        assert!(fields_for_step(5, &form).contains(&FieldId::PrivacyNotes));
    }

    #[test]
    fn basics_step_blocks_until_filled() {
        let form = ApplicationForm::default();
        assert!(!can_proceed(&form, 0));
        let errors = step_errors(&form, 0);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].id, FieldId::FullName);
        assert_eq!(errors[0].label, "Full name");

        assert!(can_proceed(&filled_basics(), 0));
    }

    #[test]
    fn optional_steps_never_block() {
        let form = ApplicationForm::default();
        assert!(can_proceed(&form, 2));
        assert!(can_proceed(&form, 3));
    }

    #[test]
    fn portfolio_step_checks_url_only_when_present() {
        let mut form = apply(
            ApplicationForm::default(),
            FormAction::SetAvailability("28–30 Sept, flexible".into()),
        );
        assert!(can_proceed(&form, 1));

        form = apply(form, FormAction::SetPortfolioUrl("mysite.com".into()));
        assert!(!can_proceed(&form, 1));

        form = apply(form, FormAction::SetPortfolioUrl("https://mysite.com".into()));
        assert!(can_proceed(&form, 1));
    }

    #[test]
    fn links_step_accepts_three_to_six_tokens() {
        let mut form = ApplicationForm::default();
        for (count, expected) in [(2usize, false), (3, true), (4, true), (5, true), (6, true), (7, false)]
        {
            let raw = (0..count)
                .map(|i| format!("https://site{i}.com"))
                .collect::<Vec<_>>()
                .join(" ");
            form = apply(form, FormAction::SetImageLinks(raw));
            assert_eq!(can_proceed(&form, 5), expected, "{count} links");
        }
    }

    #[test]
    fn duplicate_links_do_not_inflate_the_count() {
        let form = apply(
            ApplicationForm::default(),
            FormAction::SetImageLinks("https://a.com https://a.com https://b.com".into()),
        );
        assert!(!can_proceed(&form, 5));
    }

    #[test]
    fn comfort_step_requires_consent_only_when_opted_in() {
        let form = filled_basics();
        assert!(can_proceed(&form, 4));

        let form = apply(form, FormAction::SetOpenToNude(true));
        assert!(!can_proceed(&form, 4));
        let errors = step_errors(&form, 4);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].id, FieldId::NudeConsent);

        let form = apply(form, FormAction::SetNudeConsent(true));
        assert!(can_proceed(&form, 4));
    }

    #[test]
    fn review_step_requires_conduct_consent() {
        let form = ApplicationForm::default();
        assert!(!can_proceed(&form, 6));
        let form = apply(form, FormAction::SetPoshConsent(true));
        assert!(can_proceed(&form, 6));
    }

    #[test]
    fn full_form_validity_spans_all_steps() {
        let mut form = filled_basics();
        form = apply(form, FormAction::SetAvailability("October, flexible".into()));
        form = apply(
            form,
            FormAction::SetImageLinks("https://a.com https://b.com https://c.com".into()),
        );
        assert!(!is_valid(&form));

        form = apply(form, FormAction::SetPoshConsent(true));
        assert!(is_valid(&form));
        assert!(form_errors(&form).is_empty());

        form = apply(form, FormAction::SetOpenToNude(true));
        assert!(!is_valid(&form));
        let errors = form_errors(&form);
        assert_eq!(errors.last().unwrap().id, FieldId::NudeConsent);
    }

    #[test]
    fn statuses_follow_touched_state() {
        let mut touched = HashSet::new();
        let form = ApplicationForm::default();
        assert_eq!(status_of(&form, &touched, FieldId::Email), FieldStatus::Neutral);

        touched.insert(FieldId::Email);
        assert_eq!(status_of(&form, &touched, FieldId::Email), FieldStatus::Error);

        let form = apply(form, FormAction::SetEmail("jane@x.com".into()));
        assert_eq!(status_of(&form, &touched, FieldId::Email), FieldStatus::Success);

        touched.insert(FieldId::PortfolioUrl);
        assert_eq!(
            status_of(&form, &touched, FieldId::PortfolioUrl),
            FieldStatus::Neutral
        );
    }

    #[test]
    fn required_progress_counts_the_fixed_eight() {
        let form = ApplicationForm::default();
        assert_eq!(required_filled(&form), 1); // consent pair vacuously ok

        let mut form = filled_basics();
        form = apply(form, FormAction::SetAvailability("October".into()));
        form = apply(
            form,
            FormAction::SetImageLinks("https://a.com https://b.com https://c.com".into()),
        );
        form = apply(form, FormAction::SetPoshConsent(true));
        assert_eq!(required_filled(&form), TOTAL_REQUIRED);
    }
}
