use serde::{Deserialize, Deserializer, Serialize};
use std::rc::Rc;
use yew::Reducible;

use super::validators;

pub const CATEGORY_OPTIONS: [&str; 4] = ["Fashion", "Commercial", "E-commerce", "UGC / Reels"];

pub const MOOD_OPTIONS: [(&str, &str); 6] = [
    ("beauty", "Clean Beauty"),
    ("catalogue", "Catalogue / Lookbook"),
    ("editorial", "Editorial"),
    ("lifestyle", "Lifestyle"),
    ("traditional", "Traditional"),
    ("fitness", "Fitness"),
];

pub const COMFORT_LEVELS: [&str; 6] = [
    "Casual/Street",
    "Formal",
    "Swimwear",
    "Lingerie",
    "Implied Nude",
    "Artistic Nude (non-sexual)",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Starter,
    Intermediate,
    Agency,
}

impl Experience {
    pub fn from_key(key: &str) -> Self {
        match key {
            "intermediate" => Experience::Intermediate,
            "agency" => Experience::Agency,
            _ => Experience::Starter,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Experience::Starter => "starter",
            Experience::Intermediate => "intermediate",
            Experience::Agency => "agency",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Experience::Starter => "Starter / New Face",
            Experience::Intermediate => "Intermediate / E-com",
            Experience::Agency => "Agency / Represented",
        }
    }
}

impl<'de> Deserialize<'de> for Experience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unknown persisted values fall back to the default tier.
        Ok(Experience::from_key(&String::deserialize(deserializer)?))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NudePreference {
    Unspecified,
    #[default]
    No,
    Implied,
    Artistic,
}

impl NudePreference {
    pub fn from_key(key: &str) -> Self {
        match key {
            "unspecified" => NudePreference::Unspecified,
            "implied" => NudePreference::Implied,
            "artistic" => NudePreference::Artistic,
            _ => NudePreference::No,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            NudePreference::Unspecified => "unspecified",
            NudePreference::No => "no",
            NudePreference::Implied => "implied",
            NudePreference::Artistic => "artistic",
        }
    }

    /// Short form for the review summary and the WhatsApp message.
    pub fn display(self) -> &'static str {
        match self {
            NudePreference::Unspecified => "Unspecified",
            NudePreference::No => "Yes",
            NudePreference::Implied => "Implied",
            NudePreference::Artistic => "Artistic",
        }
    }
}

impl<'de> Deserialize<'de> for NudePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(NudePreference::from_key(&String::deserialize(deserializer)?))
    }
}

/// Every field the wizard knows about, with its DOM id and human label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Dob,
    Phone,
    City,
    Instagram,
    PortfolioUrl,
    HeightCm,
    Chest,
    Waist,
    Hips,
    DressSize,
    ShoeSize,
    Categories,
    Experience,
    Availability,
    ImageLinks,
    Message,
    Moods,
    ComfortLevels,
    OpenToNude,
    NudePreference,
    NudeConsent,
    PrivacyNotes,
    PoshConsent,
}

impl FieldId {
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Dob => "dob",
            FieldId::Phone => "phone",
            FieldId::City => "city",
            FieldId::Instagram => "instagram",
            FieldId::PortfolioUrl => "portfolioUrl",
            FieldId::HeightCm => "heightCm",
            FieldId::Chest => "chest",
            FieldId::Waist => "waist",
            FieldId::Hips => "hips",
            FieldId::DressSize => "dressSize",
            FieldId::ShoeSize => "shoeSize",
            FieldId::Categories => "categories",
            FieldId::Experience => "experience",
            FieldId::Availability => "availability",
            FieldId::ImageLinks => "imageLinks",
            FieldId::Message => "message",
            FieldId::Moods => "moods",
            FieldId::ComfortLevels => "comfortLevels",
            FieldId::OpenToNude => "openToNude",
            FieldId::NudePreference => "nudePreference",
            FieldId::NudeConsent => "nudeConsent",
            FieldId::PrivacyNotes => "privacyNotes",
            FieldId::PoshConsent => "poshConsent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::Dob => "Date of birth",
            FieldId::Phone => "Phone",
            FieldId::City => "City",
            FieldId::Instagram => "Instagram",
            FieldId::PortfolioUrl => "Portfolio link",
            FieldId::HeightCm => "Height (cm)",
            FieldId::Chest => "Chest",
            FieldId::Waist => "Waist",
            FieldId::Hips => "Hips",
            FieldId::DressSize => "Dress Size",
            FieldId::ShoeSize => "Shoe",
            FieldId::Categories => "Categories",
            FieldId::Experience => "Experience level",
            FieldId::Availability => "Availability window",
            FieldId::ImageLinks => "Image links",
            FieldId::Message => "Message",
            FieldId::Moods => "Moods",
            FieldId::ComfortLevels => "Comfort levels",
            FieldId::OpenToNude => "Nude photography opt-in",
            FieldId::NudePreference => "Nudity preference",
            FieldId::NudeConsent => "Nude consent",
            FieldId::PrivacyNotes => "Privacy notes",
            FieldId::PoshConsent => "Conduct consent",
        }
    }
}

/// The single mutable entity behind the casting wizard. Serialized shape
/// (camelCase keys) doubles as the local-storage blob and the submission
/// payload body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub dob: String,
    pub phone: Option<String>,
    pub city: String,
    pub instagram: Option<String>,
    pub portfolio_url: Option<String>,
    pub height_cm: Option<String>,
    pub chest: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<String>,
    pub categories: Vec<String>,
    pub experience: Experience,
    pub availability: String,
    pub image_links: String,
    pub message: Option<String>,
    pub is_adult: bool,
    pub posh_consent: bool,
    pub moods: Vec<String>,
    pub comfort_levels: Vec<String>,
    pub open_to_nude: bool,
    pub nude_preference: NudePreference,
    pub nude_consent: bool,
    pub privacy_notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetFullName(String),
    SetEmail(String),
    SetDob(String),
    SetPhone(String),
    SetCity(String),
    SetInstagram(String),
    SetPortfolioUrl(String),
    SetHeightCm(String),
    SetChest(String),
    SetWaist(String),
    SetHips(String),
    SetDressSize(String),
    SetShoeSize(String),
    ToggleCategory(String),
    SetExperience(Experience),
    SetAvailability(String),
    SetImageLinks(String),
    SetMessage(String),
    ToggleMood(String),
    ToggleComfortLevel(String),
    SetOpenToNude(bool),
    SetNudePreference(NudePreference),
    SetNudeConsent(bool),
    SetPrivacyNotes(String),
    SetPoshConsent(bool),
    Restore(ApplicationForm),
    Reset,
}

impl FormAction {
    /// Maps a plain text/textarea input back to its action. Toggles,
    /// selects and checkboxes have dedicated variants.
    pub fn for_text(id: FieldId, value: String) -> Option<FormAction> {
        match id {
            FieldId::FullName => Some(FormAction::SetFullName(value)),
            FieldId::Email => Some(FormAction::SetEmail(value)),
            FieldId::Dob => Some(FormAction::SetDob(value)),
            FieldId::Phone => Some(FormAction::SetPhone(value)),
            FieldId::City => Some(FormAction::SetCity(value)),
            FieldId::Instagram => Some(FormAction::SetInstagram(value)),
            FieldId::PortfolioUrl => Some(FormAction::SetPortfolioUrl(value)),
            FieldId::HeightCm => Some(FormAction::SetHeightCm(value)),
            FieldId::Chest => Some(FormAction::SetChest(value)),
            FieldId::Waist => Some(FormAction::SetWaist(value)),
            FieldId::Hips => Some(FormAction::SetHips(value)),
            FieldId::DressSize => Some(FormAction::SetDressSize(value)),
            FieldId::ShoeSize => Some(FormAction::SetShoeSize(value)),
            FieldId::Availability => Some(FormAction::SetAvailability(value)),
            FieldId::ImageLinks => Some(FormAction::SetImageLinks(value)),
            FieldId::Message => Some(FormAction::SetMessage(value)),
            FieldId::PrivacyNotes => Some(FormAction::SetPrivacyNotes(value)),
            _ => None,
        }
    }
}

fn opt(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn toggle(set: &mut Vec<String>, value: &str) {
    if let Some(i) = set.iter().position(|x| x == value) {
        set.remove(i);
    } else {
        set.push(value.to_string());
    }
}

fn dedup_in_place(set: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(set.len());
    set.retain(|x| {
        if seen.iter().any(|s| s == x) {
            false
        } else {
            seen.push(x.clone());
            true
        }
    });
}

impl ApplicationForm {
    fn close_nude_fields(&mut self) {
        self.open_to_nude = false;
        self.nude_preference = NudePreference::No;
        self.nude_consent = false;
        self.comfort_levels.retain(|l| !l.contains("Nude"));
        self.privacy_notes = None;
    }

    fn set_dob(&mut self, dob: String) {
        self.is_adult = validators::is_adult(&dob);
        self.dob = dob;
        if !self.is_adult {
            self.close_nude_fields();
        }
    }

    fn set_open_to_nude(&mut self, on: bool) {
        if !on {
            self.close_nude_fields();
            return;
        }
        // Eligibility gate; the page surfaces the rejection and points the
        // user back at the date-of-birth field.
        if !self.is_adult {
            return;
        }
        self.open_to_nude = true;
        if self.nude_preference == NudePreference::No {
            self.nude_preference = NudePreference::Unspecified;
        }
    }

    /// Brings a restored form back in line with the live invariants:
    /// eligibility is recomputed from the persisted date of birth, nudity
    /// fields are forced closed when the opt-in (or eligibility) is off,
    /// a persisted "no" preference under an active opt-in is promoted to
    /// "unspecified", and the set-valued fields are deduplicated.
    pub fn sanitized(mut self) -> Self {
        self.is_adult = validators::is_adult(&self.dob);
        if !self.is_adult || !self.open_to_nude {
            self.close_nude_fields();
        } else if self.nude_preference == NudePreference::No {
            self.nude_preference = NudePreference::Unspecified;
        }
        dedup_in_place(&mut self.categories);
        dedup_in_place(&mut self.moods);
        dedup_in_place(&mut self.comfort_levels);
        self
    }
}

impl Reducible for ApplicationForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetFullName(v) => next.full_name = v,
            FormAction::SetEmail(v) => next.email = v,
            FormAction::SetDob(v) => next.set_dob(v),
            FormAction::SetPhone(v) => next.phone = opt(v),
            FormAction::SetCity(v) => next.city = v,
            FormAction::SetInstagram(v) => next.instagram = opt(v),
            FormAction::SetPortfolioUrl(v) => next.portfolio_url = opt(v),
            FormAction::SetHeightCm(v) => next.height_cm = opt(v),
            FormAction::SetChest(v) => next.chest = opt(v),
            FormAction::SetWaist(v) => next.waist = opt(v),
            FormAction::SetHips(v) => next.hips = opt(v),
            FormAction::SetDressSize(v) => next.dress_size = opt(v),
            FormAction::SetShoeSize(v) => next.shoe_size = opt(v),
            FormAction::ToggleCategory(v) => toggle(&mut next.categories, &v),
            FormAction::SetExperience(v) => next.experience = v,
            FormAction::SetAvailability(v) => next.availability = v,
            FormAction::SetImageLinks(v) => next.image_links = v,
            FormAction::SetMessage(v) => {
                if v.chars().count() <= validators::MESSAGE_MAX {
                    next.message = opt(v);
                }
            }
            FormAction::ToggleMood(v) => toggle(&mut next.moods, &v),
            FormAction::ToggleComfortLevel(v) => toggle(&mut next.comfort_levels, &v),
            FormAction::SetOpenToNude(on) => next.set_open_to_nude(on),
            FormAction::SetNudePreference(v) => {
                if next.open_to_nude {
                    next.nude_preference = v;
                }
            }
            FormAction::SetNudeConsent(v) => {
                if next.open_to_nude {
                    next.nude_consent = v;
                }
            }
            FormAction::SetPrivacyNotes(v) => {
                if next.open_to_nude {
                    next.privacy_notes = opt(v);
                }
            }
            FormAction::SetPoshConsent(v) => next.posh_consent = v,
            FormAction::Restore(saved) => next = saved.sanitized(),
            FormAction::Reset => next = ApplicationForm::default(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reduce(form: ApplicationForm, action: FormAction) -> ApplicationForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    fn adult_form() -> ApplicationForm {
        reduce(
            ApplicationForm::default(),
            FormAction::SetDob("1990-05-04".into()),
        )
    }

    #[test]
    fn defaults_are_closed_and_empty() {
        let form = ApplicationForm::default();
        assert_eq!(form.experience, Experience::Starter);
        assert_eq!(form.nude_preference, NudePreference::No);
        assert!(!form.open_to_nude);
        assert!(!form.is_adult);
        assert!(form.categories.is_empty());
        assert_eq!(form.phone, None);
    }

    #[test]
    fn dob_edit_recomputes_eligibility() {
        let form = adult_form();
        assert!(form.is_adult);
        let form = reduce(form, FormAction::SetDob("2020-01-01".into()));
        assert!(!form.is_adult);
    }

    #[test]
    fn minor_dob_forces_nudity_fields_closed() {
        let mut form = adult_form();
        form = reduce(form, FormAction::SetOpenToNude(true));
        form = reduce(form, FormAction::SetNudePreference(NudePreference::Artistic));
        form = reduce(form, FormAction::SetNudeConsent(true));
        form = reduce(form, FormAction::ToggleComfortLevel("Implied Nude".into()));
        form = reduce(form, FormAction::SetPrivacyNotes("closed set only".into()));

        form = reduce(form, FormAction::SetDob("2020-01-01".into()));
        assert!(!form.open_to_nude);
        assert_eq!(form.nude_preference, NudePreference::No);
        assert!(!form.nude_consent);
        assert!(form.comfort_levels.iter().all(|l| !l.contains("Nude")));
        assert_eq!(form.privacy_notes, None);
    }

    #[test]
    fn opt_in_rejected_while_not_adult() {
        let form = reduce(ApplicationForm::default(), FormAction::SetOpenToNude(true));
        assert!(!form.open_to_nude);
    }

    #[test]
    fn opt_in_promotes_no_preference_to_unspecified() {
        let form = reduce(adult_form(), FormAction::SetOpenToNude(true));
        assert!(form.open_to_nude);
        assert_eq!(form.nude_preference, NudePreference::Unspecified);
    }

    #[test]
    fn opt_out_clears_every_nudity_field() {
        let mut form = reduce(adult_form(), FormAction::SetOpenToNude(true));
        form = reduce(form, FormAction::SetNudePreference(NudePreference::Implied));
        form = reduce(form, FormAction::SetNudeConsent(true));
        form = reduce(form, FormAction::ToggleComfortLevel("Casual/Street".into()));
        form = reduce(form, FormAction::ToggleComfortLevel("Implied Nude".into()));
        form = reduce(
            form,
            FormAction::ToggleComfortLevel("Artistic Nude (non-sexual)".into()),
        );
        form = reduce(form, FormAction::SetPrivacyNotes("no BTS".into()));

        form = reduce(form, FormAction::SetOpenToNude(false));
        assert!(!form.open_to_nude);
        assert_eq!(form.nude_preference, NudePreference::No);
        assert!(!form.nude_consent);
        assert_eq!(form.comfort_levels, vec!["Casual/Street".to_string()]);
        assert_eq!(form.privacy_notes, None);
    }

    #[test]
    fn set_toggles_are_symmetric_and_duplicate_free() {
        let mut form = reduce(
            ApplicationForm::default(),
            FormAction::ToggleCategory("Fashion".into()),
        );
        assert_eq!(form.categories, vec!["Fashion".to_string()]);
        form = reduce(form, FormAction::ToggleCategory("Commercial".into()));
        assert_eq!(
            form.categories,
            vec!["Fashion".to_string(), "Commercial".to_string()]
        );
        form = reduce(form, FormAction::ToggleCategory("Fashion".into()));
        assert_eq!(form.categories, vec!["Commercial".to_string()]);
    }

    #[test]
    fn overlong_message_edit_is_ignored() {
        let form = reduce(
            ApplicationForm::default(),
            FormAction::SetMessage("x".repeat(300)),
        );
        assert_eq!(form.message, None);
        let form = reduce(form, FormAction::SetMessage("short note".into()));
        assert_eq!(form.message.as_deref(), Some("short note"));
    }

    #[test]
    fn empty_text_resolves_to_unset() {
        let form = reduce(ApplicationForm::default(), FormAction::SetPhone("".into()));
        assert_eq!(form.phone, None);
        let form = reduce(form, FormAction::SetPhone("+91 95103 94742".into()));
        assert_eq!(form.phone.as_deref(), Some("+91 95103 94742"));
    }

    #[test]
    fn sanitize_forces_stale_preference_closed() {
        let blob = json!({
            "openToNude": false,
            "nudePreference": "artistic",
            "nudeConsent": true,
            "dob": "1990-05-04"
        });
        let form: ApplicationForm = serde_json::from_value(blob).unwrap();
        let form = form.sanitized();
        assert_eq!(form.nude_preference, NudePreference::No);
        assert!(!form.nude_consent);
    }

    #[test]
    fn sanitize_promotes_no_under_active_opt_in() {
        let blob = json!({
            "openToNude": true,
            "nudePreference": "no",
            "nudeConsent": true,
            "dob": "1990-05-04"
        });
        let form: ApplicationForm = serde_json::from_value(blob).unwrap();
        let form = form.sanitized();
        assert!(form.open_to_nude);
        assert_eq!(form.nude_preference, NudePreference::Unspecified);
        assert!(form.nude_consent);
    }

    #[test]
    fn sanitize_recomputes_eligibility_from_dob() {
        let blob = json!({
            "openToNude": true,
            "nudePreference": "implied",
            "isAdult": true,
            "dob": "2020-01-01"
        });
        let form: ApplicationForm = serde_json::from_value(blob).unwrap();
        let form = form.sanitized();
        assert!(!form.is_adult);
        assert!(!form.open_to_nude);
        assert_eq!(form.nude_preference, NudePreference::No);
    }

    #[test]
    fn sanitize_dedupes_persisted_sets() {
        let blob = json!({
            "categories": ["Fashion", "Fashion", "Commercial"],
            "moods": ["beauty", "beauty"]
        });
        let form: ApplicationForm = serde_json::from_value(blob).unwrap();
        let form = form.sanitized();
        assert_eq!(
            form.categories,
            vec!["Fashion".to_string(), "Commercial".to_string()]
        );
        assert_eq!(form.moods, vec!["beauty".to_string()]);
    }

    #[test]
    fn partial_blob_merges_with_defaults() {
        let form: ApplicationForm =
            serde_json::from_str(r#"{"fullName":"Jane Doe","city":"Mumbai"}"#).unwrap();
        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.city, "Mumbai");
        assert_eq!(form.experience, Experience::Starter);
        assert_eq!(form.nude_preference, NudePreference::No);
        assert!(form.image_links.is_empty());
    }

    #[test]
    fn unknown_enum_values_fall_back_to_defaults() {
        let form: ApplicationForm = serde_json::from_str(
            r#"{"experience":"superstar","nudePreference":"maybe"}"#,
        )
        .unwrap();
        assert_eq!(form.experience, Experience::Starter);
        assert_eq!(form.nude_preference, NudePreference::No);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let form = reduce(
            ApplicationForm::default(),
            FormAction::SetFullName("Jane Doe".into()),
        );
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["openToNude"], false);
        assert_eq!(value["nudePreference"], "no");
        assert_eq!(value["experience"], "starter");
        assert!(value.get("full_name").is_none());
    }
}
