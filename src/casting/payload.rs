use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{js_sys, window};

use super::form::ApplicationForm;
use crate::config;

/// Request-context fields attached to every submission. Captured from the
/// browser at submit time; kept separate from the payload so the pure
/// parts stay testable off-wasm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserEnv {
    pub page: String,
    pub referrer: String,
    pub timezone: String,
    pub user_agent: String,
}

impl BrowserEnv {
    pub fn capture() -> Self {
        let win = window();
        BrowserEnv {
            page: win
                .as_ref()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default(),
            referrer: win
                .as_ref()
                .and_then(|w| w.document())
                .map(|d| d.referrer())
                .unwrap_or_default(),
            timezone: local_timezone().unwrap_or_default(),
            user_agent: win
                .as_ref()
                .and_then(|w| w.navigator().user_agent().ok())
                .unwrap_or_default(),
        }
    }
}

fn local_timezone() -> Option<String> {
    let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
        .resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()?
        .as_string()
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub form: ApplicationForm,
    pub parsed_links: Vec<String>,
    pub source: &'static str,
    pub page: String,
    pub referrer: String,
    pub timezone: String,
    pub user_agent: String,
    pub timestamp: String,
}

impl SubmissionPayload {
    pub fn new(form: &ApplicationForm, parsed_links: Vec<String>, env: BrowserEnv) -> Self {
        SubmissionPayload {
            form: form.clone(),
            parsed_links,
            source: "casting_page",
            page: env.page,
            referrer: env.referrer,
            timezone: env.timezone,
            user_agent: env.user_agent,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// One-word nudity summary used by the WhatsApp message ("No" while opted
/// out, otherwise the selected preference).
pub fn nudity_line(form: &ApplicationForm) -> &'static str {
    if form.open_to_nude {
        form.nude_preference.display()
    } else {
        "No"
    }
}

/// The pre-filled messaging handoff: selected fields formatted one per
/// line and URL-encoded into a wa.me deep link. `None` when no number is
/// configured.
pub fn whatsapp_href(form: &ApplicationForm, parsed_links: &[String], number: &str) -> Option<String> {
    if number.is_empty() {
        return None;
    }
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Casting Application — {}", config::BRAND_NAME));
    lines.push(format!("Name: {}", form.full_name));
    lines.push(format!("City: {}", form.city));
    lines.push(format!("Email: {}", form.email));
    if let Some(phone) = form.phone.as_deref() {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(instagram) = form.instagram.as_deref() {
        lines.push(format!("Instagram: {instagram}"));
    }
    lines.push(format!(
        "Portfolio: {}",
        form.portfolio_url.as_deref().unwrap_or_default()
    ));
    lines.push(format!(
        "Categories: {}",
        join_or(&form.categories, "(not specified)")
    ));
    lines.push(format!("Experience: {}", form.experience.key()));
    lines.push(format!(
        "Comfort: {}",
        join_or(&form.comfort_levels, "(not specified)")
    ));
    lines.push(format!("Nudity: {}", nudity_line(form)));
    if form.open_to_nude {
        if let Some(notes) = form.privacy_notes.as_deref() {
            lines.push(format!("Privacy notes: {notes}"));
        }
    }
    if let Some(height) = form.height_cm.as_deref() {
        lines.push(format!("Height: {height} cm"));
    }
    if [&form.chest, &form.waist, &form.hips]
        .iter()
        .any(|m| m.is_some())
    {
        lines.push(format!(
            "Sizes (C-W-H): {}-{}-{}",
            form.chest.as_deref().unwrap_or("?"),
            form.waist.as_deref().unwrap_or("?"),
            form.hips.as_deref().unwrap_or("?")
        ));
    }
    if let Some(dress) = form.dress_size.as_deref() {
        lines.push(format!("Dress Size: {dress}"));
    }
    if let Some(shoe) = form.shoe_size.as_deref() {
        lines.push(format!("Shoe: {shoe}"));
    }
    lines.push(format!("Availability: {}", form.availability));
    lines.push(format!("Image links: {}", parsed_links.join(" | ")));
    if let Some(message) = form.message.as_deref() {
        lines.push(format!("Message: {message}"));
    }
    if !form.moods.is_empty() {
        lines.push(format!("Moods: {}", form.moods.join(", ")));
    }
    let text = lines.join("\n");
    Some(format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(&text)
    ))
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::form::{FormAction, NudePreference};
    use std::rc::Rc;
    use yew::Reducible;

    fn apply(form: ApplicationForm, action: FormAction) -> ApplicationForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    fn sample_form() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        for action in [
            FormAction::SetFullName("Jane Doe".into()),
            FormAction::SetCity("Mumbai".into()),
            FormAction::SetEmail("jane@x.com".into()),
            FormAction::SetDob("1998-04-12".into()),
            FormAction::SetAvailability("October, flexible".into()),
            FormAction::SetImageLinks("https://a.com https://b.com https://c.com".into()),
            FormAction::SetPoshConsent(true),
        ] {
            form = apply(form, action);
        }
        form
    }

    fn sample_env() -> BrowserEnv {
        BrowserEnv {
            page: "https://example.com/casting".into(),
            referrer: "https://example.com/".into(),
            timezone: "Asia/Kolkata".into(),
            user_agent: "test-agent".into(),
        }
    }

    #[test]
    fn payload_flattens_form_fields_beside_the_envelope() {
        let form = sample_form();
        let payload = SubmissionPayload::new(
            &form,
            vec!["https://a.com".into(), "https://b.com".into(), "https://c.com".into()],
            sample_env(),
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["openToNude"], false);
        assert_eq!(value["nudePreference"], "no");
        assert_eq!(value["source"], "casting_page");
        assert_eq!(value["page"], "https://example.com/casting");
        assert_eq!(value["timezone"], "Asia/Kolkata");
        assert_eq!(value["userAgent"], "test-agent");
        assert_eq!(
            value["parsedLinks"],
            serde_json::json!(["https://a.com", "https://b.com", "https://c.com"])
        );
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn nudity_line_reads_no_while_opted_out() {
        let mut form = sample_form();
        assert_eq!(nudity_line(&form), "No");
        form = apply(form, FormAction::SetOpenToNude(true));
        assert_eq!(nudity_line(&form), "Unspecified");
        form = apply(form, FormAction::SetNudePreference(NudePreference::Artistic));
        assert_eq!(nudity_line(&form), "Artistic");
    }

    #[test]
    fn deep_link_encodes_the_message_lines() {
        let form = sample_form();
        let href = whatsapp_href(&form, &["https://a.com".to_string()], "919510394742").unwrap();
        assert!(href.starts_with("https://wa.me/919510394742?text="));
        assert!(href.contains("Jane%20Doe"));
        assert!(href.contains("Mumbai"));
        assert!(href.contains("Nudity%3A%20No"));
        assert!(href.contains("https%3A%2F%2Fa.com"));
        // Unset optionals contribute no lines.
        assert!(!href.contains("Phone%3A"));
        assert!(!href.contains("Sizes%20"));
    }

    #[test]
    fn deep_link_includes_measurements_when_any_present() {
        let mut form = sample_form();
        form = apply(form, FormAction::SetWaist("26".into()));
        let href = whatsapp_href(&form, &[], "919510394742").unwrap();
        assert!(href.contains(&urlencoding::encode("Sizes (C-W-H): ?-26-?").into_owned()));
    }

    #[test]
    fn deep_link_requires_a_configured_number() {
        assert_eq!(whatsapp_href(&sample_form(), &[], ""), None);
    }
}
