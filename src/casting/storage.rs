use web_sys::{window, Storage};

use super::form::ApplicationForm;

/// The one local-storage slot the wizard owns.
pub const LOCAL_KEY: &str = "ap_casting_form_v2";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Reads the persisted form, if any, sanitized back to a consistent
/// state. Parse failures and unavailable storage read as "nothing saved".
pub fn restore() -> Option<ApplicationForm> {
    let raw = local_storage()?.get_item(LOCAL_KEY).ok().flatten()?;
    serde_json::from_str::<ApplicationForm>(&raw)
        .ok()
        .map(ApplicationForm::sanitized)
}

/// Persists the form; quota or availability failures are swallowed and
/// the session simply continues unpersisted.
pub fn save(form: &ApplicationForm) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(form)) {
        let _ = storage.set_item(LOCAL_KEY, &json);
    }
}

/// Removes the slot after a confirmed successful submission.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(LOCAL_KEY);
    }
}
