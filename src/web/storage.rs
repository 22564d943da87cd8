use serde::{Deserialize, Serialize};

const LOCALSTORAGE_FORM_KEY: &str = "profile_web.greet_form.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedForm {
    version: u32,
    name: String,
}

pub(super) fn load_remembered_name() -> Option<String> {
    let raw = local_storage_get_string(LOCALSTORAGE_FORM_KEY)?;
    let form: PersistedForm = serde_json::from_str(&raw).ok()?;
    Some(form.name)
}

pub(super) fn save_remembered_name(name: &str) {
    let form = PersistedForm {
        version: 1,
        name: name.to_string(),
    };
    if let Ok(raw) = serde_json::to_string(&form) {
        local_storage_set_string(LOCALSTORAGE_FORM_KEY, &raw);
    }
}
