use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{backend, storage, Toast, ToastLevel};
use crate::error::CallError;
use crate::flow::{run_submit, SubmitView};
use crate::reply::{ProfileRecord, ReplyStatus};
use crate::ui_model::GreetViewState;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Lets the host-tested submit flow drive the reactive view.
#[derive(Clone, Copy)]
struct SignalView(RwSignal<GreetViewState>);

impl SubmitView for SignalView {
    fn set_busy(&mut self, busy: bool) {
        self.0.update(|s| s.set_busy(busy));
    }

    fn show_greeting(&mut self, text: &str) {
        self.0.update(|s| s.show_greeting(text));
    }

    fn show_error(&mut self, err: &CallError) {
        self.0.update(|s| s.show_error(err));
    }
}

#[component]
fn App() -> impl IntoView {
    let greet_view = RwSignal::new(GreetViewState::new());
    let (name, set_name) = signal(storage::load_remembered_name().unwrap_or_default());

    let toasts = RwSignal::new(Vec::<Toast>::new());
    let next_toast_id = StoredValue::new(0u64);
    let push_toast = move |level: ToastLevel, message: String| {
        let id = next_toast_id.with_value(|v| *v);
        next_toast_id.update_value(|v| *v += 1);
        toasts.update(|ts| ts.push(Toast { id, level, message }));
    };

    let (principal, set_principal) = signal(Option::<String>::None);
    let (records, set_records) = signal(Vec::<ProfileRecord>::new());
    let (profile_busy, set_profile_busy) = signal(false);
    let (edit_key, set_edit_key) = signal(String::new());
    let (edit_value, set_edit_value) = signal(String::new());

    let refresh_records = move || {
        set_profile_busy.set(true);
        spawn_local(async move {
            match backend::fetch_records().await {
                Ok(rs) => set_records.set(rs),
                Err(e) => push_toast(ToastLevel::Error, format!("load profile: {e}")),
            }
            set_profile_busy.set(false);
        });
    };

    // One-time bootstrap after mount.
    Effect::new(move |_| {
        refresh_records();
        spawn_local(async move {
            // An unavailable agent already surfaces through the record load;
            // the principal line just stays at "(unknown)".
            if let Ok(p) = backend::whoami().await {
                set_principal.set(p);
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // The name goes out exactly as typed; no trimming or normalization.
        let submitted = name.get_untracked();
        storage::save_remembered_name(&submitted);
        spawn_local(async move {
            let mut view = SignalView(greet_view);
            run_submit(&mut view, submitted, backend::greet).await;
        });
    };

    let on_save_entry = move |ev: SubmitEvent| {
        ev.prevent_default();
        let key = edit_key.get_untracked();
        let value = edit_value.get_untracked();
        if key.is_empty() {
            push_toast(ToastLevel::Info, "entry key is empty".to_string());
            return;
        }
        let exists = records.with_untracked(|rs| rs.iter().any(|r| r.key == key));
        set_profile_busy.set(true);
        spawn_local(async move {
            let op = if exists { "update" } else { "add" };
            let outcome = if exists {
                backend::update_record(key.clone(), value).await
            } else {
                backend::add_record(key.clone(), value).await
            };
            match outcome {
                Ok(ReplyStatus::Applied) => {
                    push_toast(ToastLevel::Success, format!("{op} {key}: done"));
                    set_edit_key.set(String::new());
                    set_edit_value.set(String::new());
                }
                Ok(status) => {
                    push_toast(ToastLevel::Info, format!("{op} {key}: {}", status.label()));
                }
                Err(e) => push_toast(ToastLevel::Error, format!("{op} {key}: {e}")),
            }
            set_profile_busy.set(false);
            refresh_records();
        });
    };

    view! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 18px; max-width: 720px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0;">"Profile"</h1>
            <p style="margin: 0 0 16px 0; color: #555;">
                "Greets through the page-installed actor agent and edits the caller's profile."
            </p>

            <section style="margin-bottom: 22px;">
                <form on:submit=on_submit style="display: flex; gap: 10px; align-items: center; flex-wrap: wrap;">
                    <label for="name" style="min-width: 48px; color: #333;">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button type="submit" prop:disabled=move || greet_view.with(|s| s.is_busy())>
                        {move || if greet_view.with(|s| s.is_busy()) { "Greeting…" } else { "Greet" }}
                    </button>
                </form>

                <p id="greeting" style="min-height: 1.4em; margin: 12px 0 0 0; font-weight: 600;">
                    {move || greet_view.with(|s| s.greeting.clone()).unwrap_or_default()}
                </p>
                <Show when=move || greet_view.with(|s| s.error.is_some())>
                    <p style="margin: 4px 0 0 0; color: #b3261e;">
                        {move || greet_view.with(|s| s.error.clone()).unwrap_or_default()}
                    </p>
                </Show>
            </section>

            <section>
                <div style="display: flex; gap: 10px; align-items: baseline; justify-content: space-between;">
                    <h2 style="margin: 0 0 8px 0;">"Stored entries"</h2>
                    <button prop:disabled=move || profile_busy.get() on:click=move |_| refresh_records()>
                        "Reload"
                    </button>
                </div>
                <p style="margin: 0 0 10px 0; color: #777; font-size: 0.95em;">
                    {move || {
                        principal
                            .get()
                            .map(|p| format!("Caller: {p}"))
                            .unwrap_or_else(|| "Caller: (unknown)".to_string())
                    }}
                </p>

                <table style="width: 100%; border-collapse: collapse;">
                    <For
                        each=move || records.get()
                        key=|r| r.key.clone()
                        children=move |r: ProfileRecord| {
                            let key_for_remove = r.key.clone();
                            view! {
                                <tr>
                                    <td style="border-bottom: 1px solid #eee; padding: 6px 8px; font-weight: 600;">
                                        {r.key.clone()}
                                    </td>
                                    <td style="border-bottom: 1px solid #eee; padding: 6px 8px;">
                                        {r.value.clone()}
                                    </td>
                                    <td style="border-bottom: 1px solid #eee; padding: 6px 8px; text-align: right;">
                                        <button
                                            prop:disabled=move || profile_busy.get()
                                            on:click=move |_| {
                                                let key = key_for_remove.clone();
                                                set_profile_busy.set(true);
                                                spawn_local(async move {
                                                    match backend::remove_record(key.clone()).await {
                                                        Ok(ReplyStatus::Applied) => push_toast(
                                                            ToastLevel::Success,
                                                            format!("remove {key}: done"),
                                                        ),
                                                        Ok(status) => push_toast(
                                                            ToastLevel::Info,
                                                            format!("remove {key}: {}", status.label()),
                                                        ),
                                                        Err(e) => push_toast(
                                                            ToastLevel::Error,
                                                            format!("remove {key}: {e}"),
                                                        ),
                                                    }
                                                    set_profile_busy.set(false);
                                                    refresh_records();
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </table>

                <form on:submit=on_save_entry style="display: flex; gap: 10px; align-items: center; flex-wrap: wrap; margin-top: 12px;">
                    <input
                        type="text"
                        placeholder="key"
                        prop:value=move || edit_key.get()
                        on:input=move |ev| set_edit_key.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="value"
                        prop:value=move || edit_value.get()
                        on:input=move |ev| set_edit_value.set(event_target_value(&ev))
                    />
                    <button type="submit" prop:disabled=move || profile_busy.get()>
                        "Save entry"
                    </button>
                </form>
            </section>

            <ToastStack toasts=toasts />
        </main>
    }
}

#[component]
fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div
            style="position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; max-width: 340px;"
            aria-live="polite"
            aria-relevant="additions removals"
        >
            <For
                each=move || toasts.get()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    let color = match t.level {
                        ToastLevel::Info => "#555555",
                        ToastLevel::Success => "#1b7f3b",
                        ToastLevel::Error => "#b3261e",
                    };
                    let style = format!(
                        "display: flex; gap: 10px; align-items: center; border: 1px solid {color}; border-radius: 10px; padding: 8px 12px; background: #fff; color: {color};"
                    );
                    view! {
                        <div style=style>
                            <div style="flex: 1; white-space: pre-wrap;">{t.message}</div>
                            <button title="Dismiss" on:click=move |_| toasts.update(|ts| ts.retain(|x| x.id != id))>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
