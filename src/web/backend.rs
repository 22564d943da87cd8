//! Bridge to the actor agent the hosting page installs.
//!
//! The page assigns the generated actor to `window.profileBackend` before the
//! app boots; its transport and serialization are opaque here. Replies are
//! stringified to JSON and decoded through `crate::reply`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::CallError;
use crate::reply::{self, ProfileRecord, ReplyStatus};

const AGENT_GLOBAL: &str = "profileBackend";

fn agent() -> Result<js_sys::Object, CallError> {
    let window = web_sys::window().ok_or(CallError::AgentMissing)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(AGENT_GLOBAL))
        .map_err(|_| CallError::AgentMissing)?;
    if value.is_undefined() || value.is_null() {
        return Err(CallError::AgentMissing);
    }
    Ok(value.unchecked_into())
}

fn rejected(err: JsValue) -> CallError {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return CallError::Rejected(String::from(e.message()));
    }
    let text = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    CallError::Rejected(text)
}

async fn call(method: &str, args: &js_sys::Array) -> Result<JsValue, CallError> {
    let agent = agent()?;
    let func: js_sys::Function = js_sys::Reflect::get(&agent, &JsValue::from_str(method))
        .map_err(|_| CallError::AgentMissing)?
        .dyn_into()
        .map_err(|_| CallError::AgentMissing)?;

    let returned = func.apply(&agent, args).map_err(rejected)?;
    // Promise::resolve also covers agents that reply synchronously.
    JsFuture::from(js_sys::Promise::resolve(&returned))
        .await
        .map_err(rejected)
}

fn reply_json(value: &JsValue) -> Result<String, CallError> {
    if value.is_undefined() {
        return Ok("null".to_string());
    }
    js_sys::JSON::stringify(value)
        .map(String::from)
        .map_err(|_| CallError::MalformedReply("reply is not JSON-serializable".to_string()))
}

pub(super) async fn greet(name: String) -> Result<String, CallError> {
    let args = js_sys::Array::of1(&JsValue::from_str(&name));
    let value = call("greet", &args).await?;
    value
        .as_string()
        .ok_or_else(|| CallError::MalformedReply("greet reply is not text".to_string()))
}

pub(super) async fn whoami() -> Result<Option<String>, CallError> {
    let value = call("get_self", &js_sys::Array::new()).await?;
    reply::parse_opt_string(&reply_json(&value)?)
}

pub(super) async fn fetch_records() -> Result<Vec<ProfileRecord>, CallError> {
    let value = call("get_all", &js_sys::Array::new()).await?;
    reply::parse_records(&reply_json(&value)?)
}

async fn status_call(method: &str, args: js_sys::Array) -> Result<ReplyStatus, CallError> {
    let value = call(method, &args).await?;
    let raw = reply::parse_opt_string(&reply_json(&value)?)?
        .ok_or_else(|| CallError::MalformedReply(format!("{method} returned no status")))?;
    ReplyStatus::parse(&raw)
}

pub(super) async fn add_record(key: String, value: String) -> Result<ReplyStatus, CallError> {
    let args = js_sys::Array::of2(&JsValue::from_str(&key), &JsValue::from_str(&value));
    status_call("add", args).await
}

pub(super) async fn update_record(key: String, value: String) -> Result<ReplyStatus, CallError> {
    let args = js_sys::Array::of2(&JsValue::from_str(&key), &JsValue::from_str(&value));
    status_call("update", args).await
}

pub(super) async fn remove_record(key: String) -> Result<ReplyStatus, CallError> {
    let args = js_sys::Array::of1(&JsValue::from_str(&key));
    status_call("remove", args).await
}
