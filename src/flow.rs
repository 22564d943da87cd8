//! The greet submit flow, kept free of DOM types so it runs under host tests.
//!
//! The wasm app hands in a signal-backed [`SubmitView`] and the agent bridge;
//! tests hand in recording fakes. Event-default suppression stays in the DOM
//! layer, which calls this after `prevent_default()`.

use std::future::Future;

use crate::error::CallError;

/// Everything the submit flow is allowed to do to the page.
pub trait SubmitView {
    /// Toggle the trigger control's in-flight state.
    fn set_busy(&mut self, busy: bool);
    /// Render a resolved greeting.
    fn show_greeting(&mut self, text: &str);
    /// Render a failed call.
    fn show_error(&mut self, err: &CallError);
}

/// One submission cycle: disable the trigger, call `greet` with the name
/// exactly as typed, re-enable, then render the outcome.
///
/// The re-enable runs on both branches; a rejected call must not leave the
/// form stuck. On success the greeting is rendered after the re-enable, in
/// that order.
pub async fn run_submit<V, F, Fut>(view: &mut V, name: String, greet: F)
where
    V: SubmitView,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, CallError>>,
{
    view.set_busy(true);
    let outcome = greet(name).await;
    view.set_busy(false);
    match outcome {
        Ok(greeting) => view.show_greeting(&greeting),
        Err(err) => view.show_error(&err),
    }
}
