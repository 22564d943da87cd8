//! The browser app: Leptos CSR over the page-installed actor agent.

mod app;
mod backend;
mod storage;

pub use app::start;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Toast {
    pub(crate) id: u64,
    pub(crate) level: ToastLevel,
    pub(crate) message: String,
}
