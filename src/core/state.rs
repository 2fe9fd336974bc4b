use crate::core::form::Form;
use crate::core::form_engine::FormEngine;
use crate::core::page::Page;

/// Terminal feedback for a finished submission. Blocks the page until
/// dismissed, the way the original alert does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Your message has been sent. Thank you!",
            Notice::Failed => "Sending failed. Please try again.",
        }
    }
}

pub struct AppState {
    pub page: Page,
    pub form: Form,
    pub engine: FormEngine,
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(mut form: Form) -> Self {
        let engine = FormEngine::from_nodes(form.nodes.as_mut_slice());
        Self {
            page: Page::Blog,
            form,
            engine,
            submitting: false,
            notice: None,
            should_exit: false,
        }
    }
}
