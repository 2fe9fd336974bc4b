use crate::core::event::Action;
use crate::core::form_event::FormEvent;
use crate::core::page::Page;
use crate::core::state::{AppState, Notice};
use crate::core::validation;
use crate::net::{ContactPayload, SubmitError};
use crate::terminal::KeyCode;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSubmit(ContactPayload),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit => {
                if state.notice.take().is_some() {
                    return vec![];
                }
                state.should_exit = true;
                vec![]
            }
            Action::ShowPage(page) => {
                if state.page != page {
                    debug!(?page, "switching page");
                    state.page = page;
                }
                vec![]
            }
            Action::Submit => Self::handle_submit(state),
            Action::ClearForm => {
                if !Self::form_interactive(state) {
                    return vec![];
                }
                state.form.clear_values();
                vec![]
            }
            Action::NextInput => Self::shift_focus(state, 1),
            Action::PrevInput => Self::shift_focus(state, -1),
            Action::DeleteWord => Self::delete_word(state, false),
            Action::DeleteWordForward => Self::delete_word(state, true),
            Action::InputKey(key) => {
                if state.notice.is_some() {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                        state.notice = None;
                    }
                    return vec![];
                }
                if !Self::form_interactive(state) {
                    return vec![];
                }

                let events = {
                    let nodes = state.form.nodes.as_mut_slice();
                    state.engine.handle_key(nodes, key)
                };
                if events.contains(&FormEvent::SubmitRequested) {
                    return Self::handle_submit(state);
                }
                vec![]
            }
        }
    }

    /// Applies the terminal outcome of the network call. Success clears the
    /// form before showing the notice; failure keeps what was typed.
    pub fn finish_submit(state: &mut AppState, outcome: Result<(), SubmitError>) {
        state.submitting = false;
        match outcome {
            Ok(()) => {
                info!("contact form delivered");
                state.form.clear_values();
                state.notice = Some(Notice::Sent);
            }
            Err(err) => {
                warn!(error = %err, "contact form submission failed");
                state.notice = Some(Notice::Failed);
            }
        }
    }

    fn form_interactive(state: &AppState) -> bool {
        state.page == Page::Contact && !state.submitting && state.notice.is_none()
    }

    fn shift_focus(state: &mut AppState, direction: isize) -> Vec<Effect> {
        if Self::form_interactive(state) {
            let nodes = state.form.nodes.as_mut_slice();
            state.engine.move_focus(nodes, direction);
        }
        vec![]
    }

    fn delete_word(state: &mut AppState, forward: bool) -> Vec<Effect> {
        if Self::form_interactive(state) {
            let nodes = state.form.nodes.as_mut_slice();
            state.engine.handle_delete_word(nodes, forward);
        }
        vec![]
    }

    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        if !Self::form_interactive(state) {
            return vec![];
        }

        state.submitting = true;

        // The error map is recomputed wholesale on every attempt, so stale
        // messages from an earlier attempt are replaced or cleared here.
        let errors = validation::validate_form(&state.form.nodes);
        let nodes = state.form.nodes.as_mut_slice();
        state.engine.apply_errors(nodes, &errors);

        if !errors.is_empty() {
            debug!(fields = errors.len(), "submission rejected by validation");
            let first = errors.keys().next().cloned();
            if let Some(index) = first.and_then(|id| state.engine.find_index_by_id(&id)) {
                let mut events = Vec::new();
                state.engine.set_focus(nodes, Some(index), &mut events);
            }
            state.submitting = false;
            return vec![];
        }

        info!("submitting contact form");
        vec![Effect::StartSubmit(ContactPayload {
            name: state.form.value("name"),
            email: state.form.value("email"),
            message: state.form.value("message"),
        })]
    }
}
