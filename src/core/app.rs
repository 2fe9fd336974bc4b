use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::form::contact_form;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::net::{ContactGateway, SubmitWorker};
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::Renderer;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use std::io;
use std::sync::Arc;

pub struct App {
    pub state: AppState,
    renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    worker: SubmitWorker,
    spinner: Spinner,
    theme: Theme,
}

impl App {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            state: AppState::new(contact_form()),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            worker: SubmitWorker::new(gateway),
            spinner: Spinner::new(),
            theme: Theme::default_theme(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    /// Drains pending events and the submit worker. Returns true when
    /// anything changed and the screen should be redrawn.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if let Some(outcome) = self.worker.poll() {
            self.event_queue.emit(AppEvent::SubmitFinished(outcome));
        }

        while let Some(event) = self.event_queue.next() {
            self.dispatch_event(event);
            changed = true;
        }

        if self.state.submitting {
            self.spinner.tick();
            changed = true;
        }

        changed
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer
            .render(&self.state, &self.spinner, &self.theme, terminal)
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                let captured = self
                    .state
                    .engine
                    .focused_caps(&self.state.form.nodes)
                    .map(|caps| caps.captures_key(key_event.code, key_event.modifiers))
                    .unwrap_or(false);

                if !captured {
                    if let Some(action) = self.action_bindings.handle_key(&key_event) {
                        let effects = Reducer::reduce(&mut self.state, action);
                        self.apply_effects(effects);
                        return;
                    }
                }

                let effects = Reducer::reduce(&mut self.state, Action::InputKey(key_event));
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action);
                self.apply_effects(effects);
            }
            AppEvent::SubmitFinished(outcome) => {
                Reducer::finish_submit(&mut self.state, outcome);
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSubmit(payload) => self.worker.start(payload),
            }
        }
    }
}
