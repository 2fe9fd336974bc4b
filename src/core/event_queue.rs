use crate::core::event::Action;
use crate::net::SubmitError;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    SubmitFinished(Result<(), SubmitError>),
}

#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn next(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }
}
