use crate::core::event::Action;
use crate::core::page::Page;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionBindings {
    pub fn new() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        bindings.setup_default_bindings();
        bindings
    }

    fn setup_default_bindings(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Action::Exit);

        self.bind(KeyBinding::key(KeyCode::Tab), Action::NextInput);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevInput,
        );

        self.bind(KeyBinding::ctrl(KeyCode::Char('s')), Action::Submit);
        self.bind(KeyBinding::ctrl(KeyCode::Char('r')), Action::ClearForm);

        self.bind(
            KeyBinding::ctrl(KeyCode::Char('b')),
            Action::ShowPage(Page::Blog),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('t')),
            Action::ShowPage(Page::Contact),
        );

        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Delete), Action::DeleteWordForward);
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn handle_key(&self, key_event: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&KeyBinding::from_key_event(key_event))
            .cloned()
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_are_not_bound() {
        let bindings = ActionBindings::new();
        let event = KeyEvent::plain(KeyCode::Char('a'));
        assert_eq!(bindings.handle_key(&event), None);
    }

    #[test]
    fn page_switches_are_bound_to_ctrl_keys() {
        let bindings = ActionBindings::new();
        assert_eq!(
            bindings.handle_key(&KeyEvent::ctrl(KeyCode::Char('t'))),
            Some(Action::ShowPage(Page::Contact))
        );
        assert_eq!(
            bindings.handle_key(&KeyEvent::ctrl(KeyCode::Char('b'))),
            Some(Action::ShowPage(Page::Blog))
        );
    }
}
