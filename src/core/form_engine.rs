use crate::core::form_event::FormEvent;
use crate::core::node::{Node, NodeId};
use crate::input::{Input, InputCaps, KeyResult};
use crate::terminal::KeyEvent;
use indexmap::IndexMap;

/// Tracks which input owns the focus and routes keys into it. Works on the
/// form's node slice so the nodes themselves stay owned by the form.
pub struct FormEngine {
    input_ids: Vec<NodeId>,
    focus_index: Option<usize>,
}

impl FormEngine {
    pub fn from_nodes(nodes: &mut [Node]) -> Self {
        let input_ids = nodes
            .iter()
            .filter_map(|node| node.as_input().map(|input| input.id().clone()))
            .collect::<Vec<_>>();

        let mut engine = Self {
            input_ids,
            focus_index: None,
        };
        if !engine.input_ids.is_empty() {
            let mut events = Vec::new();
            engine.set_focus(nodes, Some(0), &mut events);
        }
        engine
    }

    pub fn input_ids(&self) -> &[NodeId] {
        &self.input_ids
    }

    pub fn focused_id(&self) -> Option<&NodeId> {
        self.focus_index.and_then(|i| self.input_ids.get(i))
    }

    pub fn focused_caps(&self, nodes: &[Node]) -> Option<InputCaps> {
        let id = self.focused_id()?;
        nodes
            .iter()
            .find_map(|node| node.as_input().filter(|input| input.id() == id))
            .map(|input| input.capabilities())
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.input_ids.iter().position(|i| i == id)
    }

    pub fn move_focus(&mut self, nodes: &mut [Node], direction: isize) -> Vec<FormEvent> {
        if self.input_ids.is_empty() {
            return vec![];
        }

        let current = self.focus_index.unwrap_or(0);
        let len = self.input_ids.len() as isize;
        let next = ((current as isize + direction + len) % len) as usize;

        let mut events = Vec::new();
        self.set_focus(nodes, Some(next), &mut events);
        events
    }

    pub fn set_focus(
        &mut self,
        nodes: &mut [Node],
        new_index: Option<usize>,
        events: &mut Vec<FormEvent>,
    ) {
        let from_id = self.focused_id().cloned();
        let to_id = new_index.and_then(|i| self.input_ids.get(i)).cloned();

        if from_id == to_id {
            self.focus_index = new_index;
            return;
        }

        if let Some(id) = &from_id {
            if let Some(input) = input_mut(nodes, id) {
                input.set_focused(false);
            }
        }
        if let Some(id) = &to_id {
            if let Some(input) = input_mut(nodes, id) {
                input.set_focused(true);
            }
        }

        self.focus_index = new_index;
        events.push(FormEvent::FocusChanged {
            from: from_id,
            to: to_id,
        });
    }

    pub fn handle_key(&mut self, nodes: &mut [Node], key: KeyEvent) -> Vec<FormEvent> {
        self.update_focused_input(nodes, |input| Some(input.handle_key(key.code, key.modifiers)))
    }

    pub fn handle_delete_word(&mut self, nodes: &mut [Node], forward: bool) -> Vec<FormEvent> {
        self.update_focused_input(nodes, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            None
        })
    }

    /// Replaces every field's error from a wholesale validation pass: fields
    /// present in the map get their message, all others are cleared.
    pub fn apply_errors(&mut self, nodes: &mut [Node], errors: &IndexMap<NodeId, String>) {
        for id in &self.input_ids {
            if let Some(input) = input_mut(nodes, id) {
                input.set_error(errors.get(id).cloned());
            }
        }
    }

    fn update_focused_input<F>(&mut self, nodes: &mut [Node], update: F) -> Vec<FormEvent>
    where
        F: FnOnce(&mut dyn Input) -> Option<KeyResult>,
    {
        let Some(id) = self.focused_id().cloned() else {
            return vec![];
        };
        let Some(input) = input_mut(nodes, &id) else {
            return vec![];
        };

        let before = input.value();
        let result = update(input);
        let after = input.value();

        let mut events = Vec::new();
        if before != after {
            input.clear_error();
            events.push(FormEvent::InputChanged { id: id.clone() });
        }
        if matches!(result, Some(KeyResult::Submit)) {
            events.push(FormEvent::SubmitRequested);
        }
        events
    }
}

fn input_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut dyn Input> {
    nodes
        .iter_mut()
        .find_map(|node| node.as_input_mut().filter(|input| input.id().as_str() == id))
}
