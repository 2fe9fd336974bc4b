use crate::core::node::Node;
use crate::input::{Input, TextArea, TextInput};
use crate::input::validators;

pub struct Form {
    pub title: String,
    pub hint: Option<String>,
    pub nodes: Vec<Node>,
}

impl Form {
    pub fn value(&self, id: &str) -> String {
        self.input(id).map(|input| input.value()).unwrap_or_default()
    }

    pub fn input(&self, id: &str) -> Option<&dyn Input> {
        self.nodes
            .iter()
            .find_map(|node| node.as_input().filter(|input| input.id().as_str() == id))
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut dyn Input> {
        self.nodes
            .iter_mut()
            .find_map(|node| node.as_input_mut().filter(|input| input.id().as_str() == id))
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(input) = self.input_mut(id) {
            input.set_value(value.into());
        }
    }

    pub fn clear_values(&mut self) {
        for node in &mut self.nodes {
            if let Some(input) = node.as_input_mut() {
                input.set_value(String::new());
            }
        }
    }
}

pub fn contact_form() -> Form {
    Form {
        title: "Contact us".to_string(),
        hint: Some(
            "Tab/Shift+Tab to move, ^S or Enter to send, ^R to clear, Esc to quit".to_string(),
        ),
        nodes: vec![
            Node::input(
                TextInput::new("name", "Name")
                    .with_width(40)
                    .with_validator(validators::required())
                    .with_validator(validators::max_length(30)),
            ),
            Node::input(
                TextInput::new("email", "Email")
                    .with_width(40)
                    .with_validator(validators::required())
                    .with_validator(validators::email()),
            ),
            Node::input(
                TextArea::new("message", "Message")
                    .with_width(60)
                    .with_min_rows(4)
                    .with_validator(validators::required())
                    .with_validator(validators::max_length(500)),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_has_the_three_fields_in_order() {
        let form = contact_form();
        let ids: Vec<_> = form
            .nodes
            .iter()
            .filter_map(|node| node.id().map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["name", "email", "message"]);
    }

    #[test]
    fn clear_values_empties_every_field() {
        let mut form = contact_form();
        form.set_value("name", "Taro");
        form.set_value("email", "taro@example.com");
        form.set_value("message", "Hello");

        form.clear_values();

        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("email"), "");
        assert_eq!(form.value("message"), "");
    }

    #[test]
    fn clear_values_keeps_existing_errors() {
        let mut form = contact_form();
        form.input_mut("name")
            .unwrap()
            .set_error(Some("This field is required".to_string()));

        form.clear_values();

        assert_eq!(
            form.input("name").unwrap().error(),
            Some("This field is required")
        );
    }
}
