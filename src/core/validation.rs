use crate::core::node::{Node, NodeId};
use crate::input::Input;
use indexmap::IndexMap;

pub fn validate_input(input: &dyn Input) -> Result<(), String> {
    let value = input.value();
    for validator in input.validators() {
        validator(&value)?;
    }
    Ok(())
}

/// Recomputes the whole error map in field order: at most one message per
/// field, first failing rule wins. An empty map is the green light for the
/// network call.
pub fn validate_form(nodes: &[Node]) -> IndexMap<NodeId, String> {
    let mut errors = IndexMap::new();
    for node in nodes {
        if let Some(input) = node.as_input() {
            if let Err(message) = validate_input(input) {
                errors.insert(input.id().clone(), message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{Form, contact_form};

    fn filled(name: &str, email: &str, message: &str) -> Form {
        let mut form = contact_form();
        form.set_value("name", name);
        form.set_value("email", email);
        form.set_value("message", message);
        form
    }

    #[test]
    fn valid_fields_produce_no_errors() {
        let form = filled("Taro", "taro@example.com", "Hello");
        assert!(validate_form(&form.nodes).is_empty());
    }

    #[test]
    fn empty_form_reports_all_three_fields_as_required() {
        let form = filled("", "", "");
        let errors = validate_form(&form.nodes);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], "This field is required");
        assert_eq!(errors["email"], "This field is required");
        assert_eq!(errors["message"], "This field is required");
    }

    #[test]
    fn errors_keep_field_order() {
        let form = filled("", "bad", "");
        let errors = validate_form(&form.nodes);
        let keys: Vec<_> = errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "email", "message"]);
    }

    #[test]
    fn whitespace_only_name_is_required_not_too_long() {
        let form = filled("   ", "taro@example.com", "Hello");
        let errors = validate_form(&form.nodes);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "This field is required");
    }

    #[test]
    fn overlong_name_reports_the_length_rule_only() {
        let form = filled(&"x".repeat(31), "taro@example.com", "Hello");
        let errors = validate_form(&form.nodes);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "Must be 30 characters or fewer");
    }

    #[test]
    fn name_of_exactly_thirty_chars_passes() {
        let form = filled(&"x".repeat(30), "taro@example.com", "Hello");
        assert!(validate_form(&form.nodes).is_empty());
    }

    #[test]
    fn malformed_email_reports_the_format_rule() {
        let form = filled("Taro", "bad", "Hello");
        let errors = validate_form(&form.nodes);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Enter a valid email address");
    }

    #[test]
    fn terse_but_shaped_email_passes() {
        let form = filled("Taro", "a@b.c", "Hello");
        assert!(validate_form(&form.nodes).is_empty());
    }

    #[test]
    fn message_of_exactly_five_hundred_chars_passes() {
        let form = filled("Taro", "taro@example.com", &"m".repeat(500));
        assert!(validate_form(&form.nodes).is_empty());
    }

    #[test]
    fn message_over_five_hundred_chars_fails() {
        let form = filled("Taro", "taro@example.com", &"m".repeat(501));
        let errors = validate_form(&form.nodes);
        assert_eq!(errors["message"], "Must be 500 characters or fewer");
    }
}
