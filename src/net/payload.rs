use serde::Serialize;

/// The JSON body of one contact submission, field values exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_wire_shape() {
        let payload = ContactPayload {
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Taro",
                "email": "taro@example.com",
                "message": "Hello",
            })
        );
    }
}
