use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(format!("Must be {} characters or fewer", max))
        } else {
            Ok(())
        }
    })
}

// Unanchored on purpose: anything containing word@word.word passes.
pub fn email() -> Validator {
    let re = Regex::new(r"\S+@\S+\.\S+").expect("invalid email pattern");
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err("Enter a valid email address".to_string())
        }
    })
}
