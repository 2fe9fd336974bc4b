use crate::input::Input;

pub use crate::input::NodeId;

pub enum Node {
    Text(String),
    Input(Box<dyn Input>),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn input(input: impl Input + 'static) -> Self {
        Node::Input(Box::new(input))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Input(input) => Some(input.id()),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_ref()),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut dyn Input> {
        match self {
            Node::Input(input) => Some(input.as_mut()),
            _ => None,
        }
    }
}
