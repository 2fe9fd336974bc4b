use crate::core::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged {
        id: NodeId,
    },
    FocusChanged {
        from: Option<NodeId>,
        to: Option<NodeId>,
    },
    SubmitRequested,
}
