use crate::{Rect, Slot};

/// High‑level semantic role of a node, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Decorative content, not announced as a control.
    Image,
    Button,
    TextField,
    /// Two-state toggle (e.g. password visibility).
    Switch,
}

/// Actions a screen reader can perform on a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum A11yAction {
    /// The standard activate action.
    Click,
    /// An additional labelled action that activates the node as well.
    Custom { id: u32, label: String },
}

/// Target of an accessibility query: the host field itself or one of its
/// decoration slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeId {
    Host,
    Virtual(Slot),
}

/// Flattened semantics node for one decoration slot.
///
/// This is the source of truth for accessibility backends: it contains the
/// resolved host-local rect, role, label, and interaction flags.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    /// Stable id, the slot the node belongs to.
    pub id: NodeId,
    pub role: Role,
    /// Human‑readable label for screen readers. For buttons, this is the
    /// “name” that is announced.
    pub label: Option<String>,
    pub rect: Rect,
    pub focused: bool,
    pub enabled: bool,
    pub clickable: bool,
    /// `Some` for two-state nodes.
    pub checked: Option<bool>,
    pub actions: Vec<A11yAction>,
}

impl SemNode {
    pub fn new(id: NodeId, role: Role) -> Self {
        Self {
            id,
            role,
            label: None,
            rect: Rect::EMPTY,
            focused: false,
            enabled: true,
            clickable: false,
            checked: None,
            actions: Vec::new(),
        }
    }
}
