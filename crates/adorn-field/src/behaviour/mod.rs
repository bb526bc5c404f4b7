//! Click behaviours for decoration slots.
//!
//! Every slot of a controller holds exactly one behaviour; [`NoneBehaviour`]
//! is the placeholder. A behaviour instance can be attached to one slot at a
//! time: the controller calls [`Behaviour::on_attach`] when installing it and
//! [`Behaviour::on_detach`] when replacing it.

mod button;
mod clear;
mod hide_on_empty;
mod none;
mod password;
mod toggle;

use std::cell::RefCell;
use std::rc::Rc;

use adorn_core::{A11yAction, NodeId, Role, SemNode};

pub use button::{ButtonBehaviour, ClickHandler, EXTRA_CLICK_ACTION_ID, extra_click_action};
pub use clear::ClearButton;
pub use hide_on_empty::HideOnEmpty;
pub use none::NoneBehaviour;
pub use password::PasswordButton;
pub use toggle::ToggleButton;

use crate::host::{FieldHost, StringKey};
use crate::virtual_view::VirtualView;

pub trait Behaviour {
    fn on_click(&self);
    fn on_attach(&self, view: &Rc<VirtualView>);
    fn on_detach(&self);

    fn content_description(&self) -> String;

    fn is_important_for_accessibility(&self) -> bool;

    /// Checkable behaviours make their slot report the checkable state.
    fn is_checkable(&self) -> bool {
        false
    }

    /// Returns `true` if the action was handled.
    fn on_accessibility_action(&self, action: &A11yAction) -> bool {
        match action {
            A11yAction::Click | A11yAction::Custom { .. } => {
                self.on_click();
                true
            }
        }
    }

    fn populate_node(&self, node: &mut SemNode);
}

/// Label source for a behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDescription {
    Key(StringKey),
    Text(String),
}

impl ContentDescription {
    pub fn resolve(&self, host: Option<&dyn FieldHost>) -> String {
        match self {
            ContentDescription::Key(key) => match host {
                Some(h) => h.string(key),
                None => key.default_text(),
            },
            ContentDescription::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for ContentDescription {
    fn from(s: &str) -> Self {
        ContentDescription::Text(s.to_string())
    }
}

impl From<String> for ContentDescription {
    fn from(s: String) -> Self {
        ContentDescription::Text(s)
    }
}

impl From<StringKey> for ContentDescription {
    fn from(key: StringKey) -> Self {
        ContentDescription::Key(key)
    }
}

/// The slot a behaviour is attached to.
///
/// Using a behaviour outside its attach/detach window is a lifecycle bug in
/// the integration, and panics.
#[derive(Default)]
pub struct Attachment {
    view: RefCell<Option<Rc<VirtualView>>>,
}

impl Attachment {
    pub fn attach(&self, view: &Rc<VirtualView>) {
        let mut slot = self.view.borrow_mut();
        if let Some(current) = slot.as_ref() {
            panic!(
                "behaviour is already attached to slot {:?}; detach it before attaching to {:?}",
                current.slot(),
                view.slot()
            );
        }
        *slot = Some(view.clone());
    }

    pub fn detach(&self) -> Option<Rc<VirtualView>> {
        self.view.borrow_mut().take()
    }

    pub fn is_attached(&self) -> bool {
        self.view.borrow().is_some()
    }

    pub fn try_view(&self) -> Option<Rc<VirtualView>> {
        self.view.borrow().clone()
    }

    pub fn view(&self) -> Rc<VirtualView> {
        match self.try_view() {
            Some(v) => v,
            None => panic!("behaviour used while not attached to a slot"),
        }
    }

    pub fn host(&self) -> Rc<dyn FieldHost> {
        match self.view().host() {
            Some(h) => h,
            None => panic!("behaviour used after its host was dropped"),
        }
    }
}

/// Fills the fields every slot node shares; behaviours refine the rest.
pub(crate) fn populate_base(node: &mut SemNode, view: &VirtualView, label: String) {
    node.id = NodeId::Virtual(view.slot());
    node.role = Role::Image;
    node.rect = view.rect();
    node.enabled = view.is_enabled();
    node.focused = false;
    node.label = (!label.is_empty()).then_some(label);
}

/// A clickable button node offering the standard and the extra action.
pub(crate) fn populate_clickable(node: &mut SemNode) {
    node.role = Role::Button;
    node.clickable = true;
    node.actions = vec![A11yAction::Click, extra_click_action()];
}

pub(crate) fn is_shown(view: Option<Rc<VirtualView>>) -> bool {
    view.is_some_and(|v| v.has_drawable() && v.is_visible())
}
