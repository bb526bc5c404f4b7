use std::rc::Rc;

use adorn_core::{Role, SemNode};

use super::{Attachment, Behaviour, ContentDescription, is_shown, populate_clickable};
use crate::virtual_view::VirtualView;

/// Two-state button. Each click flips the slot's checked state.
pub struct ToggleButton {
    description: Option<ContentDescription>,
    checked_initially: bool,
    attachment: Attachment,
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ToggleButton {
    pub fn new(checked_initially: bool) -> Self {
        Self {
            description: None,
            checked_initially,
            attachment: Attachment::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<ContentDescription>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn view(&self) -> Rc<VirtualView> {
        self.attachment.view()
    }

    pub(crate) fn try_view(&self) -> Option<Rc<VirtualView>> {
        self.attachment.try_view()
    }

    pub fn is_checked(&self) -> bool {
        self.attachment.view().is_checked()
    }

    /// Sets the checked state and pushes the new state set to the drawable.
    pub fn set_checked(&self, checked: bool) {
        let view = self.attachment.view();
        view.set_checked(checked);
        view.invalidate_drawable_state();
    }
}

impl Behaviour for ToggleButton {
    fn on_click(&self) {
        self.set_checked(!self.is_checked());
    }

    fn on_attach(&self, view: &Rc<VirtualView>) {
        self.attachment.attach(view);
        view.set_checkable(true);
        view.set_checked(self.checked_initially);
    }

    fn on_detach(&self) {
        if let Some(view) = self.attachment.detach() {
            view.set_checked(false);
        }
    }

    fn content_description(&self) -> String {
        let host = self.attachment.try_view().and_then(|v| v.host());
        self.description
            .as_ref()
            .map(|d| d.resolve(host.as_deref()))
            .unwrap_or_default()
    }

    fn is_important_for_accessibility(&self) -> bool {
        is_shown(self.attachment.try_view())
    }

    fn is_checkable(&self) -> bool {
        true
    }

    fn populate_node(&self, node: &mut SemNode) {
        populate_clickable(node);
        node.role = Role::Switch;
        node.checked = self.attachment.try_view().map(|v| v.is_checked());
    }
}
