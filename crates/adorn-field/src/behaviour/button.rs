use std::rc::Rc;

use adorn_core::{A11yAction, SemNode, Slot};

use super::{Attachment, Behaviour, ContentDescription, is_shown, populate_clickable};
use crate::host::FieldHost;
use crate::virtual_view::VirtualView;

/// Id of the labelled action offered next to the standard click.
pub const EXTRA_CLICK_ACTION_ID: u32 = 0x0adf;

pub fn extra_click_action() -> A11yAction {
    A11yAction::Custom {
        id: EXTRA_CLICK_ACTION_ID,
        label: "Activate".into(),
    }
}

/// Receives the physical slot that was clicked and the host.
pub type ClickHandler = Rc<dyn Fn(Slot, &dyn FieldHost)>;

/// A plain button that forwards clicks to an integrator callback.
pub struct ButtonBehaviour {
    description: ContentDescription,
    handler: ClickHandler,
    attachment: Attachment,
}

impl ButtonBehaviour {
    pub fn new(description: impl Into<ContentDescription>, handler: ClickHandler) -> Self {
        Self {
            description: description.into(),
            handler,
            attachment: Attachment::default(),
        }
    }

    pub fn from_fn(
        description: impl Into<ContentDescription>,
        f: impl Fn(Slot, &dyn FieldHost) + 'static,
    ) -> Self {
        Self::new(description, Rc::new(f))
    }
}

impl Behaviour for ButtonBehaviour {
    fn on_click(&self) {
        let view = self.attachment.view();
        let host = self.attachment.host();
        (self.handler)(view.slot(), &*host);
    }

    fn on_attach(&self, view: &Rc<VirtualView>) {
        self.attachment.attach(view);
    }

    fn on_detach(&self) {
        self.attachment.detach();
    }

    fn content_description(&self) -> String {
        let host = self.attachment.try_view().and_then(|v| v.host());
        self.description.resolve(host.as_deref())
    }

    fn is_important_for_accessibility(&self) -> bool {
        is_shown(self.attachment.try_view())
    }

    fn populate_node(&self, node: &mut SemNode) {
        populate_clickable(node);
    }
}
