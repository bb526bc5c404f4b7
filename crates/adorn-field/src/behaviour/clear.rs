use std::rc::Rc;

use adorn_core::SemNode;

use super::{Attachment, Behaviour, ContentDescription, HideOnEmpty, is_shown, populate_clickable};
use crate::host::StringKey;
use crate::virtual_view::VirtualView;

/// Clears the text and focuses the field. Hidden while the text is empty.
pub struct ClearButton {
    description: ContentDescription,
    attachment: Attachment,
    hide: HideOnEmpty,
}

impl Default for ClearButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearButton {
    pub fn new() -> Self {
        Self::with_description(StringKey::ClearText)
    }

    pub fn with_description(description: impl Into<ContentDescription>) -> Self {
        Self {
            description: description.into(),
            attachment: Attachment::default(),
            hide: HideOnEmpty::default(),
        }
    }
}

impl Behaviour for ClearButton {
    fn on_click(&self) {
        let host = self.attachment.host();
        host.set_text("");
        host.request_focus_from_touch();
    }

    fn on_attach(&self, view: &Rc<VirtualView>) {
        self.attachment.attach(view);
        self.hide.attach(view);
    }

    fn on_detach(&self) {
        self.hide.detach();
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
