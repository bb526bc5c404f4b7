use std::rc::Rc;

use adorn_core::SemNode;

use super::{Behaviour, HideOnEmpty, ToggleButton};
use crate::host::{FieldHost, StringKey};
use crate::virtual_view::VirtualView;

/// Shows or hides the password text. Checked means the text is readable.
/// Hidden while the field is empty.
#[derive(Default)]
pub struct PasswordButton {
    toggle: ToggleButton,
    hide: HideOnEmpty,
}

impl PasswordButton {
    pub fn new() -> Self {
        Self::default()
    }

    fn host(&self) -> Rc<dyn FieldHost> {
        match self.toggle.view().host() {
            Some(h) => h,
            None => panic!("behaviour used after its host was dropped"),
        }
    }
}

impl Behaviour for PasswordButton {
    fn on_click(&self) {
        let host = self.host();
        host.set_text_obscured(!host.is_text_obscured());
        self.toggle.set_checked(!host.is_text_obscured());
        host.set_selection(host.text().len());
    }

    fn on_attach(&self, view: &Rc<VirtualView>) {
        self.toggle.on_attach(view);
        // the field may start with readable text
        let obscured = view.host().is_some_and(|h| h.is_text_obscured());
        view.set_checked(!obscured);
        self.hide.attach(view);
    }

    fn on_detach(&self) {
        self.hide.detach();
        self.toggle.on_detach();
    }

    fn content_description(&self) -> String {
        let Some(host) = self.toggle.try_view().and_then(|v| v.host()) else {
            return StringKey::ShowPassword.default_text();
        };
        let key = if host.is_text_obscured() {
            StringKey::ShowPassword
        } else {
            StringKey::HidePassword
        };
        host.string(&key)
    }

    fn is_important_for_accessibility(&self) -> bool {
        self.toggle.is_important_for_accessibility()
    }

    fn is_checkable(&self) -> bool {
        true
    }

    fn populate_node(&self, node: &mut SemNode) {
        self.toggle.populate_node(node);
    }
}
