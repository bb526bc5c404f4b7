use std::cell::RefCell;
use std::rc::Rc;

use adorn_core::{Signal, SubId};

use crate::host::TextChange;
use crate::virtual_view::VirtualView;

/// Hides a slot while the host text is empty.
///
/// Visibility follows the text at attach time, then flips only on edits
/// that cross the empty boundary. Detaching leaves the slot visible.
#[derive(Default)]
pub struct HideOnEmpty {
    subscription: RefCell<Option<(Signal<TextChange>, SubId)>>,
    view: RefCell<Option<Rc<VirtualView>>>,
}

impl HideOnEmpty {
    pub fn attach(&self, view: &Rc<VirtualView>) {
        let Some(host) = view.host() else {
            return;
        };
        view.set_visible(!host.text().is_empty());

        let changes = host.text_changes();
        let weak = Rc::downgrade(view);
        let id = changes.subscribe(move |change: &TextChange| {
            if !change.crosses_empty() {
                return;
            }
            if let Some(view) = weak.upgrade() {
                view.set_visible(!change.is_empty_after());
            }
        });
        *self.subscription.borrow_mut() = Some((changes, id));
        *self.view.borrow_mut() = Some(view.clone());
    }

    pub fn detach(&self) {
        if let Some((changes, id)) = self.subscription.borrow_mut().take() {
            changes.unsubscribe(id);
        }
        if let Some(view) = self.view.borrow_mut().take() {
            view.set_visible(true);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.borrow().is_some()
    }
}
