use std::rc::Rc;

use adorn_core::{A11yAction, SemNode};

use super::Behaviour;
use crate::virtual_view::VirtualView;

/// Placeholder behaviour: clicks do nothing and the slot is hidden from
/// accessibility services.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoneBehaviour;

impl NoneBehaviour {
    pub fn shared() -> Rc<dyn Behaviour> {
        Rc::new(NoneBehaviour)
    }
}

impl Behaviour for NoneBehaviour {
    fn on_click(&self) {}
    fn on_attach(&self, _view: &Rc<VirtualView>) {}
    fn on_detach(&self) {}

    fn content_description(&self) -> String {
        String::new()
    }

    fn is_important_for_accessibility(&self) -> bool {
        false
    }

    fn on_accessibility_action(&self, _action: &A11yAction) -> bool {
        false
    }

    fn populate_node(&self, _node: &mut SemNode) {}
}
