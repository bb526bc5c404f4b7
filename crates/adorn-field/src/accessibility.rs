//! Accessibility view of a field's decoration slots.
//!
//! Each slot whose behaviour is important for accessibility is exposed as a
//! virtual node with its own rect, label and actions; everything else falls
//! through to the host node.

use smallvec::SmallVec;

use adorn_core::{A11yAction, NodeId, SemNode, Slot, Vec2};

use crate::behaviour::populate_base;
use crate::controller::CompoundDrawablesController;

/// Platform accessibility sink.
pub trait A11yBridge {
    /// Replaces the published virtual nodes of one field.
    fn publish_tree(&mut self, nodes: &[SemNode]);
    fn focus_changed(&mut self, node: Option<&SemNode>);
    fn announce(&mut self, _msg: &str) {}
}

/// Bridge for platforms without an accessibility backend.
pub struct NoopA11y;

impl A11yBridge for NoopA11y {
    fn publish_tree(&mut self, nodes: &[SemNode]) {
        log::trace!("a11y: {} virtual nodes", nodes.len());
    }

    fn focus_changed(&mut self, node: Option<&SemNode>) {
        match node {
            Some(n) => log::trace!("a11y focus: {:?} {:?}", n.id, n.label),
            None => log::trace!("a11y focus: none"),
        }
    }

    fn announce(&mut self, msg: &str) {
        log::trace!("a11y announce: {msg}");
    }
}

pub struct AccessibilityDelegate<'a> {
    controller: &'a CompoundDrawablesController,
}

impl<'a> AccessibilityDelegate<'a> {
    pub fn new(controller: &'a CompoundDrawablesController) -> Self {
        Self { controller }
    }

    fn exposed(&self, slot: Slot) -> bool {
        let view = self.controller.virtual_view(slot);
        view.is_visible()
            && !view.rect().is_empty()
            && self
                .controller
                .compound_drawable_behaviour(slot)
                .is_important_for_accessibility()
    }

    /// The node under a host-local point.
    pub fn virtual_view_at(&self, p: Vec2) -> NodeId {
        Slot::ALL
            .into_iter()
            .find(|&slot| self.exposed(slot) && self.controller.virtual_view(slot).rect().contains(p))
            .map_or(NodeId::Host, NodeId::Virtual)
    }

    /// Slots currently exposed as virtual nodes.
    pub fn visible_virtual_views(&self) -> SmallVec<[Slot; 4]> {
        Slot::ALL
            .into_iter()
            .filter(|&slot| self.exposed(slot))
            .collect()
    }

    pub fn perform_action(&self, id: NodeId, action: &A11yAction) -> bool {
        match id {
            NodeId::Host => false,
            NodeId::Virtual(slot) => {
                if !self.exposed(slot) {
                    return false;
                }
                self.controller
                    .compound_drawable_behaviour(slot)
                    .on_accessibility_action(action)
            }
        }
    }

    pub fn populate_node(&self, slot: Slot) -> SemNode {
        let view = self.controller.virtual_view(slot);
        let behaviour = self.controller.compound_drawable_behaviour(slot);
        let mut node = SemNode::new(NodeId::Virtual(slot), adorn_core::Role::Image);
        populate_base(&mut node, view, behaviour.content_description());
        behaviour.populate_node(&mut node);
        node
    }

    pub fn nodes(&self) -> Vec<SemNode> {
        self.visible_virtual_views()
            .into_iter()
            .map(|slot| self.populate_node(slot))
            .collect()
    }

    pub fn publish(&self, bridge: &mut dyn A11yBridge) {
        bridge.publish_tree(&self.nodes());
    }
}
