use web_time::Instant;

use adorn_core::{Color, Rect, Scene, SceneNode, Slot};
use adorn_field::CompoundDrawablesController;

/// Debug draw for one field: origin marker, a refresh counter, a crosshair
/// through the host center and an outline per laid-out slot.
pub struct SlotOverlay {
    pub enabled: bool,
    frame_count: u64,
    started: Instant,
}

impl Default for SlotOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotOverlay {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            started: Instant::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!("slot overlay {}", if self.enabled { "on" } else { "off" });
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn overlay(&mut self, controller: &CompoundDrawablesController, scene: &mut Scene) {
        let Some(host) = controller.host() else {
            return;
        };
        self.frame_count += 1;
        let size = host.size();
        let ink = Color::from_hex("#FF00FF");

        // origin
        scene.nodes.push(SceneNode::Rect {
            rect: Rect {
                x: -5.0,
                y: -5.0,
                w: 10.0,
                h: 10.0,
            },
            color: ink,
        });
        // changes on every redraw, so stale frames are easy to spot
        let tick = self.started.elapsed().as_millis() % 10;
        scene.nodes.push(SceneNode::Text {
            rect: Rect {
                x: 20.0,
                y: 8.0,
                w: 16.0,
                h: 16.0,
            },
            text: tick.to_string(),
            color: ink,
            size: 12.0,
        });
        scene.nodes.push(SceneNode::Rect {
            rect: Rect {
                x: 0.0,
                y: (size.height / 2.0).floor(),
                w: size.width,
                h: 1.0,
            },
            color: ink,
        });
        scene.nodes.push(SceneNode::Rect {
            rect: Rect {
                x: (size.width / 2.0).floor(),
                y: 0.0,
                w: 1.0,
                h: size.height,
            },
            color: ink,
        });

        for slot in Slot::ALL {
            let view = controller.virtual_view(slot);
            let rect = view.rect();
            if rect.is_empty() {
                continue;
            }
            let color = if view.is_pressed() {
                Color::from_hex("#FF4444")
            } else if view.is_visible() {
                Color::from_hex("#44AAFF")
            } else {
                Color::from_hex("#888888")
            };
            scene.nodes.push(SceneNode::Border {
                rect,
                color,
                width: 1.0,
            });
        }
    }
}

/// Draws the overlay for the fields it is handed while enabled.
pub struct Inspector {
    pub overlay: SlotOverlay,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            overlay: SlotOverlay::new(),
        }
    }

    pub fn frame(&mut self, controller: &CompoundDrawablesController, scene: &mut Scene) {
        if self.overlay.enabled {
            self.overlay.overlay(controller, scene);
        }
    }
}
