use adorn_core::{Rect, Size, Slot};

use crate::host::HostMetrics;

/// Positions a decoration of a given size inside the host.
pub trait LayoutStrategy {
    fn slot(&self) -> Slot;
    fn layout(&self, drawable: Size, host: &HostMetrics) -> Rect;
}

/// Default placement, matching how text fields draw compound decorations:
/// left/right sit on the padding edge and are centered vertically in the
/// compound box; top/bottom sit on the padding edge and are centered
/// horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompoundLayout {
    Left,
    Top,
    Right,
    Bottom,
}

impl CompoundLayout {
    pub const ALL: [CompoundLayout; 4] = [
        CompoundLayout::Left,
        CompoundLayout::Top,
        CompoundLayout::Right,
        CompoundLayout::Bottom,
    ];

    pub fn for_slot(slot: Slot) -> Self {
        Self::ALL[slot.index()]
    }
}

// pixel snapping, the same way integer layout would truncate
fn centered(offset: f32, extent: f32, size: f32) -> f32 {
    ((offset + extent - size) / 2.0).trunc()
}

impl LayoutStrategy for CompoundLayout {
    fn slot(&self) -> Slot {
        match self {
            CompoundLayout::Left => Slot::Left,
            CompoundLayout::Top => Slot::Top,
            CompoundLayout::Right => Slot::Right,
            CompoundLayout::Bottom => Slot::Bottom,
        }
    }

    fn layout(&self, d: Size, host: &HostMetrics) -> Rect {
        let cp = host.compound_padding;
        let v_offset = cp.top - cp.bottom;
        let h_offset = cp.left - cp.right;
        let (x, y) = match self {
            CompoundLayout::Left => (
                host.padding.left,
                centered(v_offset, host.size.height, d.height),
            ),
            CompoundLayout::Top => (
                centered(h_offset, host.size.width, d.width),
                host.padding.top,
            ),
            CompoundLayout::Right => (
                host.size.width - host.padding.right - d.width,
                centered(v_offset, host.size.height, d.height),
            ),
            CompoundLayout::Bottom => (
                centered(h_offset, host.size.width, d.width),
                host.size.height - host.padding.bottom - d.height,
            ),
        };
        Rect {
            x,
            y,
            w: d.width,
            h: d.height,
        }
    }
}
