use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

/// Phase of a pointer gesture as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    /// The gesture was taken away (e.g. a parent started scrolling).
    Cancel,
    /// The pointer went down outside the host's bounds.
    Outside,
}

/// Pointer event in host-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Down(PointerButton::Primary), Vec2 { x, y })
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Up(PointerButton::Primary), Vec2 { x, y })
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Move, Vec2 { x, y })
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Cancel, Vec2 { x, y })
    }

    pub fn outside(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Outside, Vec2 { x, y })
    }

    /// Short single-line form used in trace logs.
    pub fn short(&self) -> String {
        let phase = match self.event {
            PointerEventKind::Down(_) => "DOWN",
            PointerEventKind::Up(_) => "UP",
            PointerEventKind::Move => "MOVE",
            PointerEventKind::Cancel => "CANCEL",
            PointerEventKind::Outside => "OUTSIDE",
        };
        format!(
            "{phase}[{:.1}, {:.1}] {:?}",
            self.position.x, self.position.y, self.kind
        )
    }
}
