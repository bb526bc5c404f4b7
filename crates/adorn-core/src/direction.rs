//! # Layout direction and decoration slots
//!
//! A text field has four fixed decoration slots. Physical slots are
//! `Left`, `Top`, `Right`, `Bottom`; relative slots are `Start`, `Top`, `End`,
//! `Bottom` and are resolved against a `TextDirection` every time they are
//! used, so a direction change after attach (locale switch) is honored.
//!
//! The ambient direction is a thread-local, overridable for a scope:
//!
//! ```rust
//! use adorn_core::*;
//!
//! with_text_direction(TextDirection::Rtl, || {
//!     assert_eq!(RelativeSlot::Start.resolve(text_direction()), Slot::Right);
//! });
//! assert_eq!(RelativeSlot::Start.resolve(text_direction()), Slot::Left);
//! ```

use std::cell::RefCell;

use crate::error::SlotIndexError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

thread_local! {
    static DIRECTION_STACK: RefCell<Vec<TextDirection>> = const { RefCell::new(Vec::new()) };
}

pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            DIRECTION_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    DIRECTION_STACK.with(|st| st.borrow_mut().push(dir));
    let _guard = Guard;
    f()
}

pub fn text_direction() -> TextDirection {
    DIRECTION_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}

/// Physical decoration slot. The discriminant is the slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Slot {
    /// Dispatch order for touch and layout: left, top, right, bottom.
    pub const ALL: [Slot; 4] = [Slot::Left, Slot::Top, Slot::Right, Slot::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Slot::Left | Slot::Right)
    }
}

impl TryFrom<usize> for Slot {
    type Error = SlotIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Slot::ALL.get(index).copied().ok_or(SlotIndexError(index))
    }
}

/// Direction-relative decoration slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelativeSlot {
    Start = 0,
    Top = 1,
    End = 2,
    Bottom = 3,
}

impl RelativeSlot {
    pub const ALL: [RelativeSlot; 4] = [
        RelativeSlot::Start,
        RelativeSlot::Top,
        RelativeSlot::End,
        RelativeSlot::Bottom,
    ];

    pub fn resolve(self, dir: TextDirection) -> Slot {
        Slot::ALL[resolve_index(self as usize, dir)]
    }
}

impl TryFrom<usize> for RelativeSlot {
    type Error = SlotIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        RelativeSlot::ALL
            .get(index)
            .copied()
            .ok_or(SlotIndexError(index))
    }
}

/// Maps a relative slot index (start=0, top=1, end=2, bottom=3) to the physical
/// one. Only the horizontal (even) indices swap under RTL.
pub fn resolve_index(relative: usize, dir: TextDirection) -> usize {
    if dir.is_rtl() && relative % 2 == 0 {
        (relative + 2) % 4
    } else {
        relative
    }
}

/// Reorders a start/top/end/bottom array into left/top/right/bottom.
pub fn resolve_relative<T>(items: [T; 4], dir: TextDirection) -> [T; 4] {
    let mut items = items;
    if dir.is_rtl() {
        items.swap(0, 2);
    }
    items
}
