//! # Host contract
//!
//! The text field widget that owns the decorations is not part of this
//! crate. It implements [`FieldHost`] and delegates its touch, layout,
//! attach and drawable-state hooks to a
//! [`CompoundDrawablesController`](crate::CompoundDrawablesController).
//!
//! All methods take `&self`; hosts keep their mutable state in `Cell` /
//! `RefCell`. Calls flow back into the host while the controller handles an
//! event (e.g. a clear button calls `set_text` from inside a touch
//! dispatch), so a host must not hold a `RefCell` borrow across calls into
//! the controller or while emitting [`TextChange`] notifications.

use std::borrow::Cow;
use std::rc::Rc;
use std::time::Duration;

use adorn_core::{FieldStatus, PaddingValues, Signal, Size, StateId, TextDirection};
use smallvec::SmallVec;

use crate::drawable::{Drawable, StatefulDrawable};

/// Tolerance added around slot rects for touch hit-testing, in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

pub type Task = Box<dyn FnOnce()>;

/// Text content change, by length before and after the edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextChange {
    pub before_len: usize,
    pub after_len: usize,
}

impl TextChange {
    pub fn new(before: &str, after: &str) -> Self {
        Self {
            before_len: before.len(),
            after_len: after.len(),
        }
    }

    /// `true` only for edits from empty to non-empty or back.
    pub fn crosses_empty(&self) -> bool {
        (self.before_len == 0) != (self.after_len == 0)
    }

    pub fn is_empty_after(&self) -> bool {
        self.after_len == 0
    }
}

/// Localizable strings the behaviours announce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StringKey {
    ClearText,
    ShowPassword,
    HidePassword,
    /// Integrator-defined key, resolved by the host.
    Custom(Cow<'static, str>),
}

impl StringKey {
    /// Fallback text when the host has no translation.
    pub fn default_text(&self) -> String {
        match self {
            StringKey::ClearText => "Clear text".into(),
            StringKey::ShowPassword => "Show password".into(),
            StringKey::HidePassword => "Hide password".into(),
            StringKey::Custom(key) => key.to_string(),
        }
    }
}

pub trait FieldHost {
    fn size(&self) -> Size;
    fn padding(&self) -> PaddingValues;
    /// Padding including the space taken by decorations. Horizontal slots
    /// center inside the vertical compound box and vice versa.
    fn compound_padding(&self) -> PaddingValues {
        self.padding()
    }
    fn layout_direction(&self) -> TextDirection {
        adorn_core::text_direction()
    }
    fn touch_slop(&self) -> f32 {
        DEFAULT_TOUCH_SLOP
    }

    fn is_enabled(&self) -> bool;
    fn is_focused(&self) -> bool;
    fn status(&self) -> FieldStatus {
        FieldStatus::NEUTRAL
    }
    /// Signed values of the host's custom states, in registration order.
    fn custom_states(&self) -> SmallVec<[StateId; 8]> {
        SmallVec::new()
    }

    fn text(&self) -> String;
    /// Replaces the text and emits a [`TextChange`] on [`FieldHost::text_changes`].
    fn set_text(&self, text: &str);
    fn text_changes(&self) -> Signal<TextChange>;
    /// Whether the text is currently rendered obscured (password dots).
    fn is_text_obscured(&self) -> bool {
        false
    }
    fn set_text_obscured(&self, _obscured: bool) {}
    /// Moves the caret to byte offset `index`.
    fn set_selection(&self, _index: usize) {}
    /// Focus request that behaves like a user tap (shows the soft keyboard).
    fn request_focus_from_touch(&self) -> bool;

    /// Decorations currently assigned to the host, left/top/right/bottom.
    fn compound_drawables(&self) -> [Option<Rc<dyn Drawable>>; 4];
    /// Decorations to render from now on, left/top/right/bottom. The host
    /// draws each visible wrapper at the matching slot rect.
    fn set_compound_drawables(&self, drawables: [Option<Rc<StatefulDrawable>>; 4]);

    /// Requests a redraw.
    fn invalidate(&self);
    fn request_layout(&self) {}
    /// Runs `task` on the UI thread after `delay`.
    fn post_delayed(&self, delay: Duration, task: Task);

    fn string(&self, key: &StringKey) -> String {
        key.default_text()
    }
    /// Name used in debug logs.
    fn debug_name(&self) -> String {
        String::new()
    }
}

/// Snapshot of the host geometry a layout pass works with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostMetrics {
    pub size: Size,
    pub padding: PaddingValues,
    pub compound_padding: PaddingValues,
}

impl HostMetrics {
    pub fn of(host: &dyn FieldHost) -> Self {
        Self {
            size: host.size(),
            padding: host.padding(),
            compound_padding: host.compound_padding(),
        }
    }
}
