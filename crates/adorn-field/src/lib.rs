//! # Adorn field
//!
//! Interactive decorations for text fields: up to four images placed around
//! the text (left, top, right, bottom) that behave like tiny buttons without
//! being real child widgets.
//!
//! The host widget implements [`FieldHost`] and owns a
//! [`CompoundDrawablesController`]. It forwards:
//!
//! - pointer events to [`CompoundDrawablesController::dispatch_touch_event`]
//!   (and skips its own handling when that returns `true`),
//! - layout passes to [`CompoundDrawablesController::on_layout`],
//! - window attachment to [`CompoundDrawablesController::on_attached_to_window`],
//! - focus, enabled and status changes to
//!   [`CompoundDrawablesController::drawable_state_changed`].
//!
//! Each slot is a [`VirtualView`] with a [`Behaviour`] deciding what a click
//! does: nothing, a custom callback, clearing the text, or toggling password
//! visibility. [`AccessibilityDelegate`] exposes the slots as virtual nodes.
//!
//! Like the rest of the UI, everything here runs on one thread.

pub mod accessibility;
pub mod behaviour;
pub mod config;
pub mod controller;
pub mod drawable;
pub mod host;
pub mod layout;
pub mod virtual_view;

pub mod tests;

#[cfg(test)]
mod testing;

pub use accessibility::{A11yBridge, AccessibilityDelegate, NoopA11y};
pub use behaviour::{
    Behaviour, ButtonBehaviour, ClearButton, ClickHandler, ContentDescription, NoneBehaviour,
    PasswordButton, ToggleButton,
};
pub use config::{BehaviourKind, ConfigError, FieldAttributes, LabelRenderer};
pub use controller::{CompoundDrawablesController, Drawables};
pub use drawable::{Drawable, StatefulDrawable};
pub use host::{FieldHost, HostMetrics, StringKey, TextChange};
pub use layout::{CompoundLayout, LayoutStrategy};
pub use virtual_view::{PRESS_REFRESH_INTERVAL, VirtualView};
