pub use crate::color::Color;
pub use crate::direction::{RelativeSlot, Slot, TextDirection, text_direction, with_text_direction};
pub use crate::geometry::{PaddingValues, Rect, Size, Vec2};
pub use crate::input::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerKind};
pub use crate::scene::{Scene, SceneNode};
pub use crate::semantics::{A11yAction, NodeId, Role, SemNode};
pub use crate::signal::{Signal, SubId, signal};
pub use crate::state_bag::{CustomStateBag, CustomStates};
pub use crate::states::{StateCache, StateId, StateSet, ViewStates, dump_states, has_state, state_id};
pub use crate::status::FieldStatus;
