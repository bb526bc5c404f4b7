//! # Adorn core
//!
//! Shared vocabulary for interactive text-field decorations:
//!
//! - geometry (`Rect`, `Size`, `PaddingValues`) and pointer input,
//! - layout direction and the four decoration slots (`Slot`,
//!   `RelativeSlot`), resolved per call so RTL changes are honored,
//! - view-state sets: `ViewStates` flags, the memoizing `StateCache`, and the
//!   host-scoped `CustomStateBag`,
//! - `FieldStatus`, the persisted error/success pair,
//! - `Signal<T>`, the synchronous notification channel hosts use for text
//!   changes,
//! - semantics nodes for accessibility backends.
//!
//! State sets are signed id vectors shared as `Rc<[StateId]>`:
//!
//! ```rust
//! use adorn_core::*;
//!
//! let mut cache = StateCache::new();
//! let a = cache.state_set(ViewStates::ENABLED | ViewStates::PRESSED, &[]);
//! let b = cache.state_set(ViewStates::ENABLED | ViewStates::PRESSED, &[]);
//! assert!(std::rc::Rc::ptr_eq(&a, &b));
//! assert!(has_state(&a, state_id::PRESSED));
//! ```
//!
//! Everything here is single-threaded (UI thread only).

pub mod color;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod semantics;
pub mod signal;
pub mod state_bag;
pub mod states;
pub mod status;

pub use color::*;
pub use direction::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use semantics::*;
pub use signal::*;
pub use state_bag::*;
pub use states::*;
pub use status::*;
