//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns are in play:
//!
//! - **Stateless, props-based**: `BadgeBar` receives the current selection
//!   each frame and only caches hit-test spans.
//! - **Stateful, event-driven**: `CommandBar` owns its text buffer and
//!   cursor; `ResultListState` owns the list selection and scroll offset,
//!   with `ResultList` as the per-frame render wrapper.
//!
//! Components receive external data as props rather than reading global
//! state, which keeps dependencies explicit and the components testable
//! with `TestBackend`. Each component file co-locates its state type, event
//! type, rendering, event handling, and tests.

pub mod badge_bar;
pub mod command_bar;
pub mod result_list;

pub use badge_bar::{BadgeBar, BadgeBarState};
pub use command_bar::{CommandBar, CommandEvent};
pub use result_list::{ResultList, ResultListState};
