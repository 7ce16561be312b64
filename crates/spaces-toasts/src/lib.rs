//! Session toast lifecycle.
//!
//! Turns session state changes, participant events and navigation into
//! transient on-screen toasts. Rendering is delegated to a [`ToastDisplay`];
//! this crate only decides which toasts exist and when they must go.
//!
//! - [`SingletonToasts`]: at most one live toast per [`ToastCategory`].
//! - [`ParticipantToastQueue`]: bounded FIFO of join/leave toasts.
//! - [`SessionToastBridge`]: diffs [`SessionState`] snapshots and routes
//!   session events to the two controllers.
//! - [`NavigationGuard`]: clears everything when the user leaves the view.
//!
//! [`SessionState`]: spaces_common::SessionState

pub mod bridge;
pub mod content;
pub mod display;
pub mod guard;
pub mod options;
pub mod queue;
pub mod singleton;

pub use bridge::{ScreenShareState, SessionCommand, SessionToastBridge};
pub use content::{ToastAction, ToastContent};
pub use display::{DisplayCall, MemoryDisplay, ShownToast, ToastDisplay, ToastId};
pub use guard::NavigationGuard;
pub use options::{ToastKind, ToastOptions, ToastOptionsTable};
pub use queue::{ParticipantToastQueue, QueuedToast, PARTICIPANT_TOAST_CAPACITY};
pub use singleton::{SingletonToasts, ToastCategory};
