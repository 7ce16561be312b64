//! The rendering capability toasts are shown through.

mod memory;

pub use memory::{DisplayCall, MemoryDisplay, ShownToast, ToastId};

use std::fmt::Debug;

use crate::content::ToastContent;
use crate::options::ToastOptions;

/// Draws and removes toasts on screen.
///
/// Implementations may close a toast on their own (for example when its
/// duration elapses); callers discover that through [`is_active`].
///
/// [`is_active`]: ToastDisplay::is_active
pub trait ToastDisplay {
    /// Opaque reference to one shown toast.
    type Handle: Clone + Eq + Debug;

    fn show(&mut self, content: ToastContent, options: &ToastOptions) -> Self::Handle;

    /// Closing a handle that is unknown or already closed is a no-op.
    fn close(&mut self, handle: &Self::Handle);

    fn is_active(&self, handle: &Self::Handle) -> bool;
}
