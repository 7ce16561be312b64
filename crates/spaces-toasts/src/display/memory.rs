//! In-memory display that records every call and simulates auto-close.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ToastDisplay;
use crate::content::ToastContent;
use crate::options::{ToastKind, ToastOptions};

/// Handle issued by [`MemoryDisplay`]; increases with every shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// A display adapter call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Show {
        id: ToastId,
        kind: ToastKind,
        text: String,
    },
    Close(ToastId),
}

#[derive(Debug, Clone)]
pub struct ShownToast {
    pub id: ToastId,
    pub content: ToastContent,
    pub options: ToastOptions,
    /// Time left before the toast closes itself; `None` when persistent.
    pub remaining: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct MemoryDisplay {
    next_id: u64,
    open: BTreeMap<ToastId, ShownToast>,
    calls: Vec<DisplayCall>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes a toast as if the user dismissed it or it timed out.
    ///
    /// Not recorded as a display call.
    pub fn expire(&mut self, id: ToastId) -> bool {
        let removed = self.open.remove(&id).is_some();
        if removed {
            debug!(%id, "toast closed on its own");
        }
        removed
    }

    /// Advances the clock, closing every timed toast whose duration ran out.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ToastId> {
        let mut expired = Vec::new();
        for toast in self.open.values_mut() {
            if let Some(remaining) = toast.remaining.as_mut() {
                *remaining = remaining.saturating_sub(elapsed);
                if remaining.is_zero() {
                    expired.push(toast.id);
                }
            }
        }
        for id in &expired {
            self.expire(*id);
        }
        expired
    }

    pub fn open_toasts(&self) -> impl Iterator<Item = &ShownToast> {
        self.open.values()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn get(&self, id: ToastId) -> Option<&ShownToast> {
        self.open.get(&id)
    }

    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    pub fn show_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Show { .. }))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ToastDisplay for MemoryDisplay {
    type Handle = ToastId;

    fn show(&mut self, content: ToastContent, options: &ToastOptions) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        debug!(%id, kind = options.kind.id(), text = %content.text, "show toast");

        self.calls.push(DisplayCall::Show {
            id,
            kind: options.kind,
            text: content.text.clone(),
        });
        self.open.insert(
            id,
            ShownToast {
                id,
                content,
                options: options.clone(),
                remaining: options.duration,
            },
        );
        id
    }

    fn close(&mut self, handle: &ToastId) {
        self.calls.push(DisplayCall::Close(*handle));
        if self.open.remove(handle).is_some() {
            debug!(id = %handle, "close toast");
        }
    }

    fn is_active(&self, handle: &ToastId) -> bool {
        self.open.contains_key(handle)
    }
}
