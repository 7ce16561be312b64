//! Bounded queue of participant join/leave toasts.

use std::collections::VecDeque;

use tracing::debug;

use crate::content::ToastContent;
use crate::display::ToastDisplay;
use crate::options::ToastOptions;

/// Maximum participant toasts tracked at once.
pub const PARTICIPANT_TOAST_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedToast<H> {
    pub handle: H,
    /// Insertion order, unique for the lifetime of the queue.
    pub seq: u64,
}

/// Insertion-ordered participant toasts, oldest first.
///
/// Entries whose toast already closed are pruned before every push; once
/// the queue is full the oldest entry is closed to make room.
#[derive(Debug)]
pub struct ParticipantToastQueue<H> {
    items: VecDeque<QueuedToast<H>>,
    next_seq: u64,
}

impl<H: Clone + Eq + std::fmt::Debug> ParticipantToastQueue<H> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(PARTICIPANT_TOAST_CAPACITY),
            next_seq: 0,
        }
    }

    pub fn push<D>(&mut self, display: &mut D, content: ToastContent, options: &ToastOptions) -> H
    where
        D: ToastDisplay<Handle = H>,
    {
        self.prune(display);

        if self.items.len() >= PARTICIPANT_TOAST_CAPACITY {
            if let Some(oldest) = self.items.pop_front() {
                debug!(seq = oldest.seq, "evicting oldest participant toast");
                display.close(&oldest.handle);
            }
        }

        let handle = display.show(content, options);
        self.items.push_back(QueuedToast {
            handle: handle.clone(),
            seq: self.next_seq,
        });
        self.next_seq += 1;
        handle
    }

    /// Drops entries whose toast is no longer on screen.
    pub fn prune<D>(&mut self, display: &D) -> usize
    where
        D: ToastDisplay<Handle = H>,
    {
        let before = self.items.len();
        self.items.retain(|t| display.is_active(&t.handle));
        let pruned = before - self.items.len();
        if pruned > 0 {
            debug!(pruned, "pruned closed participant toasts");
        }
        pruned
    }

    /// Closes every tracked toast by handle and empties the queue.
    pub fn close_all<D>(&mut self, display: &mut D) -> usize
    where
        D: ToastDisplay<Handle = H>,
    {
        let count = self.items.len();
        for toast in self.items.drain(..) {
            display.close(&toast.handle);
        }
        count
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedToast<H>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<H: Clone + Eq + std::fmt::Debug> Default for ParticipantToastQueue<H> {
    fn default() -> Self {
        Self::new()
    }
}
