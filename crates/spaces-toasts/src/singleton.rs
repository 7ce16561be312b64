//! Toasts that mirror persistent session state, one per category.

use std::collections::HashMap;

use tracing::debug;

use crate::content::ToastContent;
use crate::display::ToastDisplay;
use crate::options::ToastOptions;

/// Persistent-state toast slots. Each holds at most one live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastCategory {
    LocalScreenShare,
    RemoteScreenShare,
    Broadcasting,
}

impl ToastCategory {
    pub const ALL: [ToastCategory; 3] = [
        Self::LocalScreenShare,
        Self::RemoteScreenShare,
        Self::Broadcasting,
    ];
}

/// Tracks the live toast of each [`ToastCategory`].
#[derive(Debug)]
pub struct SingletonToasts<H> {
    tracked: HashMap<ToastCategory, H>,
}

impl<H: Clone + Eq + std::fmt::Debug> SingletonToasts<H> {
    pub fn new() -> Self {
        Self {
            tracked: HashMap::new(),
        }
    }

    /// Shows `content` under `category` unless a live toast already holds
    /// the slot. A stale record (toast gone from screen) is replaced.
    ///
    /// Returns `true` if a new toast was shown.
    pub fn show<D>(
        &mut self,
        display: &mut D,
        category: ToastCategory,
        content: ToastContent,
        options: &ToastOptions,
    ) -> bool
    where
        D: ToastDisplay<Handle = H>,
    {
        if let Some(handle) = self.tracked.get(&category) {
            if display.is_active(handle) {
                debug!(?category, "toast already showing");
                return false;
            }
        }

        let handle = display.show(content, options);
        self.tracked.insert(category, handle);
        true
    }

    /// Closes the toast tracked under `category`, if any.
    pub fn hide<D>(&mut self, display: &mut D, category: ToastCategory) -> bool
    where
        D: ToastDisplay<Handle = H>,
    {
        match self.tracked.remove(&category) {
            Some(handle) => {
                display.close(&handle);
                true
            }
            None => false,
        }
    }

    pub fn close_all<D>(&mut self, display: &mut D) -> usize
    where
        D: ToastDisplay<Handle = H>,
    {
        ToastCategory::ALL
            .into_iter()
            .filter(|category| self.hide(display, *category))
            .count()
    }

    pub fn handle(&self, category: ToastCategory) -> Option<&H> {
        self.tracked.get(&category)
    }

    pub fn is_tracked(&self, category: ToastCategory) -> bool {
        self.tracked.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}

impl<H: Clone + Eq + std::fmt::Debug> Default for SingletonToasts<H> {
    fn default() -> Self {
        Self::new()
    }
}
