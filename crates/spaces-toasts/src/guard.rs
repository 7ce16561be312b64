//! Clears every toast when the user navigates away from the view.

use spaces_common::{NavigationEvent, Navigator};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::bridge::SessionToastBridge;
use crate::display::ToastDisplay;

/// Listens for route-change starts and closes all tracked toasts.
///
/// Constructed inert. [`arm`](Self::arm) subscribes once the navigator is
/// ready; [`disarm`](Self::disarm) or dropping the guard unsubscribes.
#[derive(Default)]
pub struct NavigationGuard {
    rx: Option<broadcast::Receiver<NavigationEvent>>,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `navigator` if it is ready. Arming twice keeps the
    /// first subscription.
    pub fn arm(&mut self, navigator: &Navigator) -> bool {
        if self.rx.is_some() {
            return true;
        }
        match navigator.subscribe() {
            Some(rx) => {
                self.rx = Some(rx);
                info!("navigation guard armed");
                true
            }
            None => {
                debug!("navigator not ready, guard stays inert");
                false
            }
        }
    }

    pub fn disarm(&mut self) {
        if self.rx.take().is_some() {
            info!("navigation guard disarmed");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.rx.is_some()
    }

    /// Drains pending navigation events (non-blocking), clearing all
    /// toasts on every route-change start.
    ///
    /// Returns the number of clears performed.
    pub fn poll<D: ToastDisplay>(&mut self, bridge: &mut SessionToastBridge<D>) -> usize {
        let Some(rx) = self.rx.as_mut() else {
            return 0;
        };

        let mut clears = 0;
        let mut closed = false;
        loop {
            match rx.try_recv() {
                Ok(NavigationEvent::RouteChangeStart { url }) => {
                    info!(%url, "leaving view, clearing toasts");
                    bridge.close_all();
                    clears += 1;
                }
                Ok(NavigationEvent::RouteChangeComplete { .. }) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    // A missed event may have been an exit.
                    warn!(skipped, "navigation events lagged, clearing toasts");
                    bridge.close_all();
                    clears += 1;
                }
                Err(TryRecvError::Closed) => {
                    closed = true;
                    break;
                }
            }
        }
        if closed {
            self.rx = None;
        }
        clears
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemoryDisplay;
    use crate::options::ToastOptionsTable;
    use spaces_common::SessionState;

    fn busy_bridge() -> SessionToastBridge<MemoryDisplay> {
        let mut bridge = SessionToastBridge::new(MemoryDisplay::new(), ToastOptionsTable::default());
        bridge.apply_state(
            SessionState::idle()
                .broadcasting(true)
                .remote_share(Some("alice|1")),
        );
        for i in 0..12 {
            bridge.participant_joined(&format!("p{i}|{i}"));
        }
        bridge
    }

    #[test]
    fn inert_until_armed() {
        let nav = Navigator::default();
        nav.mark_ready();
        let mut guard = NavigationGuard::new();
        let mut bridge = busy_bridge();

        nav.start_route_change("/elsewhere");
        assert_eq!(guard.poll(&mut bridge), 0);
        assert!(!bridge.singletons().is_empty());
    }

    #[test]
    fn arm_waits_for_ready_navigator() {
        let nav = Navigator::default();
        let mut guard = NavigationGuard::new();

        assert!(!guard.arm(&nav));
        assert!(!guard.is_armed());

        nav.mark_ready();
        assert!(guard.arm(&nav));
        assert!(guard.is_armed());
    }

    #[test]
    fn arm_subscribes_once() {
        let nav = Navigator::default();
        nav.mark_ready();
        let mut guard = NavigationGuard::new();

        guard.arm(&nav);
        guard.arm(&nav);
        assert_eq!(nav.listener_count(), 1);
    }

    #[test]
    fn route_change_start_clears_everything() {
        let nav = Navigator::default();
        nav.mark_ready();
        let mut guard = NavigationGuard::new();
        guard.arm(&nav);
        let mut bridge = busy_bridge();

        nav.start_route_change("/spaces/next");
        assert_eq!(guard.poll(&mut bridge), 1);

        assert!(bridge.singletons().is_empty());
        assert!(bridge.participants().is_empty());
        assert_eq!(bridge.display().open_count(), 0);
    }

    #[test]
    fn route_change_complete_is_ignored() {
        let nav = Navigator::default();
        nav.mark_ready();
        let mut guard = NavigationGuard::new();
        guard.arm(&nav);
        let mut bridge = busy_bridge();

        nav.complete_route_change("/spaces/next");
        assert_eq!(guard.poll(&mut bridge), 0);
        assert!(!bridge.participants().is_empty());
    }

    #[test]
    fn disarm_unsubscribes() {
        let nav = Navigator::default();
        nav.mark_ready();
        let mut guard = NavigationGuard::new();
        guard.arm(&nav);
        guard.disarm();

        assert_eq!(nav.listener_count(), 0);
        assert_eq!(nav.start_route_change("/gone"), 0);

        let mut bridge = busy_bridge();
        assert_eq!(guard.poll(&mut bridge), 0);
        assert!(!bridge.singletons().is_empty());
    }

    #[test]
    fn drop_unsubscribes() {
        let nav = Navigator::default();
        nav.mark_ready();
        {
            let mut guard = NavigationGuard::new();
            guard.arm(&nav);
            assert_eq!(nav.listener_count(), 1);
        }
        assert_eq!(nav.listener_count(), 0);
    }
}
