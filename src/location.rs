use tokio::sync::watch;

use crate::nav::Location;

/// Process-wide current-location state.
///
/// Owned by the app; everyone else reads through a watch subscription that
/// starts with a defined snapshot. Navigation writes only propagate when the
/// location actually changed.
#[derive(Debug)]
pub struct LocationStore {
    tx: watch::Sender<Location>,
}

impl LocationStore {
    pub fn new(initial: Location) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> Location {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.tx.subscribe()
    }

    /// Returns true when the location changed (and subscribers were woken).
    pub fn navigate(&self, next: Location) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next.clone();
            true
        })
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
