use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Page-lifetime cancellation flag.
///
/// Stores check [`MountToken::is_cancelled`] after every fetch and discard
/// results that complete once the guard has been dropped.
#[derive(Debug, Default)]
pub struct MountGuard {
    cancelled: Arc<AtomicBool>,
}

impl MountGuard {
    /// Marks a screen as mounted.
    #[must_use]
    pub fn mount() -> Self {
        Self::default()
    }

    /// Returns a token observing this guard.
    #[must_use]
    pub fn token(&self) -> MountToken {
        MountToken {
            cancelled: self.cancelled.clone(),
        }
    }

    /// Unmounts explicitly. Equivalent to dropping the guard.
    pub fn unmount(self) {}
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// Cheap observer of a [`MountGuard`].
#[derive(Debug, Clone)]
pub struct MountToken {
    cancelled: Arc<AtomicBool>,
}

impl MountToken {
    /// Whether the owning guard has been dropped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Result of a store load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fresh data was applied.
    Loaded,
    /// The screen was unmounted before the fetch completed; nothing changed.
    Discarded,
    /// The fetch failed and the store was reset to empty.
    Reset {
        /// Failure message.
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::MountGuard;

    #[test]
    fn dropping_the_guard_cancels_its_tokens() {
        let guard = MountGuard::mount();
        let token = guard.token();
        assert!(!token.is_cancelled());

        guard.unmount();
        assert!(token.is_cancelled());
    }
}
