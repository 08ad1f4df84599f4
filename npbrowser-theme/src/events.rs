// SPDX-License-Identifier: LGPL-3.0-only

//! Theme change notifications.

use crate::theme::ThemeType;
use crate::window::WindowId;

/// Something observers of the theme manager may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The resolved theme of `window_id` changed (or was resolved for the first time).
    Changed {
        /// The affected window.
        window_id: WindowId,
        /// Its new theme type.
        theme_type: ThemeType,
    },
}

/// A callback invoked for every [ThemeEvent].
pub type ThemeObserver = Box<dyn Fn(&ThemeEvent) + Send + Sync>;

/// Handle returned by [ThemeEvents::subscribe], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A typed event emitter for theme changes.
///
/// Observers are called synchronously, in subscription order.
#[derive(Default)]
pub struct ThemeEvents {
    observers: Vec<(SubscriptionId, ThemeObserver)>,
    next_id: u64,
}

impl ThemeEvents {
    /// Create an emitter without observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl Fn(&ThemeEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Deliver `event` to every observer.
    pub fn emit(&self, event: &ThemeEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ThemeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEvents")
            .field("observers", &self.observers.len())
            .finish()
    }
}
