//! Module implementing the keyboard notification lifecycle.
//!
//! The platform delivers keyboard show/hide notifications globally;
//! the editor screen is only interested in them while it is on screen.
//! Rather than pairing manual subscribe/unsubscribe calls, the
//! subscription is a scoped resource: acquired when the screen appears
//! and released when the guard goes out of scope.

/// Source of keyboard show/hide notifications.
///
/// Implemented by the hosting layer over its platform's
/// notification machinery.
pub trait KeyboardNotifications {
    /// Start delivering keyboard notifications.
    fn subscribe(&mut self);
    /// Stop delivering keyboard notifications.
    fn unsubscribe(&mut self);
}


/// Scoped subscription to keyboard notifications.
///
/// Subscribes upon creation and unsubscribes when dropped.
#[must_use = "unused subscription which would unsubscribe immediately"]
pub struct Subscription<'n, N: KeyboardNotifications + 'n> {
    notifications: &'n mut N,
}

impl<'n, N: KeyboardNotifications + 'n> Subscription<'n, N> {
    /// Subscribe to keyboard notifications for as long as
    /// the returned guard lives.
    pub fn new(notifications: &'n mut N) -> Self {
        notifications.subscribe();
        Subscription{notifications: notifications}
    }
}

impl<'n, N: KeyboardNotifications + 'n> Drop for Subscription<'n, N> {
    fn drop(&mut self) {
        self.notifications.unsubscribe();
    }
}


#[cfg(test)]
mod tests {
    use super::{KeyboardNotifications, Subscription};

    #[derive(Default)]
    struct Counter {
        subscribes: usize,
        unsubscribes: usize,
    }
    impl KeyboardNotifications for Counter {
        fn subscribe(&mut self) { self.subscribes += 1; }
        fn unsubscribe(&mut self) { self.unsubscribes += 1; }
    }

    #[test]
    fn subscription_is_scoped() {
        let mut notifications = Counter::default();
        {
            let _subscription = Subscription::new(&mut notifications);
        }
        assert_eq!(1, notifications.subscribes);
        assert_eq!(1, notifications.unsubscribes);
    }

    #[test]
    fn subscription_lasts_while_held() {
        let mut notifications = Counter::default();
        let subscription = Subscription::new(&mut notifications);
        assert_eq!(0, subscription.notifications.unsubscribes);
        drop(subscription);
        assert_eq!(1, notifications.unsubscribes);
    }
}
