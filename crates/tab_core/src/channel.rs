//! Read channel from one controller to any number of panels.

use std::{
    fmt,
    rc::{Rc, Weak},
};

use crate::controller::ControllerInner;
use crate::error::TabsError;
use crate::identity::TabIdentity;

/// Non-owning handle exposing `{ active, select }` of one [`crate::TabController`].
///
/// Panels and header rows hold channels rather than the controller itself, so dropping the
/// controller ends the tab group even while channels are still around.
#[derive(Clone)]
pub struct TabChannel {
    inner: Weak<ControllerInner>,
}

impl fmt::Debug for TabChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabChannel")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl TabChannel {
    pub(crate) fn new(inner: Weak<ControllerInner>) -> Self {
        Self { inner }
    }

    fn controller(&self) -> Result<Rc<ControllerInner>, TabsError> {
        self.inner.upgrade().ok_or(TabsError::ControllerDropped)
    }

    /// Returns whether the controller behind this channel still exists.
    pub fn is_connected(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Returns the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::ControllerDropped`] when the controller no longer exists.
    pub fn active(&self) -> Result<TabIdentity, TabsError> {
        Ok(self.controller()?.active())
    }

    /// Returns whether `identity` is the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::ControllerDropped`] when the controller no longer exists.
    pub fn is_active(&self, identity: &TabIdentity) -> Result<bool, TabsError> {
        Ok(self.controller()?.active() == *identity)
    }

    /// Selects `identity` on the controller, exactly like [`crate::TabController::select`].
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::ControllerDropped`] when the controller no longer exists.
    pub fn select(&self, identity: impl Into<TabIdentity>) -> Result<(), TabsError> {
        self.controller()?.select(identity.into());
        Ok(())
    }

    /// Subscribes to active-identity changes until the returned [`Subscription`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::ControllerDropped`] when the controller no longer exists.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&TabIdentity) + 'static,
    ) -> Result<Subscription, TabsError> {
        Ok(self.controller()?.subscribe(Rc::new(subscriber)))
    }
}

/// Live registration of a change subscriber. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<ControllerInner>,
}

impl Subscription {
    pub(crate) fn new(id: u64, inner: Weak<ControllerInner>) -> Self {
        Self { id, inner }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{TabController, TabDescriptor};

    fn controller() -> TabController {
        TabController::builder(vec![
            TabDescriptor::new("inbox", "Inbox"),
            TabDescriptor::new("sent", "Sent"),
        ])
        .build()
    }

    #[test]
    fn every_subscriber_sees_the_new_identity() {
        let controller = controller();
        let channel = controller.channel();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscriptions: Vec<Subscription> = (0..3)
            .map(|panel| {
                let sink = Rc::clone(&seen);
                channel
                    .subscribe(move |id| sink.borrow_mut().push(format!("{panel}:{id}")))
                    .expect("subscribe")
            })
            .collect();

        channel.select("sent").expect("select");

        assert_eq!(
            *seen.borrow(),
            vec!["0:sent".to_string(), "1:sent".to_string(), "2:sent".to_string()]
        );
        drop(subscriptions);
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let controller = controller();
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        let subscription = controller.subscribe(move |_| *sink.borrow_mut() += 1);

        controller.select("sent");
        drop(subscription);
        controller.select("inbox");

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn subscriber_may_read_the_channel_while_notified() {
        let controller = controller();
        let channel = controller.channel();
        let reader = channel.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let _subscription = channel
            .subscribe(move |_| *sink.borrow_mut() = reader.active().ok())
            .expect("subscribe");

        controller.select("sent");

        assert_eq!(*seen.borrow(), Some(TabIdentity::from("sent")));
    }

    #[test]
    fn channel_reports_dropped_controller() {
        let channel = controller().channel();
        assert!(!channel.is_connected());
        assert_eq!(channel.active(), Err(TabsError::ControllerDropped));
        assert_eq!(channel.select("sent"), Err(TabsError::ControllerDropped));
        assert!(channel.subscribe(|_| {}).is_err());
    }

    #[test]
    fn subscription_outliving_controller_drops_quietly() {
        let controller = controller();
        let subscription = controller.subscribe(|_| {});
        drop(controller);
        drop(subscription);
    }
}
