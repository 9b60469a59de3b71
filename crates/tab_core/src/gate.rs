//! Visibility gate for tab panels.

use crate::channel::TabChannel;
use crate::error::TabsError;
use crate::identity::TabIdentity;

/// Visibility check bound to one panel identity.
///
/// A gate renders its payload only while its identity is the active one. Evaluating a gate with
/// no channel is a wiring mistake and yields [`TabsError::MissingController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGate {
    identity: TabIdentity,
}

impl TabGate {
    /// Creates a gate for the panel declared with `identity`.
    pub fn new(identity: impl Into<TabIdentity>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    /// Returns the panel identity.
    pub fn identity(&self) -> &TabIdentity {
        &self.identity
    }

    /// Returns whether the panel is visible for `active`.
    pub fn matches(&self, active: &TabIdentity) -> bool {
        self.identity == *active
    }

    /// Returns whether the panel is visible on `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MissingController`] when `channel` is `None`, and
    /// [`TabsError::ControllerDropped`] when the channel's controller is gone.
    pub fn evaluate(&self, channel: Option<&TabChannel>) -> Result<bool, TabsError> {
        let channel = channel.ok_or_else(|| TabsError::MissingController {
            panel: self.identity.clone(),
        })?;
        channel.is_active(&self.identity)
    }

    /// Returns `payload` when the panel is visible on `channel`, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::evaluate`].
    pub fn render<'a, T: ?Sized>(
        &self,
        channel: Option<&TabChannel>,
        payload: &'a T,
    ) -> Result<Option<&'a T>, TabsError> {
        Ok(self.evaluate(channel)?.then_some(payload))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{TabController, TabDescriptor};

    #[test]
    fn panel_without_controller_is_a_configuration_error() {
        let gate = TabGate::new(4);
        assert_eq!(
            gate.evaluate(None),
            Err(TabsError::MissingController {
                panel: TabIdentity::from("4")
            })
        );
        assert_eq!(
            gate.render(None, "payload").unwrap_err().to_string(),
            "tab panel `4` evaluated outside of a tab controller scope"
        );
    }

    #[test]
    fn render_returns_payload_only_for_active_panel() {
        let controller = TabController::builder(vec![
            TabDescriptor::new("a", "A"),
            TabDescriptor::new("b", "B"),
        ])
        .build();
        let channel = controller.channel();

        assert_eq!(
            TabGate::new("a").render(Some(&channel), "alpha body"),
            Ok(Some("alpha body"))
        );
        assert_eq!(TabGate::new("b").render(Some(&channel), "beta body"), Ok(None));

        controller.select("b");
        assert_eq!(TabGate::new("a").render(Some(&channel), "alpha body"), Ok(None));
        assert_eq!(
            TabGate::new("b").render(Some(&channel), "beta body"),
            Ok(Some("beta body"))
        );
    }

    #[test]
    fn gate_on_dropped_controller_reports_it() {
        let channel = TabController::builder(Vec::new()).build().channel();
        assert_eq!(
            TabGate::new("a").evaluate(Some(&channel)),
            Err(TabsError::ControllerDropped)
        );
    }

    #[test]
    fn matches_compares_canonical_identities() {
        assert!(TabGate::new("10").matches(&TabIdentity::from(10_u8)));
        assert!(!TabGate::new("10").matches(&TabIdentity::NONE));
    }
}
