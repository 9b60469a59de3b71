//! Errors for structural misuse of the tab API.

use thiserror::Error;

use crate::identity::TabIdentity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration errors raised when a tab group is wired incorrectly.
///
/// Data conditions (unknown identities, failed location writes) are tolerated and never show up
/// here.
pub enum TabsError {
    /// A panel was evaluated without an enclosing tab controller.
    #[error("tab panel `{panel}` evaluated outside of a tab controller scope")]
    MissingController {
        /// Identity the panel was declared with.
        panel: TabIdentity,
    },
    /// The controller behind a channel no longer exists.
    #[error("tab controller dropped while a channel to it was still in use")]
    ControllerDropped,
}
