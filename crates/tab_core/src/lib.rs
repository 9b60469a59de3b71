//! Headless tab-navigation state machine.
//!
//! A [`TabController`] owns which tab of one tab group is active, keeps that identity in sync
//! with an optional URL query parameter, and republishes changes to subscribers through a
//! [`TabChannel`]. A [`TabGate`] is the visibility check each panel runs against the channel.
//! Nothing here renders markup; `ui_kit` layers Leptos components on top.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod channel;
mod controller;
mod error;
mod gate;
mod identity;

pub use channel::{Subscription, TabChannel};
pub use controller::{NavigationBinding, TabController, TabControllerBuilder};
pub use error::TabsError;
pub use gate::TabGate;
pub use identity::{TabDescriptor, TabHeader, TabIdentity};
