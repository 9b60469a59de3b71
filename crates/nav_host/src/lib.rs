//! Navigation-location contracts shared by tab controllers and host adapters.
//!
//! This crate is the boundary between stateful UI controllers and whatever owns the navigable
//! location (a browser window, a router, or a test harness). It exposes the
//! [`NavigationLocation`] trait, query-string helpers, and in-process adapters, while the
//! concrete browser adapter lives in `nav_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod location;
pub mod memory;
pub mod query;

pub use location::{LocationError, NavigationLocation, NoopLocation};
pub use memory::{ListenerId, MemoryLocation};
pub use query::{read_query_param, replace_query_param};
