//! Browser (`wasm32`) implementation of the [`nav_host`] location contract.
//!
//! [`BrowserLocation`] reads query parameters from `window.location` and writes them back with
//! `history.replaceState`, so controller-initiated changes never create new history entries.
//! Back/forward navigation is observed by the caller through the window `popstate` event.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod location;

pub use location::BrowserLocation;
