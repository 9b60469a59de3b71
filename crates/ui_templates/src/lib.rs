//! Pre-built page templates composed from `ui_kit` components.
//!
//! Templates own no styling of their own; every surface goes through `ui_kit` primitives and the
//! shared `data-ui-*` contract. [`SettingsTemplate`] and [`ShowcasePage`] demonstrate URL-bound
//! tab groups, including one whose identities are numbers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod contact_form;
mod settings;
mod showcase;

pub use contact_form::{
    ContactDraft, ContactField, ContactFormTemplate, FieldIssue, MESSAGE_MAX_CHARS,
};
pub use settings::{settings_sections, SettingsTemplate, DEFAULT_SECTION_PARAM};
pub use showcase::{parse_tab_set, ShowcasePage, STEP_PARAM};
