//! Tab identities, descriptors, and header render models.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentity {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawIdentity> for TabIdentity {
    fn from(raw: RawIdentity) -> Self {
        match raw {
            RawIdentity::Text(text) => Self(text),
            RawIdentity::Signed(value) => value.into(),
            RawIdentity::Unsigned(value) => value.into(),
        }
    }
}

/// Identity of one tab within a tab group.
///
/// Numeric and textual identities are canonicalized to their string form on construction, so
/// `TabIdentity::from(2)` and `TabIdentity::from("2")` are the same tab. The empty string is
/// reserved as [`TabIdentity::NONE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawIdentity", into = "String")]
pub struct TabIdentity(String);

impl TabIdentity {
    /// Sentinel identity meaning "no tab selected".
    pub const NONE: TabIdentity = TabIdentity(String::new());

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the [`TabIdentity::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TabIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TabIdentity> for String {
    fn from(identity: TabIdentity) -> Self {
        identity.0
    }
}

impl From<String> for TabIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for TabIdentity {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&str> for TabIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<char> for TabIdentity {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<&TabIdentity> for TabIdentity {
    fn from(value: &TabIdentity) -> Self {
        value.clone()
    }
}

macro_rules! identity_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TabIdentity {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

identity_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PartialEq<str> for TabIdentity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TabIdentity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One entry of the authoritative, ordered tab list supplied by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Identity, unique within the owning tab group.
    pub identity: TabIdentity,
    /// Header label.
    pub label: String,
}

impl TabDescriptor {
    /// Creates a descriptor from any identity-convertible value.
    pub fn new(identity: impl Into<TabIdentity>, label: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            label: label.into(),
        }
    }
}

/// Render model for one clickable tab header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    /// Identity selected when the header is activated.
    pub identity: TabIdentity,
    /// Header label.
    pub label: String,
    /// Whether this header's tab is the active one.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_and_string_forms_are_the_same_identity() {
        assert_eq!(TabIdentity::from(2), TabIdentity::from("2"));
        assert_eq!(TabIdentity::from(2_u64), TabIdentity::from("2".to_string()));
        assert_ne!(TabIdentity::from(2), TabIdentity::from("02"));
        assert_eq!(TabIdentity::from(-7), "-7");
    }

    #[test]
    fn none_sentinel_is_the_empty_string() {
        assert!(TabIdentity::NONE.is_none());
        assert_eq!(TabIdentity::default(), TabIdentity::NONE);
        assert_eq!(TabIdentity::from(""), TabIdentity::NONE);
        assert!(!TabIdentity::from(0).is_none());
    }

    #[test]
    fn descriptors_load_from_json_with_mixed_identity_types() {
        let tabs: Vec<TabDescriptor> = serde_json::from_str(
            r#"[
                {"identity": "overview", "label": "Overview"},
                {"identity": 2, "label": "Second"},
                {"identity": -1, "label": "Archive"}
            ]"#,
        )
        .expect("parse descriptors");

        assert_eq!(
            tabs,
            vec![
                TabDescriptor::new("overview", "Overview"),
                TabDescriptor::new("2", "Second"),
                TabDescriptor::new(-1, "Archive"),
            ]
        );
    }

    #[test]
    fn identities_serialize_as_strings() {
        let json = serde_json::to_string(&TabDescriptor::new(3, "Three")).expect("serialize");
        assert_eq!(json, r#"{"identity":"3","label":"Three"}"#);
    }
}
