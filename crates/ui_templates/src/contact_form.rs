//! Contact form template with field-level validation.

use std::fmt;

use leptos::ev::SubmitEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ui_kit::prelude::*;

/// Longest accepted message, in characters.
pub const MESSAGE_MAX_CHARS: usize = 2000;
const NAME_MAX_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fields of [`ContactDraft`].
pub enum ContactField {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// One validation problem on a [`ContactDraft`].
pub enum FieldIssue {
    /// The field is blank.
    #[error("{0} is required")]
    Required(ContactField),
    /// The email field is not a plausible address.
    #[error("email address looks invalid")]
    InvalidEmail,
    /// The field exceeds its length limit.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Offending field.
        field: ContactField,
        /// Limit in characters.
        max: usize,
    },
}

impl FieldIssue {
    /// Returns the field this issue belongs to.
    pub fn field(&self) -> ContactField {
        match self {
            Self::Required(field) | Self::TooLong { field, .. } => *field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Editable contents of the contact form.
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactDraft {
    /// Checks every field and returns all problems found.
    ///
    /// # Errors
    ///
    /// Returns the list of [`FieldIssue`]s when any field is invalid.
    pub fn validate(&self) -> Result<(), Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            issues.push(FieldIssue::Required(ContactField::Name));
        } else if name.chars().count() > NAME_MAX_CHARS {
            issues.push(FieldIssue::TooLong {
                field: ContactField::Name,
                max: NAME_MAX_CHARS,
            });
        }

        let email = self.email.trim();
        if email.is_empty() {
            issues.push(FieldIssue::Required(ContactField::Email));
        } else if !looks_like_email(email) {
            issues.push(FieldIssue::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            issues.push(FieldIssue::Required(ContactField::Message));
        } else if message.chars().count() > MESSAGE_MAX_CHARS {
            issues.push(FieldIssue::TooLong {
                field: ContactField::Message,
                max: MESSAGE_MAX_CHARS,
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[component]
/// Contact form card: name, email, and message with inline validation.
pub fn ContactFormTemplate(
    /// Card heading.
    #[prop(default = "Contact us")]
    title: &'static str,
    /// Previously saved draft, as produced by `on_draft_change`.
    #[prop(optional)]
    restored_draft: Option<Value>,
    /// Receives a JSON snapshot of the draft after every edit.
    #[prop(optional)]
    on_draft_change: Option<Callback<Value>>,
    /// Receives the draft once it passes validation.
    #[prop(optional)]
    on_submit: Option<Callback<ContactDraft>>,
) -> impl IntoView {
    let draft = create_rw_signal(ContactDraft::default());
    let issues = create_rw_signal(Vec::<FieldIssue>::new());
    let sent = create_rw_signal(false);

    if let Some(restored) = restored_draft {
        match serde_json::from_value::<ContactDraft>(restored) {
            Ok(restored) => draft.set(restored),
            Err(err) => logging::warn!("contact draft restore failed: {err}"),
        }
    }

    let edit = move |update: fn(&mut ContactDraft, String)| {
        Callback::new(move |value: String| {
            draft.update(|draft| update(draft, value));
            issues.set(Vec::new());
            sent.set(false);
            if let Some(on_draft_change) = on_draft_change {
                match serde_json::to_value(draft.get_untracked()) {
                    Ok(snapshot) => on_draft_change.call(snapshot),
                    Err(err) => logging::warn!("contact draft serialize failed: {err}"),
                }
            }
        })
    };
    let has_issue = move |field: ContactField| {
        Signal::derive(move || issues.with(|issues| issues.iter().any(|i| i.field() == field)))
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match current.validate() {
            Ok(()) => {
                sent.set(true);
                if let Some(on_submit) = on_submit {
                    on_submit.call(current);
                }
            }
            Err(found) => issues.set(found),
        }
    };

    view! {
        <Card title>
            <form data-ui-slot="contact-form" on:submit=submit novalidate=true>
                <Stack gap=LayoutGap::Sm>
                    <TextField
                        name="name"
                        placeholder="Your name"
                        aria_label="Name"
                        autocomplete="name"
                        value=Signal::derive(move || draft.with(|d| d.name.clone()))
                        invalid=has_issue(ContactField::Name)
                        on_input=edit(|draft, value| draft.name = value)
                    />
                    <TextField
                        name="email"
                        placeholder="you@example.com"
                        aria_label="Email"
                        autocomplete="email"
                        input_type="email"
                        value=Signal::derive(move || draft.with(|d| d.email.clone()))
                        invalid=has_issue(ContactField::Email)
                        on_input=edit(|draft, value| draft.email = value)
                    />
                    <TextField
                        name="message"
                        placeholder="How can we help?"
                        aria_label="Message"
                        value=Signal::derive(move || draft.with(|d| d.message.clone()))
                        invalid=has_issue(ContactField::Message)
                        on_input=edit(|draft, value| draft.message = value)
                    />
                    <ul data-ui-slot="issues">
                        <For
                            each=move || issues.get()
                            key=|issue| issue.to_string()
                            children=|issue| view! {
                                <li><Badge tone=TextTone::Danger>{issue.to_string()}</Badge></li>
                            }
                        />
                    </ul>
                    <Cluster gap=LayoutGap::Sm>
                        <Button variant=ButtonVariant::Primary button_type="submit">"Send"</Button>
                        <Show when=move || sent.get() fallback=|| ()>
                            <Badge tone=TextTone::Accent>"Sent"</Badge>
                        </Show>
                    </Cluster>
                </Stack>
            </form>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_draft_reports_every_required_field() {
        assert_eq!(
            ContactDraft::default().validate(),
            Err(vec![
                FieldIssue::Required(ContactField::Name),
                FieldIssue::Required(ContactField::Email),
                FieldIssue::Required(ContactField::Message),
            ])
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let draft = ContactDraft {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            draft.validate(),
            Err(vec![FieldIssue::Required(ContactField::Name)])
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "ada",
            "ada@",
            "@example.org",
            "ada@example",
            "ada@.org",
            "a b@x.org",
            "a@b@c.org",
        ] {
            let draft = ContactDraft {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(
                draft.validate(),
                Err(vec![FieldIssue::InvalidEmail]),
                "email {email:?}"
            );
        }
    }

    #[test]
    fn overlong_message_is_rejected_with_limit() {
        let draft = ContactDraft {
            message: "x".repeat(MESSAGE_MAX_CHARS + 1),
            ..filled()
        };
        let issues = draft.validate().unwrap_err();
        assert_eq!(issues[0].field(), ContactField::Message);
        assert_eq!(issues[0].to_string(), "message must be at most 2000 characters");
    }

    #[test]
    fn partial_snapshot_restores_missing_fields_as_blank() {
        let restored: ContactDraft =
            serde_json::from_value(serde_json::json!({ "name": "Ada" })).expect("restore draft");
        assert_eq!(
            restored,
            ContactDraft {
                name: "Ada".to_string(),
                ..ContactDraft::default()
            }
        );
    }
}
