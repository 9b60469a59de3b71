//! Showcase page rendering every template plus a numeric-identity tab group.

use leptos::*;
use ui_kit::prelude::*;

use crate::contact_form::{ContactDraft, ContactFormTemplate};
use crate::settings::SettingsTemplate;

/// Query parameter the onboarding steps bind to.
pub const STEP_PARAM: &str = "step";

const ONBOARDING_STEPS: &str = r#"[
    { "identity": 1, "label": "Welcome" },
    { "identity": 2, "label": "Preferences" },
    { "identity": "3", "label": "Done" }
]"#;

/// Parses a JSON tab set; identities may be strings or integers.
///
/// # Errors
///
/// Returns the `serde_json` error when `json` is not a list of `{ identity, label }` objects.
pub fn parse_tab_set(json: &str) -> Result<Vec<TabDescriptor>, serde_json::Error> {
    serde_json::from_str(json)
}

fn onboarding_steps() -> Vec<TabDescriptor> {
    parse_tab_set(ONBOARDING_STEPS).unwrap_or_else(|err| {
        logging::warn!("onboarding tab set invalid: {err}");
        Vec::new()
    })
}

#[component]
fn StepFooter(
    /// Identity of the panel hosting this footer.
    #[prop(into)]
    current: TabIdentity,
    /// Identity to move to.
    #[prop(into)]
    next: TabIdentity,
    #[prop(default = "Next")] label: &'static str,
) -> impl IntoView {
    let tabs = expect_tabs_context(&current);
    view! {
        <Cluster gap=LayoutGap::Sm>
            <Button
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| tabs.select(next.clone()))
            >
                {label}
            </Button>
        </Cluster>
    }
}

#[component]
/// Full showcase page.
pub fn ShowcasePage() -> impl IntoView {
    let submitted = create_rw_signal::<Option<ContactDraft>>(None);

    view! {
        <main class="ui-showcase" data-ui-kind="showcase">
            <Stack gap=LayoutGap::Lg>
                <Card title="Onboarding">
                    <Tabs
                        tabs=onboarding_steps()
                        url_param=STEP_PARAM
                        on_change=Callback::new(|step: String| logging::log!("onboarding step: {step}"))
                        aria_label="Onboarding steps"
                    >
                        <TabPanel identity=1>
                            <p>"Tab identities here are numbers; the URL stores them as text."</p>
                            <StepFooter current=1 next=2 />
                        </TabPanel>
                        // Same panel as identity 2: string and number forms are equal.
                        <TabPanel identity="2">
                            <p>"Pick how the rest of the page behaves."</p>
                            <StepFooter current="2" next=3 label="Finish" />
                        </TabPanel>
                        <TabPanel identity=3u8>
                            <Badge tone=TextTone::Accent>"All set"</Badge>
                            <StepFooter current=3 next=1 label="Start over" />
                        </TabPanel>
                    </Tabs>
                </Card>

                <SettingsTemplate user_name="Ada Lovelace" />

                <ContactFormTemplate
                    on_submit=Callback::new(move |draft: ContactDraft| submitted.set(Some(draft)))
                />
                {move || {
                    submitted
                        .get()
                        .map(|draft| view! { <Badge>{format!("Last message from {}", draft.name)}</Badge> })
                }}
            </Stack>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn onboarding_steps_mix_numeric_and_string_identities() {
        let steps = parse_tab_set(ONBOARDING_STEPS).expect("onboarding steps");
        let identities: Vec<&str> = steps.iter().map(|tab| tab.identity.as_str()).collect();
        assert_eq!(identities, vec!["1", "2", "3"]);
        assert_eq!(steps[1].identity, TabIdentity::from(2));
    }

    #[test]
    fn malformed_tab_set_is_an_error() {
        assert!(parse_tab_set(r#"[{ "identity": true, "label": "x" }]"#).is_err());
        assert!(parse_tab_set(r#"{ "identity": 1 }"#).is_err());
    }
}
