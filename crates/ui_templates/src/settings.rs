//! Settings layout: a URL-bound tab group of account sections.

use std::rc::Rc;

use leptos::*;
use ui_kit::prelude::*;

use crate::contact_form::ContactFormTemplate;

/// Query parameter the settings layout binds to unless told otherwise.
pub const DEFAULT_SECTION_PARAM: &str = "section";

/// Returns the settings sections in header order.
pub fn settings_sections() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new("profile", "Profile"),
        TabDescriptor::new("account", "Account"),
        TabDescriptor::new("notifications", "Notifications"),
        TabDescriptor::new("support", "Support"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DigestFrequency {
    Instant,
    Daily,
    Weekly,
}

impl DigestFrequency {
    const ALL: [Self; 3] = [Self::Instant, Self::Daily, Self::Weekly];

    fn label(self) -> &'static str {
        match self {
            Self::Instant => "Instantly",
            Self::Daily => "Daily digest",
            Self::Weekly => "Weekly digest",
        }
    }
}

#[component]
/// Settings page template.
pub fn SettingsTemplate(
    /// Display name shown in the profile section.
    #[prop(into)]
    user_name: String,
    /// Optional avatar image URL.
    #[prop(optional, into)]
    avatar_src: Option<String>,
    /// Query parameter mirroring the open section.
    #[prop(default = DEFAULT_SECTION_PARAM.to_string(), into)]
    section_param: String,
    /// Invoked with the section identity whenever a section is selected.
    #[prop(optional)]
    on_section_change: Option<Callback<String>>,
) -> impl IntoView {
    let profile = store_value((user_name, avatar_src));
    let account_name = create_rw_signal(profile.with_value(|(name, _)| name.clone()));
    let frequency = create_rw_signal(DigestFrequency::Daily);
    let header_extra: ChildrenFn = Rc::new(move || {
        let name = profile.with_value(|(name, _)| name.clone());
        Fragment::new(vec![
            view! { <Avatar name size=AvatarSize::Sm /> }.into_view()
        ])
    });

    view! {
        <Tabs
            tabs=settings_sections()
            url_param=section_param
            on_change=Callback::new(move |section: String| {
                logging::log!("settings section selected: {section}");
                if let Some(on_section_change) = on_section_change {
                    on_section_change.call(section);
                }
            })
            header_extra
            layout_class="settings-tabs"
            aria_label="Settings sections"
        >
            <TabPanel identity="profile">
                <Card title="Profile">
                    <Cluster gap=LayoutGap::Md wrap=false>
                        {move || {
                            let (name, src) = profile.get_value();
                            match src {
                                Some(src) => {
                                    view! { <Avatar name src size=AvatarSize::Lg /> }.into_view()
                                }
                                None => view! { <Avatar name size=AvatarSize::Lg /> }.into_view(),
                            }
                        }}
                        <Stack gap=LayoutGap::Sm>
                            <strong>{move || account_name.get()}</strong>
                            <Badge tone=TextTone::Accent>"Member"</Badge>
                        </Stack>
                    </Cluster>
                </Card>
            </TabPanel>
            <TabPanel identity="account">
                <Card title="Account">
                    <Stack gap=LayoutGap::Sm>
                        <TextField
                            name="display-name"
                            aria_label="Display name"
                            autocomplete="nickname"
                            value=Signal::derive(move || account_name.get())
                            on_input=Callback::new(move |value: String| account_name.set(value))
                        />
                        <TextField
                            name="password"
                            aria_label="New password"
                            autocomplete="new-password"
                            input_type="password"
                        />
                        <Cluster gap=LayoutGap::Sm>
                            <Button variant=ButtonVariant::Primary>"Save"</Button>
                            <Button variant=ButtonVariant::Danger>"Delete account"</Button>
                        </Cluster>
                    </Stack>
                </Card>
            </TabPanel>
            <TabPanel identity="notifications">
                <Card title="Email notifications">
                    <MenuSurface aria_label="Digest frequency" elevation=Elevation::Flat>
                        {DigestFrequency::ALL
                            .into_iter()
                            .map(|option| view! {
                                <MenuItem
                                    checked=Signal::derive(move || frequency.get() == option)
                                    on_click=Callback::new(move |_| frequency.set(option))
                                >
                                    {option.label()}
                                </MenuItem>
                            })
                            .collect_view()}
                        <MenuSeparator />
                        <MenuItem disabled=true>"Pause all notifications"</MenuItem>
                    </MenuSurface>
                </Card>
                <Card title="Recent activity" elevation=Elevation::Flat>
                    <Cluster gap=LayoutGap::Sm wrap=false>
                        <Skeleton shape=SkeletonShape::Circle />
                        <Skeleton lines=3 />
                    </Cluster>
                </Card>
            </TabPanel>
            <TabPanel identity="support">
                <ContactFormTemplate title="Contact support" />
            </TabPanel>
        </Tabs>
    }
}
