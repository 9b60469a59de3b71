//! Tab group components backed by a headless [`TabController`].
//!
//! [`Tabs`] owns one controller per instance and publishes a [`TabsContext`] to its subtree.
//! Header buttons select through the context, and every [`TabPanel`] beneath reads the active
//! identity from it. When a `url_param` is given, the active identity is mirrored into that query
//! parameter with `history.replaceState`, and back/forward navigation (`popstate`) is followed.

use leptos::*;
use nav_host_web::BrowserLocation;
use tab_core::{
    Subscription, TabChannel, TabController, TabDescriptor, TabGate, TabIdentity, TabsError,
};

use crate::primitives::{merge_layout_class, Button, ButtonVariant};

#[derive(Clone, Copy)]
/// Leptos context shared by a [`Tabs`] group with its headers and panels.
///
/// Reads and writes go through the group's [`TabChannel`]; `active` is the reactive mirror that
/// tells Leptos when to re-evaluate.
pub struct TabsContext {
    /// Reactive mirror of the active identity.
    pub active: Signal<TabIdentity>,
    channel: StoredValue<TabChannel>,
}

impl TabsContext {
    /// Creates a context over `channel`, re-rendering whenever `active` changes.
    pub fn new(active: impl Into<Signal<TabIdentity>>, channel: TabChannel) -> Self {
        Self {
            active: active.into(),
            channel: store_value(channel),
        }
    }

    /// Returns whether the panel behind `gate` is visible, tracking the active signal.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::ControllerDropped`] once the owning [`Tabs`] has been torn down.
    pub fn evaluate(&self, gate: &TabGate) -> Result<bool, TabsError> {
        // Track the mirror; the answer comes from the controller.
        self.active.with(|_| ());
        self.channel.with_value(|channel| gate.evaluate(Some(channel)))
    }

    /// Returns whether `identity` is active, tracking the active signal.
    pub fn is_active(&self, identity: &TabIdentity) -> bool {
        self.active.with(|active| active == identity)
    }

    /// Selects `identity`. Selecting on a torn-down group is logged and ignored.
    pub fn select(&self, identity: impl Into<TabIdentity>) {
        let identity = identity.into();
        if let Err(err) = self.channel.with_value(|channel| channel.select(identity)) {
            logging::warn!("tab selection ignored: {err}");
        }
    }

    /// Returns a callback selecting the identity it is called with.
    pub fn on_select(&self) -> Callback<TabIdentity> {
        let context = *self;
        Callback::new(move |identity: TabIdentity| context.select(identity))
    }
}

/// Returns the enclosing [`TabsContext`] for the panel declared as `panel`.
///
/// # Errors
///
/// Returns [`TabsError::MissingController`] outside a [`Tabs`] subtree.
pub fn try_tabs_context(panel: &TabIdentity) -> Result<TabsContext, TabsError> {
    use_context::<TabsContext>().ok_or_else(|| TabsError::MissingController {
        panel: panel.clone(),
    })
}

/// Returns the enclosing [`TabsContext`] for the panel declared as `panel`.
///
/// # Panics
///
/// Panics if called outside [`Tabs`]; a panel without a tab group is a wiring mistake.
pub fn expect_tabs_context(panel: &TabIdentity) -> TabsContext {
    try_tabs_context(panel).unwrap_or_else(|err| panic!("{err}"))
}

/// Controller of one [`Tabs`] instance plus the signal mirror its subscription feeds.
struct TabsWiring {
    controller: TabController,
    active: RwSignal<TabIdentity>,
    subscription: Subscription,
}

impl TabsWiring {
    fn new(
        tabs: Vec<TabDescriptor>,
        url_param: Option<String>,
        on_change: Option<Callback<String>>,
    ) -> Self {
        let mut builder = TabController::builder(tabs);
        if let Some(param) = url_param {
            builder = builder.bind_location(param, BrowserLocation);
        }
        if let Some(on_change) = on_change {
            builder = builder.on_change(move |identity| on_change.call(identity.to_string()));
        }
        let controller = builder.build();
        let active = create_rw_signal(controller.active());
        let subscription = controller.subscribe(move |identity| active.set(identity.clone()));
        Self {
            controller,
            active,
            subscription,
        }
    }

    /// Only URL-bound groups follow back/forward navigation.
    fn follows_history(&self) -> bool {
        self.controller.bound_param().is_some()
    }

    fn context(&self) -> TabsContext {
        TabsContext::new(self.active, self.controller.channel())
    }
}

#[component]
/// Tab group: header row plus any number of [`TabPanel`] children.
pub fn Tabs(
    /// Ordered tab list; the first entry is active unless the URL says otherwise.
    #[prop(into)]
    tabs: Vec<TabDescriptor>,
    /// Query parameter mirroring the active tab.
    #[prop(optional, into)]
    url_param: Option<String>,
    /// Invoked with the selected identity on every header click or programmatic selection.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Extra content rendered at the end of the header row.
    #[prop(optional)]
    header_extra: Option<ChildrenFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let wiring = TabsWiring::new(tabs, url_param, on_change);
    let context = wiring.context();
    let popstate = wiring.follows_history().then(|| {
        let follower = wiring.controller.clone();
        window_event_listener(ev::popstate, move |_| {
            follower.sync_from_location();
        })
    });
    let TabsWiring {
        controller,
        subscription,
        ..
    } = wiring;
    let descriptors = controller.descriptors();
    // The context channel is non-owning; the controller lives until the group is cleaned up.
    on_cleanup(move || {
        drop(subscription);
        if let Some(popstate) = popstate {
            popstate.remove();
        }
        drop(controller);
    });
    provide_context(context);

    view! {
        <section
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
        >
            <div data-ui-slot="header">
                <TabList aria_label=aria_label>
                    {descriptors
                        .into_iter()
                        .map(|tab| {
                            let identity = tab.identity.clone();
                            let selected = Signal::derive(move || context.is_active(&identity));
                            view! {
                                <Tab identity=tab.identity selected on_select=context.on_select()>
                                    {tab.label}
                                </Tab>
                            }
                        })
                        .collect_view()}
                </TabList>
                {header_extra.map(|extra| view! { <div data-ui-slot="header-extra">{extra()}</div> })}
            </div>
            {children()}
        </section>
    }
}

#[component]
/// Header row container for [`Tab`] triggers.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional_no_strip)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Clickable tab header bound to one identity.
pub fn Tab(
    #[prop(into)] identity: TabIdentity,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<TabIdentity>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let controls = format!("tab-panel-{identity}");
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            aria_controls=controls
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(identity.clone());
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Panel rendered only while its identity is the active one of the enclosing [`Tabs`].
///
/// Inactive panels are absent from the DOM, not hidden.
///
/// # Panics
///
/// Panics when rendered outside [`Tabs`].
pub fn TabPanel(
    /// Identity this panel answers to; numbers and strings with the same text are equal.
    #[prop(into)]
    identity: TabIdentity,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = expect_tabs_context(&identity);
    let panel_id = format!("tab-panel-{identity}");
    let class = merge_layout_class("ui-tab-panel", layout_class);
    let gate = TabGate::new(identity);
    let visible = Signal::derive(move || tabs.evaluate(&gate).unwrap_or(false));

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div
                class=class.clone()
                id=panel_id.clone()
                role="tabpanel"
                data-ui-primitive="true"
                data-ui-kind="tab-panel"
                data-ui-state="active"
            >
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn one_two() -> Vec<TabDescriptor> {
        vec![TabDescriptor::new(1, "One"), TabDescriptor::new(2, "Two")]
    }

    #[test]
    fn context_lookup_outside_tabs_reports_the_panel() {
        let runtime = create_runtime();
        let result = try_tabs_context(&TabIdentity::from(3));
        assert_eq!(
            result.err(),
            Some(TabsError::MissingController {
                panel: TabIdentity::from("3")
            })
        );
        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "tab panel `settings` evaluated outside of a tab controller scope")]
    fn expect_context_outside_tabs_panics() {
        let _runtime = create_runtime();
        expect_tabs_context(&TabIdentity::from("settings"));
    }

    #[test]
    fn only_url_bound_groups_follow_history() {
        let runtime = create_runtime();
        let unbound = TabsWiring::new(one_two(), None, None);
        assert!(!unbound.follows_history());

        let bound = TabsWiring::new(one_two(), Some("step".to_string()), None);
        assert!(bound.follows_history());
        assert_eq!(bound.controller.bound_param(), Some("step"));
        // Off-browser the location carries no parameters, so the first tab wins.
        assert_eq!(bound.controller.active(), "1");
        runtime.dispose();
    }

    #[test]
    fn context_select_routes_through_the_channel() {
        let runtime = create_runtime();
        let changes = create_rw_signal(Vec::<String>::new());
        let on_change = Callback::new(move |id: String| changes.update(|seen| seen.push(id)));
        let wiring = TabsWiring::new(one_two(), None, Some(on_change));
        let context = wiring.context();

        assert!(context.is_active(&TabIdentity::from("1")));
        context.select(2);

        assert_eq!(wiring.controller.active(), "2");
        assert_eq!(wiring.active.get_untracked(), TabIdentity::from(2));
        assert_eq!(context.evaluate(&TabGate::new("2")), Ok(true));
        assert_eq!(context.evaluate(&TabGate::new(1)), Ok(false));
        assert_eq!(changes.get_untracked(), vec!["2".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn mirror_stops_following_once_the_subscription_is_dropped() {
        let runtime = create_runtime();
        let TabsWiring {
            controller,
            active,
            subscription,
        } = TabsWiring::new(one_two(), None, None);

        controller.select(2);
        assert_eq!(active.get_untracked(), "2");

        drop(subscription);
        controller.select(1);
        assert_eq!(active.get_untracked(), "2");
        runtime.dispose();
    }

    #[test]
    fn panels_hide_once_the_controller_is_gone() {
        let runtime = create_runtime();
        let wiring = TabsWiring::new(one_two(), None, None);
        let context = wiring.context();
        drop(wiring);

        assert_eq!(
            context.evaluate(&TabGate::new(1)),
            Err(TabsError::ControllerDropped)
        );
        context.select(2);
        assert!(context.is_active(&TabIdentity::from(1)));
        runtime.dispose();
    }
}
