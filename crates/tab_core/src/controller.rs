//! Tab controller: the single owner of a tab group's active identity.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::Rc,
};

use nav_host::NavigationLocation;

use crate::channel::{Subscription, TabChannel};
use crate::identity::{TabDescriptor, TabHeader, TabIdentity};

type ChangeCallback = Rc<dyn Fn(&str)>;
type Subscriber = Rc<dyn Fn(&TabIdentity)>;

/// Association between a tab group and one named query parameter of a navigable location.
#[derive(Clone)]
pub struct NavigationBinding {
    param: String,
    location: Rc<dyn NavigationLocation>,
}

impl NavigationBinding {
    /// Binds the query parameter `param` of `location`.
    pub fn new(param: impl Into<String>, location: impl NavigationLocation + 'static) -> Self {
        Self {
            param: param.into(),
            location: Rc::new(location),
        }
    }

    /// Returns the bound parameter name.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Reads the bound parameter, treating an empty value as absent.
    fn read(&self) -> Option<TabIdentity> {
        self.location
            .query_param(&self.param)
            .filter(|value| !value.is_empty())
            .map(TabIdentity::from)
    }
}

impl fmt::Debug for NavigationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationBinding")
            .field("param", &self.param)
            .finish_non_exhaustive()
    }
}

pub(crate) struct ControllerInner {
    tabs: RefCell<Vec<TabDescriptor>>,
    binding: Option<NavigationBinding>,
    on_change: Option<ChangeCallback>,
    active: RefCell<TabIdentity>,
    writing: Cell<bool>,
    selecting: Cell<bool>,
    pending: RefCell<VecDeque<TabIdentity>>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_subscriber: Cell<u64>,
}

impl ControllerInner {
    pub(crate) fn active(&self) -> TabIdentity {
        self.active.borrow().clone()
    }

    /// Selections requested while another one is running are queued and committed afterwards, in
    /// request order.
    pub(crate) fn select(&self, identity: TabIdentity) {
        self.pending.borrow_mut().push_back(identity);
        if self.selecting.replace(true) {
            log::trace!("queued nested tab selection");
            return;
        }
        let _selecting = ResetOnDrop(&self.selecting);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            self.commit(next);
        }
    }

    fn commit(&self, identity: TabIdentity) {
        let changed = self.active.replace(identity.clone()) != identity;

        if let Some(binding) = &self.binding {
            self.writing.set(true);
            let written = binding
                .location
                .replace_query_param(&binding.param, identity.as_str());
            self.writing.set(false);
            if let Err(err) = written {
                log::warn!("tab location write for `{}` failed: {err}", binding.param);
            }
        }

        if let Some(on_change) = &self.on_change {
            on_change(identity.as_str());
        }

        if changed {
            log::debug!("tab selected: `{identity}`");
            self.publish(&identity);
        }
    }

    fn sync_from_location(&self) -> bool {
        if self.writing.get() {
            log::trace!("ignoring location change caused by the controller's own write");
            return false;
        }
        let Some(next) = self.binding.as_ref().and_then(NavigationBinding::read) else {
            return false;
        };
        if *self.active.borrow() == next {
            return false;
        }
        log::debug!("tab followed location: `{next}`");
        self.active.replace(next.clone());
        self.publish(&next);
        true
    }

    pub(crate) fn subscribe(self: &Rc<Self>, subscriber: Subscriber) -> Subscription {
        let id = self.next_subscriber.get();
        self.next_subscriber.set(id + 1);
        self.subscribers.borrow_mut().push((id, subscriber));
        Subscription::new(id, Rc::downgrade(self))
    }

    pub(crate) fn unsubscribe(&self, id: u64) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    fn publish(&self, identity: &TabIdentity) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            if *self.active.borrow() != *identity {
                log::trace!("dropping stale notification for `{identity}`");
                return;
            }
            subscriber(identity);
        }
    }
}

struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Builder for [`TabController`]; the initial identity is resolved in [`Self::build`].
pub struct TabControllerBuilder {
    tabs: Vec<TabDescriptor>,
    binding: Option<NavigationBinding>,
    on_change: Option<ChangeCallback>,
}

impl TabControllerBuilder {
    /// Keeps the active identity in sync with query parameter `param` of `location`.
    pub fn bind_location(
        mut self,
        param: impl Into<String>,
        location: impl NavigationLocation + 'static,
    ) -> Self {
        self.binding = Some(NavigationBinding::new(param, location));
        self
    }

    /// Uses an already assembled binding.
    pub fn binding(mut self, binding: NavigationBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Registers a callback invoked with the string identity on every [`TabController::select`].
    pub fn on_change(mut self, on_change: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Resolves the initial identity and creates the controller.
    ///
    /// Resolution order: the bound parameter's current (non-empty) value, then the first
    /// descriptor, then [`TabIdentity::NONE`].
    pub fn build(self) -> TabController {
        let initial = self
            .binding
            .as_ref()
            .and_then(NavigationBinding::read)
            .or_else(|| self.tabs.first().map(|tab| tab.identity.clone()))
            .unwrap_or(TabIdentity::NONE);

        TabController {
            inner: Rc::new(ControllerInner {
                tabs: RefCell::new(self.tabs),
                binding: self.binding,
                on_change: self.on_change,
                active: RefCell::new(initial),
                writing: Cell::new(false),
                selecting: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
            }),
        }
    }
}

/// Owner of one tab group's active identity.
///
/// Clones share the same state. Three triggers feed it: construction (see
/// [`TabControllerBuilder::build`]), [`Self::select`] for user or programmatic selection, and
/// [`Self::sync_from_location`] for navigation that happened outside the controller. Selecting an
/// identity that is not in the descriptor list is allowed and leaves no panel visible.
#[derive(Clone)]
pub struct TabController {
    inner: Rc<ControllerInner>,
}

impl fmt::Debug for TabController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabController")
            .field("active", &*self.inner.active.borrow())
            .field("tabs", &*self.inner.tabs.borrow())
            .field("binding", &self.inner.binding)
            .finish_non_exhaustive()
    }
}

impl TabController {
    /// Starts building a controller over the ordered descriptor list `tabs`.
    pub fn builder(tabs: Vec<TabDescriptor>) -> TabControllerBuilder {
        TabControllerBuilder {
            tabs,
            binding: None,
            on_change: None,
        }
    }

    /// Returns the active identity.
    pub fn active(&self) -> TabIdentity {
        self.inner.active()
    }

    /// Returns whether `identity` is the active identity.
    pub fn is_active(&self, identity: &TabIdentity) -> bool {
        *self.inner.active.borrow() == *identity
    }

    /// Returns the bound query parameter name, if any.
    pub fn bound_param(&self) -> Option<&str> {
        self.inner.binding.as_ref().map(NavigationBinding::param)
    }

    /// Returns the current descriptor list.
    pub fn descriptors(&self) -> Vec<TabDescriptor> {
        self.inner.tabs.borrow().clone()
    }

    /// Replaces the descriptor list without touching the active identity.
    pub fn set_descriptors(&self, tabs: Vec<TabDescriptor>) {
        self.inner.tabs.replace(tabs);
    }

    /// Returns the descriptor of the active tab, if it is in the current list.
    pub fn visible_descriptor(&self) -> Option<TabDescriptor> {
        let active = self.inner.active.borrow();
        self.inner
            .tabs
            .borrow()
            .iter()
            .find(|tab| tab.identity == *active)
            .cloned()
    }

    /// Returns one header render model per descriptor, in order.
    pub fn headers(&self) -> Vec<TabHeader> {
        let active = self.inner.active.borrow();
        self.inner
            .tabs
            .borrow()
            .iter()
            .map(|tab| TabHeader {
                identity: tab.identity.clone(),
                label: tab.label.clone(),
                active: tab.identity == *active,
            })
            .collect()
    }

    /// Selects `identity`.
    ///
    /// In order: updates the active identity, replaces the bound query parameter (if any), and
    /// invokes the change callback with the string identity. Subscribers are then notified if the
    /// identity actually changed. A failed location write is logged and does not abort the
    /// selection. Selections made from inside the change callback or a subscriber run after the
    /// current one completes, so subscribers always end on the controller's identity.
    pub fn select(&self, identity: impl Into<TabIdentity>) {
        self.inner.select(identity.into());
    }

    /// Follows a location change that happened outside this controller.
    ///
    /// Adopts the bound parameter's value when it is present, non-empty, and different from the
    /// active identity. Never writes back to the location or invokes the change callback. Calls
    /// made while the controller's own write is in flight are ignored. Returns whether the active
    /// identity changed.
    pub fn sync_from_location(&self) -> bool {
        self.inner.sync_from_location()
    }

    /// Returns a non-owning channel for panels and header rows.
    pub fn channel(&self) -> TabChannel {
        TabChannel::new(Rc::downgrade(&self.inner))
    }

    /// Subscribes to active-identity changes.
    pub fn subscribe(&self, subscriber: impl Fn(&TabIdentity) + 'static) -> Subscription {
        self.inner.subscribe(Rc::new(subscriber))
    }
}
