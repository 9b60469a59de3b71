//! In-memory location adapter with a history stack and navigation listeners.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::location::{LocationError, NavigationLocation};
use crate::query;

/// Handle returned by [`MemoryLocation::on_navigate`] for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

struct HistoryState {
    entries: Vec<String>,
    cursor: usize,
    replace_count: usize,
    notify_on_replace: bool,
    next_listener: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl HistoryState {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }
}

/// In-process location backed by a stack of query strings.
///
/// Clones share the same history. Navigation that originates outside the controller under test
/// (deep links, back/forward) is simulated with [`MemoryLocation::navigate`],
/// [`MemoryLocation::back`], and [`MemoryLocation::forward`], each of which notifies listeners the
/// way a browser `popstate` event would.
#[derive(Clone)]
pub struct MemoryLocation {
    inner: Rc<RefCell<HistoryState>>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MemoryLocation")
            .field("entries", &state.entries)
            .field("cursor", &state.cursor)
            .field("replace_count", &state.replace_count)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl MemoryLocation {
    /// Creates a location whose single history entry carries `search`.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HistoryState {
                entries: vec![search.into()],
                cursor: 0,
                replace_count: 0,
                notify_on_replace: false,
                next_listener: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Makes replace writes notify listeners too, like router-backed locations do.
    pub fn with_notify_on_replace(self, notify: bool) -> Self {
        self.inner.borrow_mut().notify_on_replace = notify;
        self
    }

    /// Returns the query string of the current history entry.
    pub fn current_search(&self) -> String {
        self.inner.borrow().current().to_string()
    }

    /// Returns the number of history entries.
    pub fn history_len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Returns how many replace writes reached this location.
    pub fn replace_count(&self) -> usize {
        self.inner.borrow().replace_count
    }

    /// Pushes a new entry as an external navigation and notifies listeners.
    pub fn navigate(&self, search: impl Into<String>) {
        {
            let mut state = self.inner.borrow_mut();
            let keep = state.cursor + 1;
            state.entries.truncate(keep);
            state.entries.push(search.into());
            state.cursor = keep;
        }
        self.notify();
    }

    /// Moves one entry back. Returns `false` when already at the oldest entry.
    pub fn back(&self) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            if state.cursor == 0 {
                return false;
            }
            state.cursor -= 1;
        }
        self.notify();
        true
    }

    /// Moves one entry forward. Returns `false` when already at the newest entry.
    pub fn forward(&self) -> bool {
        {
            let mut state = self.inner.borrow_mut();
            if state.cursor + 1 >= state.entries.len() {
                return false;
            }
            state.cursor += 1;
        }
        self.notify();
        true
    }

    /// Registers a listener invoked after every location change not caused by a plain replace.
    pub fn on_navigate(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Unknown ids are ignored.
    pub fn remove_listener(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl NavigationLocation for MemoryLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        query::read_query_param(self.inner.borrow().current(), name)
    }

    fn replace_query_param(&self, name: &str, value: &str) -> Result<(), LocationError> {
        let notify = {
            let mut state = self.inner.borrow_mut();
            let next = query::replace_query_param(state.current(), name, value);
            let cursor = state.cursor;
            state.entries[cursor] = next;
            state.replace_count += 1;
            state.notify_on_replace
        };
        log::trace!("memory location replaced `{name}` with `{value}`");
        if notify {
            self.notify();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replace_keeps_history_length() {
        let location = MemoryLocation::new("?tab=a");
        location.replace_query_param("tab", "b").expect("replace");
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.current_search(), "?tab=b");
        assert_eq!(location.replace_count(), 1);
    }

    #[test]
    fn navigate_back_and_forward_walk_the_stack() {
        let location = MemoryLocation::new("?tab=a");
        location.navigate("?tab=b");
        location.navigate("?tab=c");
        assert_eq!(location.history_len(), 3);

        assert!(location.back());
        assert_eq!(location.query_param("tab").as_deref(), Some("b"));
        assert!(location.back());
        assert!(!location.back());
        assert!(location.forward());
        assert_eq!(location.query_param("tab").as_deref(), Some("b"));

        location.navigate("?tab=d");
        assert_eq!(location.history_len(), 3);
        assert!(!location.forward());
    }

    #[test]
    fn listeners_fire_on_navigation_but_not_plain_replace() {
        let location = MemoryLocation::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = location.on_navigate(move || counter.set(counter.get() + 1));

        location.navigate("?tab=a");
        location.replace_query_param("tab", "b").expect("replace");
        assert_eq!(hits.get(), 1);

        location.back();
        assert_eq!(hits.get(), 2);

        location.remove_listener(id);
        location.forward();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn notify_on_replace_emits_for_writes() {
        let location = MemoryLocation::default().with_notify_on_replace(true);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        location.on_navigate(move || counter.set(counter.get() + 1));

        location.replace_query_param("tab", "b").expect("replace");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listeners_may_read_the_location_reentrantly() {
        let location = MemoryLocation::default();
        let seen = Rc::new(RefCell::new(None));
        let reader = location.clone();
        let sink = Rc::clone(&seen);
        location.on_navigate(move || *sink.borrow_mut() = reader.query_param("tab"));

        location.navigate("?tab=z");
        assert_eq!(seen.borrow().as_deref(), Some("z"));
    }
}
