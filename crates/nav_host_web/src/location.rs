//! `window.location`-backed navigation location.
//!
//! Reads go straight to `location.search`; writes rebuild the relative URL from the current path,
//! the updated query, and the current hash before calling `history.replaceState`.

use nav_host::{LocationError, NavigationLocation};

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation location for the current window.
pub struct BrowserLocation;

impl BrowserLocation {
    /// Returns the raw `location.search` string, or `None` off-browser.
    pub fn search(self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?.location().search().ok()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn replace_search(self, name: &str, value: &str) -> Result<(), LocationError> {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()
            .ok_or_else(|| LocationError::Unavailable("window".to_string()))?;
        let location = window.location();
        let search = location
            .search()
            .map_err(|e| LocationError::Rejected(format!("location.search failed: {e:?}")))?;
        let pathname = location
            .pathname()
            .map_err(|e| LocationError::Rejected(format!("location.pathname failed: {e:?}")))?;
        let hash = location.hash().unwrap_or_default();
        let url = format!(
            "{pathname}{}{hash}",
            nav_host::replace_query_param(&search, name, value)
        );
        let history = window
            .history()
            .map_err(|e| LocationError::Unavailable(format!("history: {e:?}")))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|e| LocationError::Rejected(format!("history.replaceState failed: {e:?}")))?;
        log::debug!("replaced location query with `{url}`");
        Ok(())
    }
}

impl NavigationLocation for BrowserLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.search()?;
        nav_host::read_query_param(&search, name)
    }

    fn replace_query_param(&self, name: &str, value: &str) -> Result<(), LocationError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.replace_search(name, value)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_browser_location_is_inert() {
        let location = BrowserLocation;
        assert_eq!(location.query_param("tab"), None);
        location
            .replace_query_param("tab", "b")
            .expect("native write is a no-op");
        assert_eq!(location.search(), None);
    }
}
