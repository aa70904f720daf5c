//! Session & Access Control
//!
//! Access decisions for the manage-menu screen, path helpers, and the
//! one-shot "items added" notice handed from the menu screen to the
//! restaurant page through client-side storage. The notice is an explicit
//! value object consumed exactly once: reading it clears both keys.

use crate::models::User;

pub const ITEMS_ADDED_KEY: &str = "menuItemsAdded";
pub const ITEMS_ADDED_COUNT_KEY: &str = "menuItemsAddedCount";

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data. Please try again.";

pub fn restaurant_path(restaurant_id: &str) -> String {
    format!("/restaurant/{restaurant_id}")
}

pub fn menu_path(restaurant_id: &str) -> String {
    format!("/restaurant/{restaurant_id}/menu")
}

/// Outcome of the auth gate for a restaurant-scoped screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Redirect(String),
}

/// Decide whether the current user may manage the given restaurant's menu.
///
/// No session: back to the root carrying a return-path hint. A user without
/// access (not an admin, different restaurant): over to their own restaurant,
/// or the root when they have none.
pub fn check_access(user: Option<&User>, restaurant_id: &str) -> AccessDecision {
    let Some(user) = user else {
        return AccessDecision::Redirect(format!("/?returnTo={}", menu_path(restaurant_id)));
    };

    let owns_restaurant = user.restaurant_id.as_deref() == Some(restaurant_id);
    if user.is_admin || owns_restaurant {
        return AccessDecision::Granted;
    }

    match user.restaurant_id.as_deref() {
        Some(own) => AccessDecision::Redirect(restaurant_path(own)),
        None => AccessDecision::Redirect("/".to_string()),
    }
}

/// Outcome of resolving the session lookup into an access decision
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    /// Access granted; carries the resolved user for the store
    Granted(Option<User>),
    Redirect(String),
    /// The lookup itself failed; show the load banner, never redirect
    LoadError(String),
}

/// Fold the session lookup result into a gate decision. Only a confirmed
/// missing session redirects to sign-in; a transport or backend failure
/// keeps the screen and reports a retryable load error.
pub fn gate_access(session: Result<Option<User>, String>, restaurant_id: &str) -> SessionGate {
    let user = match session {
        Err(_) => return SessionGate::LoadError(LOAD_ERROR_MESSAGE.to_string()),
        Ok(user) => user,
    };
    match check_access(user.as_ref(), restaurant_id) {
        AccessDecision::Granted => SessionGate::Granted(user),
        AccessDecision::Redirect(path) => SessionGate::Redirect(path),
    }
}

/// Success notice produced by a completed bulk submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsAddedNotice {
    pub count: u32,
}

/// Key-value seam over client-side storage, so the one-shot notice logic is
/// testable without a browser
pub trait NoticeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Persist the notice after a successful bulk submit
pub fn store_notice(store: &mut impl NoticeStore, count: usize) {
    store.set(ITEMS_ADDED_KEY, "true");
    store.set(ITEMS_ADDED_COUNT_KEY, &count.to_string());
}

/// Read and clear the notice in one step. Returns `None` when no submit has
/// completed since the last read.
pub fn take_notice(store: &mut impl NoticeStore) -> Option<ItemsAddedNotice> {
    if store.get(ITEMS_ADDED_KEY).as_deref() != Some("true") {
        return None;
    }
    let count = store
        .get(ITEMS_ADDED_COUNT_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    store.remove(ITEMS_ADDED_KEY);
    store.remove(ITEMS_ADDED_COUNT_KEY);
    Some(ItemsAddedNotice { count })
}

/// `localStorage`-backed notice store used by the running app
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl NoticeStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = self.storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = self.storage() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl NoticeStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }

        fn remove(&mut self, key: &str) {
            self.0.remove(key);
        }
    }

    fn owner(restaurant_id: Option<&str>, is_admin: bool) -> User {
        User {
            id: "u1".to_string(),
            name: "Dana".to_string(),
            email: None,
            restaurant_id: restaurant_id.map(str::to_string),
            is_admin,
        }
    }

    #[test]
    fn test_no_session_redirects_to_root_with_return_hint() {
        let decision = check_access(None, "r42");
        assert_eq!(
            decision,
            AccessDecision::Redirect("/?returnTo=/restaurant/r42/menu".to_string())
        );
    }

    #[test]
    fn test_owner_is_granted() {
        let user = owner(Some("r42"), false);
        assert_eq!(check_access(Some(&user), "r42"), AccessDecision::Granted);
    }

    #[test]
    fn test_admin_is_granted_anywhere() {
        let user = owner(Some("other"), true);
        assert_eq!(check_access(Some(&user), "r42"), AccessDecision::Granted);
    }

    #[test]
    fn test_wrong_restaurant_redirects_to_own() {
        let user = owner(Some("mine"), false);
        assert_eq!(
            check_access(Some(&user), "r42"),
            AccessDecision::Redirect("/restaurant/mine".to_string())
        );
    }

    #[test]
    fn test_no_restaurant_redirects_to_root() {
        let user = owner(None, false);
        assert_eq!(
            check_access(Some(&user), "r42"),
            AccessDecision::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_gate_failed_lookup_is_load_error_not_redirect() {
        // An unreachable backend must not bounce an authenticated owner to
        // sign-in; the screen keeps the retryable banner instead.
        let gate = gate_access(Err("fetch failed".to_string()), "r42");
        assert_eq!(gate, SessionGate::LoadError(LOAD_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_gate_missing_session_redirects() {
        assert_eq!(
            gate_access(Ok(None), "r42"),
            SessionGate::Redirect("/?returnTo=/restaurant/r42/menu".to_string())
        );
    }

    #[test]
    fn test_gate_owner_passes_user_through() {
        let user = owner(Some("r42"), false);
        assert_eq!(
            gate_access(Ok(Some(user.clone())), "r42"),
            SessionGate::Granted(Some(user))
        );
    }

    #[test]
    fn test_notice_is_consumed_exactly_once() {
        let mut store = MemoryStore::default();
        store_notice(&mut store, 3);
        assert_eq!(store.get(ITEMS_ADDED_COUNT_KEY).as_deref(), Some("3"));

        let notice = take_notice(&mut store);
        assert_eq!(notice, Some(ItemsAddedNotice { count: 3 }));

        // Both keys are gone; a second read sees nothing
        assert_eq!(take_notice(&mut store), None);
        assert_eq!(store.get(ITEMS_ADDED_KEY), None);
        assert_eq!(store.get(ITEMS_ADDED_COUNT_KEY), None);
    }

    #[test]
    fn test_take_notice_without_flag_is_none() {
        let mut store = MemoryStore::default();
        store.set(ITEMS_ADDED_COUNT_KEY, "7");
        assert_eq!(take_notice(&mut store), None);
    }

    // Management-screen flow: auth gate, one empty form, fill one item,
    // submit exactly one creation call, persist the count.
    #[test]
    fn test_end_to_end_single_item_flow() {
        use crate::aggregator::{submit_candidates, MultiFormAggregator};
        use crate::form::ItemFormModel;
        use futures::executor::block_on;
        use std::cell::RefCell;
        use std::rc::Rc;

        // Unauthenticated access bounces to the root path
        assert!(matches!(
            check_access(None, "r42"),
            AccessDecision::Redirect(path) if path.starts_with("/?returnTo=")
        ));

        // The owner gets in and sees a single empty form
        let user = owner(Some("r42"), false);
        assert_eq!(check_access(Some(&user), "r42"), AccessDecision::Granted);
        let mut agg = MultiFormAggregator::new();
        assert_eq!(agg.slot_keys(), &[0]);

        // Fill name, description, and price through the form model
        let mut form = ItemFormModel::new();
        form.set_name("Pizza");
        form.set_description("Wood-fired");
        let published = form.set_price("1299").expect("price change publishes");
        agg.on_child_change(0, published);

        let candidates = agg.begin_submit().expect("one valid candidate");
        let calls = Rc::new(RefCell::new(0u32));
        let calls_ref = calls.clone();
        let count = block_on(submit_candidates(candidates, move |_| {
            let calls_ref = calls_ref.clone();
            async move {
                *calls_ref.borrow_mut() += 1;
                Ok::<_, String>(())
            }
        }))
        .expect("submit succeeds");
        agg.submit_succeeded();

        assert_eq!(*calls.borrow(), 1);

        let mut store = MemoryStore::default();
        store_notice(&mut store, count);
        assert_eq!(store.get(ITEMS_ADDED_COUNT_KEY).as_deref(), Some("1"));
    }
}
