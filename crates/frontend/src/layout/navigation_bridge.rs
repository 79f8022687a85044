//! Cross-view tab handoff.
//!
//! A panel anywhere in the tree (including a dialog on the modal stack) asks
//! for "go to view X and open tab Y". The bridge stages the intent in a
//! one-shot slot and navigates; the destination shell takes the intent while
//! it is being built. If X is already mounted, the intent goes straight to
//! its shell instead, since no remount will happen.

use contracts::enums::view::View;
use contracts::navigation::{DashboardTab, NavigationIntent, PendingIntent};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::modal_stack::ModalStackService;

#[derive(Clone, Copy)]
struct MountedShell {
    view: View,
    apply: Callback<NavigationIntent>,
}

/// What `NavigationBridge::stage` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staged {
    /// Intent parked in the slot; navigate to this path.
    Navigate(&'static str),
    /// Target view is mounted; the intent was handed to its shell.
    Delivered,
    /// Already on the target path of a view without a shell: nothing remounts,
    /// so nothing is staged.
    Stay,
}

#[derive(Clone, Copy)]
pub struct NavigationBridge {
    pending: StoredValue<PendingIntent>,
    mounted: StoredValue<Option<MountedShell>>,
}

impl Default for NavigationBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationBridge {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new(PendingIntent::new()),
            mounted: StoredValue::new(None),
        }
    }

    pub fn stage(&self, intent: NavigationIntent) -> Staged {
        let mounted = self
            .mounted
            .get_value()
            .filter(|shell| shell.view == intent.target_view);

        match mounted {
            Some(shell) => {
                log::debug!(
                    "intent delivered to mounted {} (tab {:?})",
                    shell.view,
                    intent.target_tab
                );
                shell.apply.run(intent);
                Staged::Delivered
            }
            None => {
                let path = intent.target_view.path();
                log::debug!(
                    "intent staged for {} (tab {:?}, path {:?})",
                    intent.target_view,
                    intent.target_tab,
                    intent.target_path
                );
                self.pending.update_value(|slot| slot.put(intent));
                Staged::Navigate(path)
            }
        }
    }

    /// Drain the slot on mount. Every view calls this, so a staged intent
    /// never outlives the first mount after it.
    pub fn take_for(&self, view: View) -> Option<NavigationIntent> {
        let taken = self
            .pending
            .try_update_value(|slot| slot.take_for(view))
            .flatten();
        if let Some(intent) = &taken {
            log::debug!("{view} consumed intent (tab {:?})", intent.target_tab);
        }
        taken
    }

    pub fn has_pending(&self) -> bool {
        self.pending.with_value(|slot| !slot.is_empty())
    }

    pub fn attach(&self, view: View, apply: Callback<NavigationIntent>) {
        self.mounted.set_value(Some(MountedShell { view, apply }));
    }

    /// Only clears the registration if it still belongs to `view`: the next
    /// route's shell may already have attached.
    pub fn detach(&self, view: View) {
        self.mounted.update_value(|mounted| {
            if mounted.map(|shell| shell.view) == Some(view) {
                *mounted = None;
            }
        });
    }

    pub fn mounted_view(&self) -> Option<View> {
        self.mounted.with_value(|m| m.map(|shell| shell.view))
    }
}

pub fn use_navigation_bridge() -> NavigationBridge {
    use_context::<NavigationBridge>()
        .expect("NavigationBridge not provided in context (provide it in app root)")
}

/// Closes every open dialog, then stages `intent` (or hands it to the
/// mounted shell). The caller performs the route change for
/// `Staged::Navigate`.
pub fn navigate_with_intent(
    bridge: NavigationBridge,
    modals: Option<ModalStackService>,
    intent: NavigationIntent,
    current_path: &str,
) -> Staged {
    if let Some(modals) = modals {
        modals.clear();
    }
    if bridge.mounted_view().is_none() && intent.target_view.path() == current_path {
        log::debug!("already on {current_path}, intent dropped");
        return Staged::Stay;
    }
    bridge.stage(intent)
}

/// Returns `navigate_with_intent` bound to the current router.
///
/// Must be called in a component body under the `Router`.
pub fn use_navigate_with_intent() -> impl Fn(NavigationIntent) + Clone + 'static {
    let bridge = use_navigation_bridge();
    let modals = use_context::<ModalStackService>();
    let location = use_location();
    let navigate = use_navigate();

    move |intent: NavigationIntent| {
        let current = location.pathname.get_untracked();
        if let Staged::Navigate(path) = navigate_with_intent(bridge, modals, intent, &current) {
            log::info!("navigate -> {path}");
            navigate(path, Default::default());
        }
    }
}

/// Shortcut for the common "open tab `T` of its dashboard" case.
pub fn use_navigate_to_tab<T: DashboardTab>() -> impl Fn(T) + Clone + 'static {
    let go = use_navigate_with_intent();
    move |tab: T| go(NavigationIntent::to_tab(tab))
}

/// Variant for string view keys (notification links, external callers).
/// An unknown key degrades to a plain navigation home.
pub fn use_navigate_with_intent_key(
) -> impl Fn(&str, Option<String>, Option<String>) + Clone + 'static {
    let go = use_navigate_with_intent();
    move |key: &str, tab: Option<String>, path: Option<String>| {
        go(intent_from_key(key, tab, path));
    }
}

fn intent_from_key(key: &str, tab: Option<String>, path: Option<String>) -> NavigationIntent {
    match View::from_key(key) {
        Ok(view) => NavigationIntent {
            target_view: view,
            target_tab: tab,
            target_path: path,
        },
        Err(err) => {
            log::warn!("{err}; falling back to home");
            NavigationIntent::new(View::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::{initial_tab, AdminTab, ClientTab, CustomerTab};
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_intent_applies_once() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            let staged = bridge.stage(NavigationIntent::to_tab(ClientTab::Billing));
            assert_eq!(staged, Staged::Navigate("/client"));

            let intent = bridge.take_for(View::Client);
            assert_eq!(initial_tab::<ClientTab>(intent.as_ref()), ClientTab::Billing);

            // повторное монтирование без нового вызова
            assert_eq!(bridge.take_for(View::Client), None);
        });
    }

    #[test]
    fn test_stale_intent_does_not_replay() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            bridge.stage(NavigationIntent::to_tab(ClientTab::Billing));
            assert!(bridge.take_for(View::Client).is_some());

            // Client -> Admin -> Client, no new intent
            assert!(bridge.take_for(View::Admin).is_none());
            let back = bridge.take_for(View::Client);
            assert_eq!(initial_tab::<ClientTab>(back.as_ref()), ClientTab::Orders);
        });
    }

    #[test]
    fn test_intent_for_other_view_is_discarded() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            bridge.stage(NavigationIntent::to_tab(AdminTab::Fleet));
            // user ended up somewhere else (back button, typed URL)
            assert!(bridge.take_for(View::Home).is_none());
            assert!(!bridge.has_pending());
            assert!(bridge.take_for(View::Admin).is_none());
        });
    }

    #[test]
    fn test_unknown_tab_falls_back() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            bridge.stage(NavigationIntent::new(View::Customer).with_tab("not-a-real-tab"));
            let intent = bridge.take_for(View::Customer);
            assert!(intent.is_some());
            assert_eq!(initial_tab::<CustomerTab>(intent.as_ref()), CustomerTab::Tracking);
        });
    }

    #[test]
    fn test_same_view_delivers_to_mounted_shell() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            let active = RwSignal::new(ClientTab::Orders);
            bridge.attach(
                View::Client,
                Callback::new(move |intent: NavigationIntent| active.set(intent.tab_for::<ClientTab>())),
            );

            let staged = bridge.stage(NavigationIntent::to_tab(ClientTab::Communication));
            assert_eq!(staged, Staged::Delivered);
            assert_eq!(active.get_untracked(), ClientTab::Communication);
            assert!(!bridge.has_pending());

            // a different view still goes through the slot
            let staged = bridge.stage(NavigationIntent::to_tab(AdminTab::Settings));
            assert_eq!(staged, Staged::Navigate("/admin"));
            assert!(bridge.has_pending());
        });
    }

    #[test]
    fn test_detach_ignores_foreign_view() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            bridge.attach(View::Admin, Callback::new(|_: NavigationIntent| {}));
            // the old shell's cleanup runs after the new one attached
            bridge.detach(View::Client);
            assert_eq!(bridge.mounted_view(), Some(View::Admin));
            bridge.detach(View::Admin);
            assert_eq!(bridge.mounted_view(), None);
        });
    }

    #[test]
    fn test_navigate_closes_dialogs_and_stages_tab() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            let modals = ModalStackService::new();
            modals.push(|_| ().into_any());
            modals.push(|_| ().into_any());

            // "View All Invoices" inside the invoices dialog on /client
            let staged = navigate_with_intent(
                bridge,
                Some(modals),
                NavigationIntent::to_tab(ClientTab::Billing),
                "/admin",
            );
            assert_eq!(staged, Staged::Navigate("/client"));
            assert!(modals.is_empty());

            let intent = bridge.take_for(View::Client);
            assert_eq!(initial_tab::<ClientTab>(intent.as_ref()), ClientTab::Billing);
        });
    }

    #[test]
    fn test_navigate_from_dialog_on_same_dashboard() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            let modals = ModalStackService::new();
            let active = RwSignal::new(ClientTab::Orders);
            bridge.attach(
                View::Client,
                Callback::new(move |intent: NavigationIntent| active.set(intent.tab_for::<ClientTab>())),
            );
            modals.push(|_| ().into_any());

            let staged = navigate_with_intent(
                bridge,
                Some(modals),
                NavigationIntent::to_tab(ClientTab::Communication),
                "/client",
            );
            assert_eq!(staged, Staged::Delivered);
            assert!(modals.is_empty());
            assert_eq!(active.get_untracked(), ClientTab::Communication);
            assert!(!bridge.has_pending());
        });
    }

    #[test]
    fn test_same_path_without_shell_stages_nothing() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            let staged = navigate_with_intent(bridge, None, NavigationIntent::new(View::Home), "/");
            assert_eq!(staged, Staged::Stay);
            assert!(!bridge.has_pending());

            let staged =
                navigate_with_intent(bridge, None, NavigationIntent::new(View::SignIn), "/");
            assert_eq!(staged, Staged::Navigate("/signin"));
        });
    }

    #[test]
    fn test_unknown_key_goes_home() {
        let intent = intent_from_key("warehouse", Some("stock".into()), None);
        assert_eq!(intent, NavigationIntent::new(View::Home));

        let intent = intent_from_key("Driver", Some("history".into()), None);
        assert_eq!(intent.target_view, View::Driver);
        assert_eq!(intent.target_tab.as_deref(), Some("history"));
    }
}
