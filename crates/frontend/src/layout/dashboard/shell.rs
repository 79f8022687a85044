use contracts::navigation::{initial_tab, DashboardTab, NavigationIntent};
use leptos::prelude::*;

use crate::layout::navigation_bridge::use_navigation_bridge;
use crate::shared::page_frame::PageFrame;

/// Tab state of one mounted role dashboard, shared with its panels.
///
/// `focus` carries the intent's `target_path` (e.g. a delivery id); panels
/// read it and decide what to select.
pub struct ShellContext<T: DashboardTab> {
    pub active: RwSignal<T>,
    pub focus: RwSignal<Option<String>>,
}

impl<T: DashboardTab> Clone for ShellContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DashboardTab> Copy for ShellContext<T> {}

impl<T: DashboardTab> ShellContext<T> {
    /// Initial state from the intent taken at mount (if any).
    pub fn new(intent: Option<&NavigationIntent>) -> Self {
        let focus = intent
            .filter(|intent| intent.target_view == T::VIEW)
            .and_then(|intent| intent.target_path.clone());
        Self {
            active: RwSignal::new(initial_tab::<T>(intent)),
            focus: RwSignal::new(focus),
        }
    }

    /// Intent delivered while already mounted: treated as a fresh landing.
    pub fn apply(&self, intent: NavigationIntent) {
        self.active.set(intent.tab_for::<T>());
        self.focus.set(intent.target_path);
    }

    pub fn switch_to(&self, tab: T) {
        self.active.set(tab);
    }

    /// Switch tab and point it at a sub-resource.
    pub fn focus_on(&self, tab: T, path: impl Into<String>) {
        self.focus.set(Some(path.into()));
        self.active.set(tab);
    }
}

pub fn use_shell<T: DashboardTab>() -> ShellContext<T> {
    use_context::<ShellContext<T>>()
        .unwrap_or_else(|| panic!("ShellContext for {:?} not provided", T::VIEW))
}

/// Role dashboard frame: header, a stable tab strip and the active panel.
///
/// Takes the pending intent for `T::VIEW` exactly once, while the component
/// body runs; later re-renders never touch the slot again. `header` runs
/// after the shell context is provided, so header widgets can switch tabs.
pub fn dashboard_shell<T, H, F>(page_id: &'static str, header: H, content: F) -> impl IntoView
where
    T: DashboardTab,
    H: FnOnce() -> AnyView,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let bridge = use_navigation_bridge();
    let intent = bridge.take_for(T::VIEW);
    let shell = ShellContext::<T>::new(intent.as_ref());
    provide_context(shell);

    bridge.attach(T::VIEW, Callback::new(move |intent| shell.apply(intent)));
    on_cleanup(move || bridge.detach(T::VIEW));

    // Same-tab clicks must not rebuild the panel.
    let current = Memo::new(move |_| shell.active.get());

    let header = header();

    let tabs = T::ALL
        .iter()
        .copied()
        .map(|tab| {
            view! {
                <button
                    type="button"
                    role="tab"
                    data-tab=tab.key()
                    class=move || {
                        if current.get() == tab {
                            "dashboard-tabs__item dashboard-tabs__item--active"
                        } else {
                            "dashboard-tabs__item"
                        }
                    }
                    aria-selected=move || (current.get() == tab).to_string()
                    on:click=move |_| shell.switch_to(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=page_id title=T::VIEW.display_name()>
            {header}
            <nav class="dashboard-tabs" role="tablist">
                {tabs}
            </nav>
            <div class="dashboard-content" role="tabpanel">
                {move || content(current.get())}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::view::View;
    use contracts::navigation::{ClientTab, CustomerTab, DriverTab};
    use leptos::reactive::owner::Owner;

    use crate::layout::navigation_bridge::NavigationBridge;

    #[test]
    fn test_direct_navigation_uses_default_tab() {
        Owner::new().with(|| {
            let shell = ShellContext::<DriverTab>::new(None);
            assert_eq!(shell.active.get_untracked(), DriverTab::Dashboard);
            assert_eq!(shell.focus.get_untracked(), None);
        });
    }

    #[test]
    fn test_intent_sets_tab_and_focus() {
        Owner::new().with(|| {
            let intent = NavigationIntent::to_tab(CustomerTab::Tracking).with_path("DEL003");
            let shell = ShellContext::<CustomerTab>::new(Some(&intent));
            assert_eq!(shell.active.get_untracked(), CustomerTab::Tracking);
            assert_eq!(shell.focus.get_untracked().as_deref(), Some("DEL003"));
        });
    }

    #[test]
    fn test_unrelated_updates_keep_tab() {
        Owner::new().with(|| {
            let bridge = NavigationBridge::new();
            bridge.stage(NavigationIntent::to_tab(ClientTab::Billing));
            let shell = ShellContext::<ClientTab>::new(bridge.take_for(View::Client).as_ref());
            assert_eq!(shell.active.get_untracked(), ClientTab::Billing);

            // panel-local state churns; the intent is not applied again
            let draft = RwSignal::new(String::new());
            draft.set("hello".into());
            draft.update(|d| d.push('!'));
            assert_eq!(shell.active.get_untracked(), ClientTab::Billing);

            shell.switch_to(ClientTab::Communication);
            draft.set(String::new());
            assert_eq!(shell.active.get_untracked(), ClientTab::Communication);
            assert!(!bridge.has_pending());
        });
    }

    #[test]
    fn test_foreign_intent_is_ignored() {
        Owner::new().with(|| {
            let intent = NavigationIntent::new(View::Driver)
                .with_tab("billing")
                .with_path("X");
            let shell = ShellContext::<ClientTab>::new(Some(&intent));
            assert_eq!(shell.active.get_untracked(), ClientTab::Orders);
            assert_eq!(shell.focus.get_untracked(), None);
        });
    }

    #[test]
    fn test_apply_is_a_fresh_landing() {
        Owner::new().with(|| {
            let shell = ShellContext::<ClientTab>::new(None);
            shell.switch_to(ClientTab::Tracking);
            shell.apply(NavigationIntent::new(View::Client).with_tab("nope"));
            assert_eq!(shell.active.get_untracked(), ClientTab::Orders);

            shell.apply(NavigationIntent::to_tab(ClientTab::Billing));
            assert_eq!(shell.active.get_untracked(), ClientTab::Billing);
        });
    }

    #[test]
    fn test_focus_on_switches_tab() {
        Owner::new().with(|| {
            let shell = ShellContext::<CustomerTab>::new(None);
            shell.switch_to(CustomerTab::Orders);
            shell.focus_on(CustomerTab::Tracking, "DEL002");
            assert_eq!(shell.active.get_untracked(), CustomerTab::Tracking);
            assert_eq!(shell.focus.get_untracked().as_deref(), Some("DEL002"));
        });
    }
}
