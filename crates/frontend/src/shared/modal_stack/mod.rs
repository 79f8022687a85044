use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_class: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Copyable, so it can move into any number of event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Root-level owner of every open dialog.
///
/// - Open/close is explicit state; nothing looks dialogs up in the DOM
/// - Escape closes only the topmost dialog (handled by `ModalHost`)
/// - Any route change clears the whole stack (bridge, back/forward, typed URL)
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: the originating DOM event must finish dispatching
            // before its handler's nodes are dropped.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.stack.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_open()
    }

    /// Push a new dialog onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the dialog can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_class(None, builder)
    }

    /// Push a dialog with an extra class on the surface (`modal--wide` etc.).
    pub fn push_with_class<F>(&self, modal_class: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as ModalBuilder;

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_class,
            });
        });
        log::debug!("modal #{id} opened");

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
        log::debug!("modal #{id} closed");
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    pub fn clear(&self) {
        if self.stack.with_untracked(|s| !s.is_empty()) {
            log::debug!("modal stack cleared");
            self.stack.set(Vec::new());
        }
    }
}

fn is_escape(event: &web_sys::Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|key| key.key() == "Escape")
}

/// Window-level Escape listener: pops the topmost dialog only.
fn listen_for_escape(svc: ModalStackService) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; Escape will not close dialogs");
        return;
    };
    let on_keydown = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if is_escape(&event) && svc.stack.with_untracked(|s| !s.is_empty()) {
            svc.pop_deferred();
        }
    });
    if window
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to register Escape listener");
    }
    // Слушатель живёт всё время работы приложения
    on_keydown.forget();
}

/// Dialogs capture state of the panel that opened them; once the route
/// changes that panel is disposed, so the stack must not outlive it.
fn close_on_route_change(svc: ModalStackService, previous: Option<&str>, current: &str) {
    if previous.is_some_and(|prev| prev != current) {
        log::debug!("route changed to {current}, closing dialogs");
        svc.clear();
    }
}

/// Renders the dialog stack at the application root. Mount exactly once,
/// inside the `Router`: dialogs navigate through the bridge.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| listen_for_escape(svc));

    let location = use_location();
    Effect::new(move |previous: Option<String>| {
        let current = location.pathname.get();
        close_on_route_change(svc, previous.as_deref(), &current);
        current
    });

    let layers = move || {
        svc.stack
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<(usize, ModalEntry)>>()
    };

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=layers
                key=|(_, entry)| entry.id
                children=move |(depth, entry)| {
                    let handle = ModalHandle { id: entry.id, svc };
                    view! {
                        <ModalFrame
                            depth=depth
                            on_close=Callback::new(move |_| handle.close())
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {(entry.builder)(handle)}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_push_and_close() {
        Owner::new().with(|| {
            let svc = ModalStackService::new();
            assert!(svc.is_empty());

            let first = svc.push(|_| ().into_any());
            let second = svc.push_with_class(Some("modal--wide".into()), |_| ().into_any());
            assert_eq!(svc.len(), 2);
            assert_ne!(first.id(), second.id());

            svc.close(first.id());
            assert_eq!(svc.len(), 1);
            svc.pop();
            assert!(!svc.is_open());
        });
    }

    #[test]
    fn test_route_change_closes_dialogs() {
        Owner::new().with(|| {
            let svc = ModalStackService::new();
            svc.push(|_| ().into_any());

            // первый прогон эффекта: маршрут ещё не менялся
            close_on_route_change(svc, None, "/admin");
            assert_eq!(svc.len(), 1);
            close_on_route_change(svc, Some("/admin"), "/admin");
            assert_eq!(svc.len(), 1);

            // back button: /admin -> /
            close_on_route_change(svc, Some("/admin"), "/");
            assert!(svc.is_empty());
        });
    }

    #[test]
    fn test_clear_empties_stack() {
        Owner::new().with(|| {
            let svc = ModalStackService::new();
            svc.push(|_| ().into_any());
            svc.push(|_| ().into_any());
            svc.clear();
            assert!(svc.is_empty());
            // повторная очистка пустого стека допустима
            svc.clear();
            assert_eq!(svc.len(), 0);
        });
    }
}
