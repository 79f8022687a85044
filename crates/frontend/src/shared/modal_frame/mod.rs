use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const BASE_Z_INDEX: i32 = 1000;

/// Each stacked dialog sits above the previous one's overlay.
fn z_index_for(depth: usize) -> i32 {
    BASE_Z_INDEX + 10 * depth as i32
}

fn on_overlay_itself(ev: &MouseEvent) -> bool {
    matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct)
}

/// Overlay and surface of one dialog on the stack. The dialog draws its own
/// `DialogHeader`.
#[component]
pub fn ModalFrame(
    /// Position in the stack, 0 for the bottom dialog
    depth: usize,
    on_close: Callback<()>,
    /// Extra class for `div.modal`, e.g. `modal--wide`
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    // Нажатие и отпускание должны быть на оверлее: выделение текста
    // в диалоге с уходом мыши наружу не закрывает его
    let pressed_outside = RwSignal::new(false);

    let on_mouse_down = move |ev: MouseEvent| pressed_outside.set(on_overlay_itself(&ev));
    let on_click = move |ev: MouseEvent| {
        let close = pressed_outside.get_untracked() && on_overlay_itself(&ev);
        pressed_outside.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal {extra}"),
        _ => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index_for(depth))
            data-depth=depth.to_string()
            on:mousedown=on_mouse_down
            on:click=on_click
        >
            <div class=surface_class role="dialog" aria-modal="true" on:click=|ev: MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_index_grows_with_depth() {
        assert_eq!(z_index_for(0), 1000);
        assert!(z_index_for(2) > z_index_for(1));
    }
}
