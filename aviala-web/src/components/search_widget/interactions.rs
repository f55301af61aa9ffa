use aviala_search::WidgetState;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Focus the input field whenever the widget transitions to open.
#[hook]
pub fn use_focus_on_open(input_ref: NodeRef, open: bool) {
    use_effect_with(open, move |open| {
        if *open {
            if let Some(input) = input_ref.cast::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        }
    });
}

/// While open, any pointer interaction outside the widget root closes it.
/// The document-level listener exists only for the open state and is removed
/// on close and on unmount.
#[hook]
pub fn use_outside_click(root_ref: NodeRef, state: UseStateHandle<WidgetState>) {
    use_effect_with(state.open, move |open| {
        let listener = open.then(|| {
            let root = root_ref.clone();
            let state = state.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| {
                        root.cast::<web_sys::Node>()
                            .is_some_and(|r| r.contains(Some(&node)))
                    });
                if !inside {
                    let mut next = (*state).clone();
                    next.close();
                    state.set(next);
                }
            })
        });
        if let Some(closure) = &listener {
            if let Err(err) = crate::dom::document()
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                log::error!(
                    "Failed to attach outside-click listener: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        }
        move || {
            if let Some(closure) = listener {
                let _ = crate::dom::document()
                    .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
        }
    });
}

/// Escape closes the widget; Enter follows the first rendered result.
pub fn keydown_handler(
    state: UseStateHandle<WidgetState>,
    first_link: Option<String>,
) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
        "Escape" => {
            e.prevent_default();
            let mut next = (*state).clone();
            next.close();
            state.set(next);
        }
        "Enter" => {
            if let Some(link) = &first_link {
                e.prevent_default();
                if let Err(err) = crate::dom::window().location().set_href(link) {
                    log::error!(
                        "Failed to navigate to search result: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
        }
        _ => {}
    })
}
