use aviala_search::scroll::{self, ScrollConfig, ScrollState, SectionMetrics};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Recompute the scroll state from the container's current geometry.
pub fn scroll_handler(
    container_ref: NodeRef,
    state: UseStateHandle<ScrollState>,
    config: ScrollConfig,
) -> Callback<Event> {
    Callback::from(move |_event: Event| {
        let Some(container) = container_ref.cast::<web_sys::HtmlElement>() else {
            return;
        };
        let offset = f64::from(container.scroll_top());
        let viewport = crate::dom::window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let sections = section_metrics(&container);
        state.set(scroll::compute(offset, viewport, &sections, &config));
    })
}

/// Measure every section inside the container, in document order.
fn section_metrics(container: &web_sys::Element) -> Vec<SectionMetrics> {
    let Ok(list) = container.query_selector_all(".sticky-scroll-section") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionMetrics {
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}
