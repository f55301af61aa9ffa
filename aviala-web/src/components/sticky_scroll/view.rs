use aviala_search::scroll::{ScrollConfig, ScrollState};
use yew::prelude::*;

use super::interactions::scroll_handler;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Sections, rendered in order inside the scroll container.
    pub children: Children,
    #[prop_or_default]
    pub config: ScrollConfig,
    #[prop_or_default]
    pub header: Html,
    #[prop_or_default]
    pub footer: Html,
}

#[function_component(StickyScroll)]
pub fn sticky_scroll(p: &Props) -> Html {
    let section_count = p.children.len();
    // Explicit bootstrap so the first paint is correct before any scroll
    // callback fires.
    let state = use_state(|| ScrollState::bootstrap(section_count));
    let container_ref = use_node_ref();

    let on_scroll = scroll_handler(container_ref.clone(), state.clone(), p.config);

    html! {
        <>
            <div class={classes!("header-container", state.header.css_class())}>
                { p.header.clone() }
            </div>
            <div class="sticky-scroll-container" ref={container_ref} onscroll={on_scroll}>
                { for p.children.iter().enumerate().map(|(i, child)| html! {
                    <section class={classes!("sticky-scroll-section", state.is_active(i).then_some("active"))}>
                        { child }
                    </section>
                }) }
            </div>
            <footer class={if state.footer_visible { "visible" } else { "hidden" }}>
                { p.footer.clone() }
            </footer>
        </>
    }
}
