use yew::prelude::*;

use crate::components::search_widget::SearchWidget;
use crate::components::sticky_scroll::StickyScroll;

/// Home-page assembly: the site header (with the search widget) above the
/// four stacked scroll sections.
#[function_component(App)]
pub fn app() -> Html {
    let header = html! {
        <div class="header-content">
            <a href="/" class="site-title">{"Aviala"}</a>
            <SearchWidget />
        </div>
    };
    let footer = html! {
        <p class="footer-copy">{"Aviala, built with the aviala theme"}</p>
    };

    html! {
        <StickyScroll {header} {footer}>
            <div class="hero">
                <h1>{"Aviala"}</h1>
                <p>{"Notes, guides and projects."}</p>
            </div>
            <div class="panel panel-writing">
                <h2>{"Writing"}</h2>
            </div>
            <div class="panel panel-projects">
                <h2>{"Projects"}</h2>
            </div>
            <div class="panel panel-contact">
                <h2>{"Contact"}</h2>
            </div>
        </StickyScroll>
    }
}
