use aviala_search::{PanelView, ResultView, Span, WidgetState, build_panel};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::interactions::{keydown_handler, use_focus_on_open, use_outside_click};
use super::loader::{self, IndexState};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Where the pre-built document index is served.
    #[prop_or(AttrValue::Static("/index.json"))]
    pub index_url: AttrValue,
}

#[function_component(SearchWidget)]
pub fn search_widget(p: &Props) -> Html {
    let state = use_state(WidgetState::new);
    let index = use_state(|| IndexState::Pending);
    let input_ref = use_node_ref();
    let root_ref = use_node_ref();

    {
        // One fetch per mount, not one per open.
        let index = index.clone();
        let url = p.index_url.to_string();
        use_effect_with((), move |_| loader::load_index(url, index));
    }

    use_focus_on_open(input_ref.clone(), state.open);
    use_outside_click(root_ref.clone(), state.clone());

    let panel = build_panel(index.searcher(), &state.query);
    let first_link = panel.first_permalink().map(str::to_string);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !state.open {
                let mut next = (*state).clone();
                next.open();
                state.set(next);
            }
        })
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = (*state).clone();
            next.close();
            state.set(next);
        })
    };
    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let mut next = (*state).clone();
                next.set_query(input.value());
                state.set(next);
            }
        })
    };
    let on_keydown = keydown_handler(state.clone(), first_link);
    let stop_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let show_panel = state.open && panel != PanelView::Hidden;

    html! {
        <div class="header-search" ref={root_ref}>
            <button
                id="globalSearch"
                type="button"
                class={classes!("search-button", state.open.then_some("search-expanded"))}
                aria-expanded={state.open.to_string()}
                onclick={on_toggle}
            >
                <span class="search-icon">{"⌕"}</span>
            </button>
            <input
                id="searchInput"
                ref={input_ref}
                type="search"
                placeholder="Search"
                autocomplete="off"
                aria-label="Search this site"
                value={state.query.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                onclick={stop_click.clone()}
            />
            <button id="searchClose" type="button" class="search-close" onclick={on_close}>
                {"×"}
            </button>
            <div
                id="searchResults"
                class={classes!("search-results", show_panel.then_some("show"))}
                onclick={stop_click}
            >
                { panel_html(&panel) }
            </div>
        </div>
    }
}

pub(super) fn panel_html(panel: &PanelView) -> Html {
    match panel {
        PanelView::Hidden => Html::default(),
        PanelView::NoResults => html! {
            <div class="search-no-results">{"No results found"}</div>
        },
        PanelView::Results(results) => html! {
            <>{ for results.iter().map(result_html) }</>
        },
    }
}

fn result_html(result: &ResultView) -> Html {
    html! {
        <div class="search-result-item">
            <a href={result.permalink.clone()} class="search-result-link">
                <div class="search-result-title">{ spans_html(&result.title) }</div>
                <div class="search-result-snippet">{ spans_html(&result.snippet) }</div>
                if !result.tags.is_empty() {
                    <div class="search-result-tags">{ result.tags.join(", ") }</div>
                }
            </a>
        </div>
    }
}

fn spans_html(spans: &[Span]) -> Html {
    html! {
        <>
        { for spans.iter().map(|span| {
            if span.emphasized {
                html! { <mark>{ span.text.clone() }</mark> }
            } else {
                html! { { span.text.clone() } }
            }
        }) }
        </>
    }
}
