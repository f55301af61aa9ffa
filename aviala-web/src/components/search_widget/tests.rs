use aviala_search::{Document, PanelView, SearchIndex, Searcher, build_panel};
use futures::executor::block_on;
use yew::prelude::*;
use yew::{AttrValue, LocalServerRenderer};

use super::view::{self, Props, SearchWidget};

fn guide_searcher() -> Searcher {
    Searcher::with_defaults(SearchIndex {
        docs: vec![Document {
            title: "Guide to Widgets".to_string(),
            contents: "This guide explains widgets in depth.".to_string(),
            permalink: "/guide".to_string(),
            tags: vec!["howto".to_string()],
        }],
    })
}

#[derive(Properties, PartialEq, Clone)]
struct ProbeProps {
    panel: PanelView,
}

#[function_component(PanelProbe)]
fn panel_probe(p: &ProbeProps) -> Html {
    view::panel_html(&p.panel)
}

fn render_panel(panel: PanelView) -> String {
    block_on(LocalServerRenderer::<PanelProbe>::with_props(ProbeProps { panel }).render())
}

#[test]
fn widget_renders_closed_with_the_dom_contract_ids() {
    let html = block_on(
        LocalServerRenderer::<SearchWidget>::with_props(Props {
            index_url: AttrValue::from("/index.json"),
        })
        .render(),
    );
    for id in ["globalSearch", "searchInput", "searchClose", "searchResults"] {
        assert!(html.contains(id), "expected element id {id} in: {html}");
    }
    assert!(
        !html.contains("search-expanded"),
        "widget should start closed: {html}"
    );
    assert!(
        !html.contains("class=\"search-results show\""),
        "panel should start hidden: {html}"
    );
}

#[test]
fn results_panel_renders_highlighted_title_snippet_and_tags() {
    let searcher = guide_searcher();
    let html = render_panel(build_panel(Some(&searcher), "widget"));
    assert!(
        html.contains("<mark>Widget</mark>"),
        "title highlight missing: {html}"
    );
    assert!(html.contains("search-result-snippet"), "{html}");
    assert!(html.contains("href=\"/guide\""), "{html}");
    assert!(html.contains("howto"), "tags should render: {html}");
}

#[test]
fn zero_matches_render_the_explicit_no_results_message() {
    let searcher = guide_searcher();
    let html = render_panel(build_panel(Some(&searcher), "qqzzxx"));
    assert!(html.contains("search-no-results"), "{html}");
    assert!(html.contains("No results found"), "{html}");
}

#[test]
fn hidden_panel_renders_nothing() {
    let html = render_panel(PanelView::Hidden);
    assert!(!html.contains("search-result"), "{html}");
    assert!(!html.contains("No results found"), "{html}");
}

#[test]
fn tags_block_is_omitted_for_untagged_documents() {
    let searcher = Searcher::with_defaults(SearchIndex {
        docs: vec![Document {
            title: "Widget".to_string(),
            contents: "widget".to_string(),
            permalink: "/w".to_string(),
            tags: vec![],
        }],
    });
    let html = render_panel(build_panel(Some(&searcher), "widget"));
    assert!(!html.contains("search-result-tags"), "{html}");
}
