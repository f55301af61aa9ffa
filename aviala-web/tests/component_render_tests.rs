use aviala_web::app::App;
use aviala_web::components::search_widget::{Props as SearchProps, SearchWidget};
use futures::executor::block_on;
use yew::{AttrValue, LocalServerRenderer};

#[test]
fn app_renders_header_search_and_scroll_sections() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("globalSearch"), "{html}");
    assert!(html.contains("sticky-scroll-container"), "{html}");
    assert_eq!(
        html.matches("sticky-scroll-section").count(),
        4,
        "home page stacks four sections: {html}"
    );
    assert!(
        html.contains("header-container first"),
        "header starts in first mode: {html}"
    );
    assert!(
        html.contains("<footer class=\"hidden\">"),
        "footer starts hidden: {html}"
    );
}

#[test]
fn search_widget_accepts_a_custom_index_url() {
    let html = block_on(
        LocalServerRenderer::<SearchWidget>::with_props(SearchProps {
            index_url: AttrValue::from("/search/index.json"),
        })
        .render(),
    );
    // The URL only matters at fetch time; the markup contract is unchanged.
    assert!(html.contains("searchInput"), "{html}");
    assert!(html.contains("searchResults"), "{html}");
}
