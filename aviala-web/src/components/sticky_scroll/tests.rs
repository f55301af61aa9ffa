use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;

use super::{Props, StickyScroll};

fn render(props: Props) -> String {
    block_on(LocalServerRenderer::<StickyScroll>::with_props(props).render())
}

fn four_sections() -> Children {
    Children::new(
        (0..4)
            .map(|i| html! { <p>{ format!("section {i}") }</p> })
            .collect(),
    )
}

#[test]
fn initial_render_applies_the_bootstrap_state() {
    let html = render(Props {
        children: four_sections(),
        config: aviala_search::ScrollConfig::default(),
        header: html! { <span>{"site header"}</span> },
        footer: html! { <span>{"site footer"}</span> },
    });

    assert!(
        html.contains("header-container first"),
        "header should start in first mode: {html}"
    );
    assert!(
        !html.contains("homeScroll"),
        "header must not start compacted: {html}"
    );
    assert_eq!(
        html.matches("sticky-scroll-section active").count(),
        1,
        "exactly the first section is active: {html}"
    );
    assert!(
        html.contains("<footer class=\"hidden\">"),
        "footer should start hidden: {html}"
    );
}

#[test]
fn sections_render_in_order_with_their_content() {
    let html = render(Props {
        children: four_sections(),
        config: aviala_search::ScrollConfig::default(),
        header: Html::default(),
        footer: Html::default(),
    });
    for i in 0..4 {
        assert!(html.contains(&format!("section {i}")), "{html}");
    }
    let first = html.find("section 0").unwrap_or(usize::MAX);
    let last = html.find("section 3").unwrap_or(0);
    assert!(first < last, "sections must keep document order: {html}");
}
