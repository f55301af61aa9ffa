pub mod search_widget;
pub mod sticky_scroll;
