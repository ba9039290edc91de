use maud::{html, Markup};

pub mod card;
pub mod modal;
pub mod pagination;
pub mod popup;

pub use card::property_card;
pub use modal::modal_content;
pub use pagination::pagination_controls;
pub use popup::marker_popup;

pub fn no_results() -> Markup {
    html! {
        div style="padding:18px" { "No listings match these filters." }
    }
}

pub fn button(label: &str, id: &str, class: &str) -> Markup {
    html! {
        button id=(id) class=(class) { (label) }
    }
}
