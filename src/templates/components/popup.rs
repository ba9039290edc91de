use crate::domain::Property;
use crate::templates::format::{detail_href, format_price};
use maud::{html, Markup};

pub fn marker_popup(p: &Property) -> Markup {
    html! {
        b { (p.name) }
        br;
        (p.property_type) " • " (p.area) " m²"
        br;
        b { (format_price(p.price)) }
        br;
        a href=(detail_href(&p.id)) { "Details" }
    }
}
