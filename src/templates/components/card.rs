use crate::domain::Property;
use crate::templates::format::{detail_href, format_price};
use maud::{html, Markup};

/// One listing card. The host opens the detail modal for
/// `data-property-id` when the card is clicked.
pub fn property_card(p: &Property) -> Markup {
    html! {
        div class="card-item" data-property-id=(p.id) {
            img src=(p.image_url) alt=(p.name);
            div class="card-body" {
                div class="card-title" { (p.name) }
                div class="card-meta" {
                    (p.property_type) " • " (p.area) " m² • " (p.beds) " rooms"
                }
                div class="card-price" { (format_price(p.price)) }
                div style="margin-top:8px" {
                    a class="btn ghost" href=(detail_href(&p.id)) { "Details" }
                }
            }
        }
    }
}
