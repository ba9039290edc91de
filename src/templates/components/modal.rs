use crate::domain::Property;
use crate::templates::format::{detail_href, format_price};
use maud::{html, Markup};

pub fn modal_content(p: &Property) -> Markup {
    html! {
        div style="display:flex;gap:12px;flex-wrap:wrap" {
            img src=(p.image_url) style="width:45%;min-width:260px;border-radius:8px;object-fit:cover";
            div style="flex:1" {
                h2 style="margin:0 0 8px" { (p.name) }
                p style="margin:4px 0" { b { "Price:" } " " (format_price(p.price)) }
                p style="margin:4px 0" { b { "Area:" } " " (p.area) " m²" }
                p style="margin:4px 0" { b { "Type:" } " " (p.property_type) }
                p style="margin:4px 0" { b { "Rooms:" } " " (p.beds) }
                p style="margin:8px 0" { (p.description) }
                div style="display:flex;gap:8px;margin-top:12px" {
                    a class="btn primary" href="#" { "Contact" }
                    a class="btn ghost" href=(detail_href(&p.id)) { "Full page" }
                }
            }
        }
    }
}
