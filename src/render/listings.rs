use crate::app::state::AppState;
use crate::app::surfaces::{PageSurface, Region};
use crate::templates::components::{no_results, pagination_controls, property_card};
use crate::templates::format::format_number;
use maud::html;

/// Cards for the current page, the page buttons, and the result count.
pub fn render<P: PageSurface>(state: &AppState, page: &mut P) {
    let items = state.page_items();

    let listings = if !items.is_empty() {
        html! {
            @for p in items {
                (property_card(p))
            }
        }
    } else if state.store.is_loaded() {
        no_results()
    } else {
        // Still waiting on the snapshot: nothing to say yet.
        html! {}
    };
    page.render(Region::Listings, listings);

    page.render(
        Region::Pagination,
        pagination_controls(state.pagination.current, state.total_pages()),
    );

    page.render(
        Region::ResultsInfo,
        html! { (format_number(state.filtered.len() as f64)) " results" },
    );
}
