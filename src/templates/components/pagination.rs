use maud::{html, Markup};

/// One button per page; the current one is styled as primary.
pub fn pagination_controls(current: usize, total_pages: usize) -> Markup {
    html! {
        @for i in 1..=total_pages {
            button
                class=(if i == current { "btn primary" } else { "btn ghost" })
                data-page=(i)
                aria-current=[(i == current).then_some("page")]
            { (i) }
        }
    }
}
