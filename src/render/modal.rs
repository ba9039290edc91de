use crate::app::state::AppState;
use crate::app::surfaces::{PageSurface, Region};
use crate::templates::components::modal_content;

/// Shows the detail modal for `id`, looked up in the full store so a
/// property filtered out since its marker was clicked still opens.
/// Unknown ids leave the page untouched and return `false`.
pub fn open<P: PageSurface>(state: &mut AppState, page: &mut P, id: &str) -> bool {
    let Some(p) = state.store.find(id) else {
        return false;
    };

    page.render(Region::ModalContent, modal_content(p));
    page.set_modal_visible(true);
    state.modal = Some(p.id.clone());
    true
}

pub fn close<P: PageSurface>(state: &mut AppState, page: &mut P) {
    if state.modal.take().is_some() {
        page.set_modal_visible(false);
    }
}
