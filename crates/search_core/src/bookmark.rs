use crate::SearchItem;

/// Flip the `saved` flag of the first item whose id matches.
///
/// Returns `false` (and leaves `items` untouched) when no item matches.
pub fn toggle_in_place(items: &mut [SearchItem], id: &str) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.saved = !item.saved;
            true
        }
        None => false,
    }
}

/// Return a copy of `items` with the saved flag of `target` flipped.
///
/// Only the flag of the entry already in the list changes; `target`'s other
/// fields are ignored. A target that is not in the list yields an unchanged copy.
pub fn toggle_saved(items: &[SearchItem], target: &SearchItem) -> Vec<SearchItem> {
    let mut next = items.to_vec();
    toggle_in_place(&mut next, &target.id);
    next
}
