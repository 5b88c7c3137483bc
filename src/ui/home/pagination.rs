// SPDX-License-Identifier: MPL-2.0
//! Slider paging.
//!
//! The slider shows the catalog minus its first record (which is featured in
//! the banner), cut into windows of `page_size` items. Advancing is refused
//! while a slide transition is running, so requests arriving mid-animation
//! are dropped rather than queued.
//!
//! The last reachable index is `floor((total - 1) / page_size) - 1`. A
//! trailing partial window is therefore never shown, and a catalog that fits
//! in one window keeps the index at 0.

/// Number of tiles per slider window.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Current slider window and transition flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub current_index: usize,
    pub is_transitioning: bool,
}

/// Highest index `advance` will move to before wrapping.
///
/// Negative when the catalog has fewer than `page_size + 1` items.
pub fn max_index(total_items: usize, page_size: usize) -> i64 {
    let page_size = page_size.max(1) as i64;
    (total_items as i64 - 1).div_euclid(page_size) - 1
}

/// Requests the next window.
///
/// No-op while a transition is running. Otherwise marks the state as
/// transitioning and moves to the next index, wrapping to 0 after
/// [`max_index`].
#[must_use]
pub fn advance(state: PaginationState, total_items: usize, page_size: usize) -> PaginationState {
    if state.is_transitioning {
        return state;
    }

    let last = max_index(total_items, page_size);
    let next_index = if state.current_index as i64 >= last {
        0
    } else {
        state.current_index + 1
    };

    PaginationState {
        current_index: next_index,
        is_transitioning: true,
    }
}

/// Clears the transition flag once the outgoing window finished leaving.
#[must_use]
pub fn on_transition_complete(state: PaginationState) -> PaginationState {
    PaginationState {
        is_transitioning: false,
        ..state
    }
}

/// Items shown for `index`: the catalog without its first record, windowed.
///
/// Out-of-range windows are clamped and may be shorter than `page_size` or
/// empty.
pub fn window<T>(items: &[T], index: usize, page_size: usize) -> &[T] {
    let rest = items.get(1..).unwrap_or(&[]);
    let start = index.saturating_mul(page_size).min(rest.len());
    let end = start.saturating_add(page_size).min(rest.len());
    &rest[start..end]
}
