//! Raw-row pagination.
//!
//! Returns successive fixed-size windows of a trip table. The caller drives
//! iteration with explicit yes/no decisions in a loop; nothing here recurses,
//! so arbitrarily large tables cannot exhaust the stack.

use explorer_core::models::TripRecord;

/// One window of raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// The rows in this window, in source order. Empty past the end.
    pub rows: &'a [TripRecord],
    /// Start index for the next call.
    pub next_index: usize,
    /// `false` once this page reaches the end of the table.
    pub has_more: bool,
}

/// Return the rows in `[start_index, start_index + page_size)`, clipped to
/// the table length.
///
/// When fewer than `page_size` rows remain the page shrinks to exactly the
/// remainder rather than overshooting. `start_index >= rows.len()` yields an
/// empty page with `has_more = false` — the terminal condition.
pub fn next_page(rows: &[TripRecord], start_index: usize, page_size: usize) -> Page<'_> {
    let start = start_index.min(rows.len());
    let end = start_index.saturating_add(page_size).min(rows.len());
    Page {
        rows: &rows[start..end],
        next_index: end,
        has_more: end < rows.len(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
