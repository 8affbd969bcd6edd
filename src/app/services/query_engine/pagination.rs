//! Fixed-size pagination over filtered player lists

use serde::{Deserialize, Serialize};

use crate::app::models::Player;
use crate::constants::ROWS_PER_PAGE;
use crate::{Result, RosterError};

/// A request for one page of results. Page numbers are 1-based; the page
/// size is the fixed [`ROWS_PER_PAGE`] constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
}

impl PageRequest {
    /// Create a request, normalising zero to the first page
    pub fn new(page: usize) -> Self {
        Self { page: page.max(1) }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of players with navigation metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// Players on this page, in list order
    pub players: Vec<&'a Player>,

    /// The page actually served (may differ from the request when clamped)
    pub page: usize,

    /// Total pages for the list; at least 1 even when the list is empty
    pub total_pages: usize,

    /// Total players across all pages
    pub total_players: usize,

    /// 1-based index of the first player on this page; 0 when empty
    pub start_index: usize,

    /// 1-based index of the last player on this page; 0 when empty
    pub end_index: usize,

    pub has_previous: bool,
    pub has_next: bool,
}

/// Serve one page of a player list, clamping the requested page into range.
///
/// This is the reference behavior: a request past the last page serves the
/// last page, a request before the first serves the first. Callers wanting
/// a hard failure instead use [`paginate_strict`].
pub fn paginate<'a>(players: &[&'a Player], request: &PageRequest) -> Page<'a> {
    let total_players = players.len();
    let total_pages = total_pages_for(total_players);
    let page = request.page.clamp(1, total_pages);

    build_page(players, page, total_pages, total_players)
}

/// Serve one page, rejecting out-of-range requests with
/// [`RosterError::PageOutOfRange`].
pub fn paginate_strict<'a>(players: &[&'a Player], request: &PageRequest) -> Result<Page<'a>> {
    let total_players = players.len();
    let total_pages = total_pages_for(total_players);

    if request.page > total_pages {
        return Err(RosterError::PageOutOfRange {
            page: request.page,
            total_pages,
        });
    }

    Ok(build_page(players, request.page, total_pages, total_players))
}

fn total_pages_for(total_players: usize) -> usize {
    total_players.div_ceil(ROWS_PER_PAGE).max(1)
}

fn build_page<'a>(
    players: &[&'a Player],
    page: usize,
    total_pages: usize,
    total_players: usize,
) -> Page<'a> {
    let start = (page - 1) * ROWS_PER_PAGE;
    let end = (start + ROWS_PER_PAGE).min(total_players);

    Page {
        players: players[start..end].to_vec(),
        page,
        total_pages,
        total_players,
        start_index: if total_players == 0 { 0 } else { start + 1 },
        end_index: end,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}
