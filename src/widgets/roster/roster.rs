//! Roster panel state and actions.
//!
//! `RosterState` is the single piece of pagination state the view owns:
//! the current offset (plus the fixed page limit). All transitions clamp so
//! the offset never goes negative and never passes the end of the
//! collection once the total is known.

use crate::api::PlayersPage;
use crate::core::query::PageKey;

/// Page size used when the caller does not specify one.
pub const DEFAULT_LIMIT: u32 = 20;

/// Pagination state of the roster view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterState {
    offset: u32,
    limit: u32,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}

impl RosterState {
    pub fn new(limit: u32, initial_offset: u32) -> Self {
        Self {
            offset: initial_offset,
            limit,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Cache/fetch key for the page currently of interest.
    pub fn key(&self) -> PageKey {
        PageKey {
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0
    }

    /// Next is enabled only once a response proves there are more players.
    /// No response yet means no known total, which means no Next; a zero
    /// limit would step in place forever, so it also disables Next.
    pub fn can_next(&self, page: Option<&PlayersPage>) -> bool {
        let Some(page) = page else {
            return false;
        };
        self.limit > 0 && self.offset + self.limit < page.total
    }

    /// Step back one page, flooring at offset 0.
    pub fn prev_page(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    /// Step forward one page. No-op unless [`can_next`](Self::can_next)
    /// holds for the given response.
    pub fn next_page(&mut self, page: Option<&PlayersPage>) {
        if self.can_next(page) {
            self.offset += self.limit;
        }
    }

    /// Re-clamp the offset after a response reveals the collection size.
    /// If the collection shrank past the current offset, snap back to the
    /// start of the last non-empty page.
    pub fn reconcile(&mut self, total: u32) {
        if total == 0 {
            self.offset = 0;
            return;
        }
        if self.offset >= total {
            self.offset = if self.limit > 0 {
                ((total - 1) / self.limit) * self.limit
            } else {
                total - 1
            };
        }
    }
}

/// Interactions reported by one roster render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    PrevPage,
    NextPage,
    Select(String),
}

/// Roster panel result - all interactions via actions
#[derive(Debug, Default)]
pub struct RosterActions {
    pub actions: Vec<RosterAction>,
}

impl RosterActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an action to be applied by the app after rendering.
    pub fn send(&mut self, action: RosterAction) {
        self.actions.push(action);
    }
}

/// Header line shown above the list.
pub fn header_line(page: &PlayersPage) -> String {
    format!("Showing {} of {} players", page.count, page.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u32) -> PlayersPage {
        PlayersPage {
            players: Vec::new(),
            count: 0,
            total,
            offset: 0,
            limit: Some(10),
        }
    }

    #[test]
    fn test_prev_disabled_only_at_zero() {
        let mut state = RosterState::new(10, 0);
        assert!(!state.can_prev());
        state.next_page(Some(&page(25)));
        assert!(state.can_prev());
    }

    #[test]
    fn test_next_disabled_without_response() {
        let state = RosterState::new(10, 0);
        assert!(!state.can_next(None));
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let state = RosterState::new(10, 20);
        // 20 + 10 >= 25
        assert!(!state.can_next(Some(&page(25))));
        let earlier = RosterState::new(10, 10);
        assert!(earlier.can_next(Some(&page(25))));
    }

    #[test]
    fn test_next_advances_by_exactly_limit() {
        let mut state = RosterState::new(10, 0);
        state.next_page(Some(&page(25)));
        assert_eq!(state.offset(), 10);
        state.next_page(Some(&page(25)));
        assert_eq!(state.offset(), 20);
        // Disabled now - stays put
        state.next_page(Some(&page(25)));
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let mut state = RosterState::new(10, 5);
        state.prev_page();
        assert_eq!(state.offset(), 0);
        state.prev_page();
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_empty_collection_disables_both() {
        let state = RosterState::new(10, 0);
        assert!(!state.can_prev());
        assert!(!state.can_next(Some(&page(0))));
    }

    #[test]
    fn test_zero_limit_disables_next() {
        let state = RosterState::new(0, 0);
        assert!(!state.can_next(Some(&page(25))));
    }

    #[test]
    fn test_reconcile_snaps_to_last_page() {
        let mut state = RosterState::new(10, 40);
        state.reconcile(25);
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn test_reconcile_handles_exact_multiple() {
        let mut state = RosterState::new(10, 30);
        state.reconcile(30);
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn test_reconcile_empty_collection() {
        let mut state = RosterState::new(10, 40);
        state.reconcile(0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_reconcile_keeps_valid_offset() {
        let mut state = RosterState::new(10, 10);
        state.reconcile(25);
        assert_eq!(state.offset(), 10);
    }

    #[test]
    fn test_key_tracks_state() {
        let state = RosterState::new(10, 20);
        let key = state.key();
        assert_eq!(key.limit, 10);
        assert_eq!(key.offset, 20);
    }

    #[test]
    fn test_default_limit() {
        let state = RosterState::default();
        assert_eq!(state.limit(), 20);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_header_line_format() {
        let p = PlayersPage {
            players: vec!["A".to_string(), "B".to_string()],
            count: 2,
            total: 25,
            offset: 0,
            limit: Some(10),
        };
        assert_eq!(header_line(&p), "Showing 2 of 25 players");

        let empty = page(0);
        assert_eq!(header_line(&empty), "Showing 0 of 0 players");
    }
}
