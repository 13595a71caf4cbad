//! Stateful list controller: the seam between a list screen's rendered table
//! and the remote collection behind it.
//!
//! The controller owns the current [`ListQuery`], the last applied
//! [`Page`], a client-local selection set and a fetch generation counter.
//! Fetches are tagged with the generation that produced them; a response
//! arriving after the query has moved on no longer matches and is discarded,
//! so a slow page-1 response can never overwrite page-2 data.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{ListQuery, Page};
use crate::pagination::{PageLink, page_links};

/// Tag handed out by [`ListController::begin_fetch`]; pairs a response with
/// the query state that produced the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

type Observer<T> = Box<dyn Fn(&ListQuery, &Page<T>)>;

pub struct ListController<T> {
    query: ListQuery,
    page: Page<T>,
    loading: bool,
    error: Option<String>,
    selection: HashSet<String>,
    generation: u64,
    observers: Vec<Observer<T>>,
}

impl<T> ListController<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            page: Page::default(),
            loading: false,
            error: None,
            selection: HashSet::new(),
            generation: 0,
            observers: Vec::new(),
        }
    }

    /// Builds a controller from the current address-bar query string.
    pub fn from_query_string(query_string: &str) -> Self {
        Self::new(ListQuery::parse(query_string))
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn records(&self) -> &[T] {
        &self.page.records
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last fetch failure, cleared by the next applied page.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Registers an observer notified with the query and the page after
    /// every applied change.
    pub fn subscribe(&mut self, observer: impl Fn(&ListQuery, &Page<T>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.query, &self.page);
        }
    }

    /// Any filter or navigation change: later responses to earlier requests
    /// are now stale, and per-page selections do not carry over.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.selection.clear();
        self.notify();
    }

    /// Applies a new search term. Always snaps back to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.query.search_term = term.trim().to_string();
        self.query.page = 1;
        self.invalidate();
    }

    /// Applies or clears the created-at day filter. Snaps back to page 1.
    pub fn set_created_at(&mut self, day: Option<NaiveDate>) {
        self.query.created_at = day;
        self.query.page = 1;
        self.invalidate();
    }

    /// Changes the page size. Snaps back to page 1; zero is ignored.
    pub fn set_limit(&mut self, limit: usize) {
        if limit == 0 {
            return;
        }
        self.query.limit = limit;
        self.query.page = 1;
        self.invalidate();
    }

    /// Navigates to page `n`. A target outside `1..=total_pages` is a
    /// no-op; everything but the page number is left untouched.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.page.total_pages {
            return false;
        }
        self.query.page = n;
        self.invalidate();
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.query.page + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.query.page.checked_sub(1) {
            Some(prev) => self.go_to_page(prev),
            None => false,
        }
    }

    /// Marks a fetch as in flight for the current query state.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies a fetch outcome. Returns `false` (leaving all state alone)
    /// when the ticket no longer matches the current query generation: the
    /// response answers a question the user is no longer asking.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<T>, String>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Page::new(page.records, page.total_pages);
                self.error = None;
            }
            Err(message) => {
                // Explicit error state; previous records stay visible.
                self.error = Some(message);
            }
        }
        self.notify();
        true
    }

    /// Page links to render under the table; empty when there is nothing to
    /// switch between.
    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page.total_pages, self.query.page)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Toggles a row. Returns the new selected state.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        if self.selection.remove(id) {
            false
        } else {
            self.selection.insert(id.to_string());
            true
        }
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selection.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_controller(total_pages: usize) -> ListController<&'static str> {
        let mut ctl = ListController::new(ListQuery::default());
        let ticket = ctl.begin_fetch();
        ctl.complete_fetch(ticket, Ok(Page::new(vec!["a", "b"], total_pages)));
        ctl
    }

    #[test]
    fn go_to_page_clamps_to_valid_range() {
        let mut ctl = loaded_controller(5);
        ctl.go_to_page(3);
        assert_eq!(ctl.query().page, 3);

        assert!(!ctl.go_to_page(0));
        assert!(!ctl.go_to_page(6));
        assert_eq!(ctl.query().page, 3);
    }

    #[test]
    fn next_and_previous_are_safe_on_single_page() {
        let mut ctl = loaded_controller(1);
        assert!(!ctl.next());
        assert!(!ctl.previous());
        assert_eq!(ctl.query().page, 1);
        assert!(ctl.page_links().is_empty());
    }

    #[test]
    fn search_resets_page_to_one() {
        let mut ctl = loaded_controller(5);
        ctl.go_to_page(4);
        ctl.set_search("  james  ");
        assert_eq!(ctl.query().page, 1);
        assert_eq!(ctl.query().search_term, "james");
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctl = loaded_controller(5);

        // Fetch for page 1 goes out, then the user navigates to page 2.
        let stale = ctl.begin_fetch();
        ctl.go_to_page(2);
        let fresh = ctl.begin_fetch();

        assert!(ctl.complete_fetch(fresh, Ok(Page::new(vec!["page2"], 5))));
        assert!(!ctl.complete_fetch(stale, Ok(Page::new(vec!["page1"], 5))));

        assert_eq!(ctl.records(), ["page2"]);
    }

    #[test]
    fn navigation_clears_selection() {
        let mut ctl = loaded_controller(5);
        ctl.toggle_selected("c1");
        ctl.toggle_selected("c2");
        assert_eq!(ctl.selected_ids().len(), 2);

        ctl.go_to_page(2);
        assert!(ctl.selected_ids().is_empty());

        ctl.toggle_selected("c3");
        ctl.set_created_at(NaiveDate::from_ymd_opt(2025, 7, 1));
        assert!(ctl.selected_ids().is_empty());
    }

    #[test]
    fn fetch_error_is_visible_and_clears_loading() {
        let mut ctl = loaded_controller(5);
        let ticket = ctl.begin_fetch();
        assert!(ctl.is_loading());

        ctl.complete_fetch(ticket, Err("connection refused".to_string()));
        assert!(!ctl.is_loading());
        assert_eq!(ctl.error(), Some("connection refused"));

        // Previous records are kept for the error state.
        assert_eq!(ctl.records().len(), 2);
    }

    #[test]
    fn observers_see_applied_pages() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut ctl: ListController<&str> = ListController::new(ListQuery::default());
        ctl.subscribe(move |query, page| {
            sink.borrow_mut().push((query.page, page.records.len()));
        });

        let ticket = ctl.begin_fetch();
        ctl.complete_fetch(ticket, Ok(Page::new(vec!["a"], 3)));
        ctl.go_to_page(2);

        assert_eq!(seen.borrow().as_slice(), &[(1, 1), (2, 1)]);
    }
}
