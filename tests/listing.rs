use chrono::NaiveDate;
use markethub_admin::listing::codec::merge_query_params;
use markethub_admin::listing::{DEFAULT_PAGE_SIZE, ListController, ListQuery, Page};
use markethub_admin::pagination::{PageLink, page_links};

#[test]
fn test_parse_empty_query_string_fills_defaults() {
    let query = ListQuery::parse("");
    assert_eq!(query.search_term, "");
    assert_eq!(query.created_at, None);
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_round_trip_law_holds_for_reachable_states() {
    let states = [
        ListQuery::default(),
        ListQuery::new().with_search("james"),
        ListQuery::new().paginate(12, 25),
        ListQuery::new()
            .with_search("space separated words")
            .with_created_at(NaiveDate::from_ymd_opt(2025, 7, 1))
            .paginate(3, 10),
    ];

    for state in states {
        let serialized = state.to_query_string();
        assert_eq!(ListQuery::parse(&serialized), state, "failed for {serialized}");
    }
}

#[test]
fn test_malformed_created_at_fails_open() {
    let query = ListQuery::parse("createdAt=not-a-date&page=2");
    assert_eq!(query.created_at, None);
    assert_eq!(query.page, 2);
}

#[test]
fn test_malformed_page_and_limit_fail_open() {
    let query = ListQuery::parse("page=zero&limit=-3");
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_absent_filters_are_omitted_from_canonical_form() {
    let serialized = ListQuery::default().to_query_string();
    assert_eq!(serialized, "page=1&limit=10");
}

#[test]
fn test_merge_keeps_unrelated_params_and_deletes_cleared_keys() {
    let merged = merge_query_params(
        "tab=services&searchTerm=old&createdAt=2025-07-01&page=4",
        &[
            ("searchTerm", Some("new".to_string())),
            ("createdAt", None),
            ("page", Some("1".to_string())),
        ],
    );
    assert_eq!(merged, "tab=services&searchTerm=new&page=1");
}

#[test]
fn test_go_to_page_is_clamped() {
    let mut controller: ListController<u32> = ListController::new(ListQuery::default());
    let ticket = controller.begin_fetch();
    controller.complete_fetch(ticket, Ok(Page::new(vec![1, 2, 3], 5)));

    assert!(controller.go_to_page(4));
    assert_eq!(controller.query().page, 4);

    assert!(!controller.go_to_page(0));
    assert!(!controller.go_to_page(6));
    assert_eq!(controller.query().page, 4);
}

#[test]
fn test_search_always_resets_page() {
    let mut controller: ListController<u32> = ListController::new(ListQuery::default());
    let ticket = controller.begin_fetch();
    controller.complete_fetch(ticket, Ok(Page::new(vec![1], 9)));
    controller.go_to_page(7);

    controller.set_search("refund");

    assert_eq!(controller.query().page, 1);
    assert_eq!(controller.query().search_term, "refund");
}

#[test]
fn test_stale_response_cannot_overwrite_fresh_one() {
    let mut controller: ListController<&str> = ListController::new(ListQuery::default());
    let first = controller.begin_fetch();
    controller.complete_fetch(first, Ok(Page::new(vec!["seed"], 5)));

    // A page-1 fetch goes out; before it resolves the user clicks page 2.
    let slow = controller.begin_fetch();
    controller.go_to_page(2);
    let fast = controller.begin_fetch();

    assert!(controller.complete_fetch(fast, Ok(Page::new(vec!["page-2"], 5))));
    assert!(!controller.complete_fetch(slow, Ok(Page::new(vec!["page-1"], 5))));

    assert_eq!(controller.records(), ["page-2"]);
    assert_eq!(controller.query().page, 2);
}

#[test]
fn test_selection_resets_on_every_navigation() {
    let mut controller: ListController<&str> = ListController::new(ListQuery::default());
    let ticket = controller.begin_fetch();
    controller.complete_fetch(ticket, Ok(Page::new(vec!["a", "b"], 3)));

    controller.toggle_selected("c1");
    controller.toggle_selected("c2");
    controller.toggle_selected("c1");
    assert!(controller.is_selected("c2"));
    assert!(!controller.is_selected("c1"));

    controller.go_to_page(2);
    assert!(controller.selected_ids().is_empty());
}

#[test]
fn test_failed_fetch_produces_visible_error_state() {
    let mut controller: ListController<u32> = ListController::new(ListQuery::default());
    let ticket = controller.begin_fetch();
    assert!(controller.is_loading());

    controller.complete_fetch(ticket, Err("boom".to_string()));

    assert!(!controller.is_loading());
    assert_eq!(controller.error(), Some("boom"));

    // The next successful fetch clears the error.
    let ticket = controller.begin_fetch();
    controller.complete_fetch(ticket, Ok(Page::new(vec![1], 1)));
    assert_eq!(controller.error(), None);
}

#[test]
fn test_single_page_hides_page_links_but_keeps_navigation_safe() {
    let mut controller: ListController<u32> = ListController::new(ListQuery::default());
    let ticket = controller.begin_fetch();
    controller.complete_fetch(ticket, Ok(Page::new(vec![1], 1)));

    assert!(controller.page_links().is_empty());
    assert!(!controller.next());
    assert!(!controller.previous());
}

#[test]
fn test_page_links_elide_the_middle_of_long_ranges() {
    let links = page_links(20, 10);
    assert_eq!(links.first(), Some(&PageLink::Number(1)));
    assert_eq!(links.last(), Some(&PageLink::Number(20)));
    assert!(links.contains(&PageLink::Gap));
    assert!(links.contains(&PageLink::Number(10)));
    assert!(!links.contains(&PageLink::Number(5)));
}
