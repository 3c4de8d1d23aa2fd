use super::*;

#[test]
fn status_filters_start_with_all() {
    let filters = status_filters();
    assert_eq!(filters[0], (None, "All"));
    assert!(filters.iter().any(|(value, _)| *value == Some("completed")));
}

#[test]
fn pager_hidden_for_single_page() {
    assert!(!pager_visible(&Pagination { page: 1, pages: 1, total: 3 }));
    assert!(!pager_visible(&Pagination::default()));
}

#[test]
fn pager_visible_for_multiple_pages() {
    assert!(pager_visible(&Pagination { page: 1, pages: 2, total: 12 }));
}

#[test]
fn clamp_page_keeps_value_in_range() {
    assert_eq!(clamp_page(0, 5), 1);
    assert_eq!(clamp_page(3, 5), 3);
    assert_eq!(clamp_page(9, 5), 5);
}

#[test]
fn clamp_page_handles_zero_pages() {
    assert_eq!(clamp_page(1, 0), 1);
}
