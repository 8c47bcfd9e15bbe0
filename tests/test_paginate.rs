// Raw record paging tests
// Author: Gabriel Demetrios Lafis

mod common;

use bikeshare_explorer::{
    data::{Schema, TripTable},
    processing::{ProcessingError, RawPaginator, DEFAULT_PAGE_SIZE},
};

use common::seven_trips;

#[test]
fn test_pages_of_five_over_seven_rows() {
    let mut paginator = RawPaginator::new(seven_trips(), DEFAULT_PAGE_SIZE).unwrap();

    let first = paginator.next_page();
    assert_eq!(first.rows.len(), 5);
    assert_eq!(first.offset, 0);
    assert!(first.has_more);
    assert_eq!(first.rows[0].row, 0);

    let second = paginator.next_page();
    assert_eq!(second.rows.len(), 2);
    assert_eq!(second.offset, 5);
    assert!(!second.has_more);
    assert_eq!(second.rows[1].row, 6);

    let third = paginator.next_page();
    assert!(third.rows.is_empty());
    assert!(!third.has_more);

    // Exhaustion is stable, never wraps
    let fourth = paginator.next_page();
    assert!(fourth.rows.is_empty());
    assert_eq!(paginator.position(), 7);
}

#[test]
fn test_exact_multiple_of_page_size() {
    let mut paginator = RawPaginator::new(seven_trips(), 7).unwrap();

    let page = paginator.next_page();
    assert_eq!(page.rows.len(), 7);
    assert!(!page.has_more);
    assert!(!paginator.has_more());
}

#[test]
fn test_empty_table() {
    let mut paginator = RawPaginator::new(TripTable::new(Schema::basic()), 5).unwrap();

    let page = paginator.next_page();
    assert!(page.rows.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_zero_page_size_is_rejected() {
    assert!(matches!(
        RawPaginator::new(seven_trips(), 0),
        Err(ProcessingError::InvalidArgument(_))
    ));
}
