//! Integration tests for owner-scoped filtered queries.

mod test_helpers;

use reverie::ops;
use reverie::sentiment::Sentiment;
use reverie::EntryFilter;
use test_helpers::{fixed_date, fixed_date_plus, open_test_db, OTHER_OWNER, TEST_OWNER};

#[test]
fn test_owner_isolation_under_every_filter_combination() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "I am happy about work", "work", fixed_date()).unwrap();
    ops::save_entry(&db, OTHER_OWNER, "I am happy about work", "work", fixed_date()).unwrap();

    let filters = vec![
        EntryFilter::for_owner(TEST_OWNER),
        EntryFilter::for_owner(TEST_OWNER).with_sentiment(Sentiment::Positive),
        EntryFilter::for_owner(TEST_OWNER).with_date_range(fixed_date(), fixed_date_plus(1)),
        EntryFilter::for_owner(TEST_OWNER).with_tags(["work"]),
        EntryFilter::for_owner(TEST_OWNER).with_search("happy"),
        EntryFilter::for_owner(TEST_OWNER)
            .with_sentiment(Sentiment::Positive)
            .with_date_range(fixed_date(), fixed_date_plus(1))
            .with_tags(["work"])
            .with_search("work"),
    ];

    for filter in filters {
        let entries = ops::fetch_entries(&db, &filter).unwrap();
        assert!(
            entries.iter().all(|e| e.owner == TEST_OWNER),
            "filter {:?} leaked a foreign entry",
            filter
        );
        assert_eq!(entries.len(), 1);
    }
}

#[test]
fn test_filter_conjunction() {
    let (_temp_dir, db) = open_test_db();

    // E1: tag=work, Positive, day 0. E2: tag=home, Positive, day 1.
    let e1 = ops::save_entry(&db, TEST_OWNER, "Work went great", "work", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "Home was great too", "home", fixed_date_plus(1)).unwrap();

    let filter = EntryFilter::for_owner(TEST_OWNER)
        .with_sentiment(Sentiment::Positive)
        .with_tags(["work"]);
    let entries = ops::fetch_entries(&db, &filter).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, e1.id);
}

#[test]
fn test_sentiment_filter() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "What a wonderful morning", "", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "A terrible, horrible evening", "", fixed_date_plus(1))
        .unwrap();
    ops::save_entry(&db, TEST_OWNER, "Did the groceries", "", fixed_date_plus(2)).unwrap();

    for (sentiment, expected) in [
        (Sentiment::Positive, "What a wonderful morning"),
        (Sentiment::Negative, "A terrible, horrible evening"),
        (Sentiment::Neutral, "Did the groceries"),
    ] {
        let entries = ops::fetch_entries(
            &db,
            &EntryFilter::for_owner(TEST_OWNER).with_sentiment(sentiment),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, expected);
    }
}

#[test]
fn test_date_range_is_inclusive() {
    let (_temp_dir, db) = open_test_db();

    for day in 0..4 {
        ops::save_entry(&db, TEST_OWNER, "entry", "", fixed_date_plus(day)).unwrap();
    }

    let entries = ops::fetch_entries(
        &db,
        &EntryFilter::for_owner(TEST_OWNER).with_date_range(fixed_date_plus(1), fixed_date_plus(2)),
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].created_date, fixed_date_plus(1));
    assert_eq!(entries[1].created_date, fixed_date_plus(2));
}

#[test]
fn test_tag_filter_is_exact_membership() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "about my heart", "heart", fixed_date()).unwrap();
    let arty =
        ops::save_entry(&db, TEST_OWNER, "painted today", "art,craft", fixed_date_plus(1)).unwrap();

    let entries =
        ops::fetch_entries(&db, &EntryFilter::for_owner(TEST_OWNER).with_tags(["art"])).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, arty.id);
}

#[test]
fn test_search_matches_body_and_tags() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "Ran along the canal", "", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "Rest day", "running", fixed_date_plus(1)).unwrap();
    ops::save_entry(&db, TEST_OWNER, "Read a book", "quiet", fixed_date_plus(2)).unwrap();

    let entries = ops::fetch_entries(
        &db,
        &EntryFilter::for_owner(TEST_OWNER).with_search("RAN"),
    )
    .unwrap();

    // Case-insensitive, body or tags: "Ran along..." and tag "running"
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_results_ordered_oldest_first() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "third", "", fixed_date_plus(5)).unwrap();
    ops::save_entry(&db, TEST_OWNER, "first", "", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "second", "", fixed_date_plus(2)).unwrap();

    let entries = ops::fetch_entries(&db, &EntryFilter::for_owner(TEST_OWNER)).unwrap();
    let bodies: Vec<&str> = entries.iter().map(|e| e.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[test]
fn test_available_tags_distinct_sorted_and_owner_scoped() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "one", "work,gratitude", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "two", "work,health", fixed_date_plus(1)).unwrap();
    ops::save_entry(&db, OTHER_OWNER, "other", "secret", fixed_date()).unwrap();

    let tags = ops::available_tags(&db, TEST_OWNER, None).unwrap();
    assert_eq!(tags, vec!["gratitude", "health", "work"]);
}

#[test]
fn test_available_tags_respects_date_window() {
    let (_temp_dir, db) = open_test_db();

    ops::save_entry(&db, TEST_OWNER, "one", "early", fixed_date()).unwrap();
    ops::save_entry(&db, TEST_OWNER, "two", "late", fixed_date_plus(10)).unwrap();

    let tags = ops::available_tags(
        &db,
        TEST_OWNER,
        Some((fixed_date_plus(5), fixed_date_plus(15))),
    )
    .unwrap();
    assert_eq!(tags, vec!["late"]);
}
