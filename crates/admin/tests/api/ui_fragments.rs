use crate::helpers::{mock_event, mock_page, spawn_app, MockEventRepo};
use events_admin::FetchError;
use std::sync::Arc;

/// Empty first page renders the empty-state message, not the table
#[tokio::test]
async fn empty_page_renders_empty_state() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .withf(|query| query.page == 1)
        .times(1)
        .returning(|_| Ok(mock_page(vec![], 1)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (status, html) = test_app.get_html("/fragments/events?page=1").await;

    assert!(status.is_success());
    assert!(html.contains("No events found"));
    assert!(!html.contains("<table"));
    assert!(!html.contains("Loading..."));
}

/// One body row per event, in response order
#[tokio::test]
async fn rows_render_in_response_order() {
    let mut events = MockEventRepo::new();
    events.expect_get_all_events().times(1).returning(|_| {
        Ok(mock_page(
            vec![
                mock_event(31, "Welcome week"),
                mock_event(12, "Hackathon"),
                mock_event(47, "Graduation"),
            ],
            2,
        ))
    });

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events?page=1").await;

    assert!(html.contains("<table"));
    assert_eq!(html.matches(r#"class="event-row""#).count(), 3);

    let first = html.find("Welcome week").unwrap();
    let second = html.find("Hackathon").unwrap();
    let third = html.find("Graduation").unwrap();
    assert!(first < second && second < third);

    assert!(html.contains(r#"href="/events/12""#));
    assert!(html.contains(r#"href="/events/12/update""#));
    assert!(html.contains(r#"hx-get="/fragments/dialogs/delete-event/47""#));
    assert!(html.contains("About Hackathon"));
    assert!(html.contains("2002-07-06"));
}

/// Failure message is shown verbatim in place of the table
#[tokio::test]
async fn fetch_failure_renders_message() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .times(1)
        .returning(|_| Err(FetchError::new("Network error")));

    let test_app = spawn_app(Arc::new(events)).await;
    let (status, html) = test_app.get_html("/fragments/events?page=2&max_page=3").await;

    assert!(status.is_success());
    assert!(html.contains("Network error"));
    assert!(!html.contains("<table"));
    assert!(!html.contains("No events found"));
    // pager keeps the known page count after a failure
    assert!(html.contains("Page 2"));
    assert!(html.contains(r#"/fragments/events/pending?page=3&amp;max_page=3"#));
}

#[tokio::test]
async fn requested_page_is_passed_to_repository() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .withf(|query| query.page == 4)
        .times(1)
        .returning(|_| Ok(mock_page(vec![mock_event(1, "Fourth page")], 4)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events?page=4&max_page=4").await;

    assert!(html.contains("Fourth page"));
    assert!(html.contains("Page 4"));
}

/// Last page wraps forward to the first, previous steps back
#[tokio::test]
async fn pager_links_follow_wraparound() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .times(1)
        .returning(|_| Ok(mock_page(vec![mock_event(1, "Last")], 3)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events?page=3&max_page=3").await;

    assert!(html.contains(r#"hx-get="/fragments/events/pending?page=2&amp;max_page=3""#));
    assert!(html.contains(r#"hx-get="/fragments/events/pending?page=1&amp;max_page=3""#));
    assert!(html.contains(r#"hx-push-url="/events?page=1&amp;max_page=3""#));
    assert!(!html.contains("disabled"));
}

/// Page count learned from the response drives the pager
#[tokio::test]
async fn pager_uses_last_page_from_response() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .times(1)
        .returning(|_| Ok(mock_page(vec![mock_event(1, "First")], 5)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events?page=1").await;

    assert!(html.contains(r#"hx-get="/fragments/events/pending?page=2&amp;max_page=5""#));
}

/// Moves that would not change the page are disabled
#[tokio::test]
async fn single_page_disables_both_pager_buttons() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .times(1)
        .returning(|_| Ok(mock_page(vec![mock_event(1, "Only")], 1)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events").await;

    assert_eq!(html.matches("disabled").count(), 2);
}

/// Pending fragment shows the spinner even if rows were cached before
#[tokio::test]
async fn pending_fragment_renders_loading_indicator() {
    let test_app = spawn_app(Arc::new(MockEventRepo::new())).await;

    let (status, html) = test_app
        .get_html("/fragments/events/pending?page=2&max_page=3")
        .await;

    assert!(status.is_success());
    assert!(html.contains("Loading..."));
    assert!(html.contains(r#"hx-get="/fragments/events?page=2&amp;max_page=3""#));
    assert!(!html.contains("<table"));
    assert!(html.contains("Page 2"));
}

#[tokio::test]
async fn event_text_is_escaped() {
    let mut events = MockEventRepo::new();
    events
        .expect_get_all_events()
        .times(1)
        .returning(|_| Ok(mock_page(vec![mock_event(1, "<script>alert(1)</script>")], 1)));

    let test_app = spawn_app(Arc::new(events)).await;
    let (_, html) = test_app.get_html("/fragments/events").await;

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn add_event_dialog_fragment() {
    let test_app = spawn_app(Arc::new(MockEventRepo::new())).await;

    let (status, html) = test_app.get_html("/fragments/dialogs/add-event").await;

    assert!(status.is_success());
    assert!(html.contains("modal is-active"));
    assert!(html.contains("Add event"));
    assert!(html.contains("Create"));
}

#[tokio::test]
async fn delete_event_dialog_fragment() {
    let test_app = spawn_app(Arc::new(MockEventRepo::new())).await;

    let (status, html) = test_app
        .get_html("/fragments/dialogs/delete-event/9")
        .await;

    assert!(status.is_success());
    assert!(html.contains("delete event #9?"));
    assert!(html.contains(r#"hx-get="/fragments/dialogs/close""#));
}

#[tokio::test]
async fn close_dialog_fragment_is_empty() {
    let test_app = spawn_app(Arc::new(MockEventRepo::new())).await;

    let (status, html) = test_app.get_html("/fragments/dialogs/close").await;

    assert!(status.is_success());
    assert!(html.is_empty());
}
