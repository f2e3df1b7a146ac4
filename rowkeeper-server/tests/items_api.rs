use axum::http::StatusCode;
use rowkeeper_core::api::routes::{ITEMS, ORDER};
use rowkeeper_model::{ItemId, PageResult};
use serde_json::{Value, json};

mod common;
use common::{build_test_server, build_test_server_with, test_config};

fn ids(page: &PageResult) -> Vec<i64> {
    page.items.iter().map(|item| item.id.get()).collect()
}

#[tokio::test]
async fn first_page_uses_default_limit() {
    let (server, _state) = build_test_server(95);

    let response = server.get(ITEMS).await;
    response.assert_status_ok();
    let page: PageResult = response.json();

    assert_eq!(ids(&page), (1..=20).collect::<Vec<_>>());
    assert_eq!(page.total_items, 95);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.current_page, 1);
    assert!(page.selected_ids.is_empty());
    assert_eq!(page.items[0].value, "Item 1");
}

#[tokio::test]
async fn response_uses_camel_case_fields() {
    let (server, _state) = build_test_server(3);

    let body: Value = server.get(&format!("{ITEMS}?limit=2")).await.json();

    assert_eq!(
        body,
        json!({
            "items": [
                { "id": 1, "value": "Item 1" },
                { "id": 2, "value": "Item 2" },
            ],
            "totalItems": 3,
            "totalPages": 2,
            "currentPage": 1,
            "selectedIds": [],
        })
    );
}

#[tokio::test]
async fn search_matches_value_and_id() {
    let (server, _state) = build_test_server(200);

    let page: PageResult = server
        .get(&format!("{ITEMS}?search=17&limit=50"))
        .await
        .json();

    assert_eq!(ids(&page), vec![17, 117, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179]);
    assert_eq!(page.total_items, 12);
    for item in &page.items {
        assert!(
            item.value.to_lowercase().contains("17")
                || item.id.to_string().contains("17")
        );
    }
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let mut config = test_config(12);
    config.dataset.label_prefix = "Row".into();
    let (server, _state) = build_test_server_with(config);

    let page: PageResult = server.get(&format!("{ITEMS}?search=rOW%201")).await.json();

    assert_eq!(ids(&page), vec![1, 10, 11, 12]);
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_totals() {
    let (server, _state) = build_test_server(45);

    let response = server.get(&format!("{ITEMS}?page=9&limit=10")).await;
    response.assert_status_ok();
    let page: PageResult = response.json();

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 45);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.current_page, 9);
}

#[tokio::test]
async fn no_match_reports_zero_pages() {
    let (server, _state) = build_test_server(45);

    let page: PageResult = server.get(&format!("{ITEMS}?search=zzz")).await.json();

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn unreadable_paging_falls_back_to_defaults() {
    let (server, _state) = build_test_server(50);

    for query in ["page=abc&limit=xyz", "page=0&limit=0", "page=-3&limit=-1"] {
        let response = server.get(&format!("{ITEMS}?{query}")).await;
        response.assert_status_ok();
        let page: PageResult = response.json();
        assert_eq!(page.current_page, 1, "query {query}");
        assert_eq!(page.items.len(), 20, "query {query}");
    }
}

#[tokio::test]
async fn repeated_page_key_keeps_the_search() {
    let (server, _state) = build_test_server(200);

    let response = server
        .get(&format!("{ITEMS}?search=17&limit=50&page=1&page=1"))
        .await;
    response.assert_status_ok();
    let page: PageResult = response.json();

    assert_eq!(page.total_items, 12);
    assert_eq!(page.current_page, 1);
    assert_eq!(ids(&page)[..3], [17, 117, 170]);
}

#[tokio::test]
async fn repeated_keys_use_their_first_value() {
    let (server, _state) = build_test_server(50);

    let page: PageResult = server
        .get(&format!("{ITEMS}?page=2&page=4&limit=10&limit=3&search=&search=9"))
        .await
        .json();

    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_items, 50);
    assert_eq!(ids(&page), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn leading_digits_are_honoured() {
    let (server, _state) = build_test_server(50);

    let page: PageResult = server.get(&format!("{ITEMS}?page=2x&limit=10abc")).await.json();

    assert_eq!(page.current_page, 2);
    assert_eq!(ids(&page), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn custom_order_leads_every_read() {
    let (server, _state) = build_test_server(30);

    server
        .post(ORDER)
        .json(&json!({ "order": [5, 3, 1] }))
        .await
        .assert_status_ok();

    let page: PageResult = server.get(&format!("{ITEMS}?limit=6")).await.json();
    assert_eq!(ids(&page), vec![5, 3, 1, 2, 4, 6]);

    let second: PageResult = server.get(&format!("{ITEMS}?page=2&limit=6")).await.json();
    assert_eq!(ids(&second), vec![7, 8, 9, 10, 11, 12]);
}

#[tokio::test]
async fn custom_order_applies_within_search() {
    let (server, _state) = build_test_server(30);

    server
        .post(ORDER)
        .json(&json!({ "order": [22, 12, 2] }))
        .await
        .assert_status_ok();

    let page: PageResult = server.get(&format!("{ITEMS}?search=2")).await.json();
    assert_eq!(ids(&page)[..4], [22, 12, 2, 20]);
    assert_eq!(page.total_items, 12);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (server, _state) = build_test_server(5);

    let response = server.get("/api/nothing").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_reflects_state_written_directly() {
    let (server, state) = build_test_server(10);
    state.list.write().set_selection(vec![ItemId(4)]);

    let page: PageResult = server.get(ITEMS).await.json();
    assert_eq!(page.selected_ids, vec![ItemId(4)]);
}
