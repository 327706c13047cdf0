//! Fetch-all paginator tests
//!
//! Tests for:
//! - Exhausting server-side pagination in page order
//! - Abort-on-failure with no partial result
//! - Null-first ordering of the assembled set
//! - Local re-pagination of the ordered set

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lp_client::{Client, ClientConfig, MemorySessionStore};

fn record(id: i64, completion: Option<f64>, score: Option<f64>) -> Value {
    json!({
        "id": id,
        "studentId": id * 10,
        "studentName": format!("Student {id}"),
        "classId": 42,
        "assignDate": "2025-06-02T00:00:00Z",
        "cmsResourceId": 7,
        "cmsHomeLearningId": 8,
        "appCompletion": completion,
        "appScore": score,
        "appTime": 12.5,
        "skill": "Reading",
        "completedAt": null,
        "unitName": "Unit 3",
        "lastAccessedAt": null,
        "createdAt": "2025-06-02T00:00:00Z",
        "updatedAt": "2025-06-02T00:00:00Z",
        "studentClassId": 5
    })
}

fn page_body(records: Vec<Value>, page: u32, total_pages: u32, total: u32) -> Value {
    json!({
        "status": true,
        "data": {
            "data": records,
            "page": page,
            "pageSize": 2,
            "total": total,
            "totalPages": total_pages
        },
        "errors": []
    })
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::new(server.uri()).with_fetch_page_size(2);
    Client::new(config, Arc::new(MemorySessionStore::new())).unwrap()
}

#[tokio::test]
async fn fetch_all_issues_one_request_per_page_and_concatenates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "2"))
        .and(body_json(json!({
            "token": "tok",
            "classId": "42",
            "choosenDate": "2025-06-02"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![record(1, Some(80.0), Some(90.0)), record(2, Some(70.0), Some(60.0))],
            1,
            3,
            5,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![record(3, None, None), record(4, Some(50.0), Some(40.0))],
            2,
            3,
            5,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![record(5, None, Some(30.0))],
            3,
            3,
            5,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let records = client
        .progress()
        .fetch_all("tok", "42", test_date())
        .await
        .unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn fetch_all_aborts_on_failed_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![record(1, Some(80.0), Some(90.0))],
            1,
            3,
            5,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    // page 3 must never be requested once page 2 fails
    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 3, 3, 5)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.progress().fetch_all("tok", "42", test_date()).await;

    assert!(matches!(result, Err(lp_client::Error::Server(_))));
}

#[tokio::test]
async fn assemble_orders_incomplete_records_first() {
    let mock_server = MockServer::start().await;

    // server order: complete(1), incomplete(2), complete(3), incomplete(4)
    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![
                record(1, Some(80.0), Some(90.0)),
                record(2, None, Some(90.0)),
                record(3, Some(70.0), Some(60.0)),
                record(4, Some(70.0), None),
            ],
            1,
            1,
            4,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let ordered = client
        .progress()
        .assemble("tok", "42", test_date())
        .await
        .unwrap();

    let ids: Vec<i64> = ordered.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4, 1, 3]);
}

#[tokio::test]
async fn page_reslices_the_ordered_set() {
    let mock_server = MockServer::start().await;

    let records: Vec<Value> = (1..=5)
        .map(|id| record(id, Some(80.0), Some(90.0)))
        .collect();
    Mock::given(method("POST"))
        .and(path("/api/Student/progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(records, 1, 1, 5)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let page_two = client
        .progress()
        .page("tok", "42", test_date(), 2, 2)
        .await
        .unwrap();
    let ids: Vec<i64> = page_two.data.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(page_two.total_pages, 3);

    let past_end = client
        .progress()
        .page("tok", "42", test_date(), 9, 2)
        .await
        .unwrap();
    assert!(past_end.data.is_empty());
}
