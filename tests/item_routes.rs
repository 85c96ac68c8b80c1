use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseConnection, MockExecResult};
use serde_json::json;
use tower::ServiceExt;

use trade_api::{
    db::entities::item,
    test_helpers::{mock_db, test_router},
};

async fn json_response(
    db: &DatabaseConnection,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = test_router(db.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn cheese() -> item::Model {
    item::Model {
        itemcode: "I007".to_string(),
        itemname: "Cheese".to_string(),
        batchcode: "DM/2007".to_string(),
        coname: "ABJ Enterprise".to_string(),
    }
}

#[tokio::test]
async fn create_item_rejects_blank_fields() {
    let db = mock_db().into_connection();

    let (status, body) = json_response(
        &db,
        json_request(
            "POST",
            "/list",
            json!({ "ITEMCODE": "I007", "ITEMNAME": "   " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let params: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["param"].as_str().unwrap())
        .collect();
    assert_eq!(params, ["ITEMNAME", "BATCHCODE", "CONAME"]);
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn create_item_returns_created_row() {
    let created = cheese();
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![created.clone()]])
        .into_connection();

    let (status, body) = json_response(
        &db,
        json_request(
            "POST",
            "/list",
            json!({
                "ITEMCODE": "I007",
                "ITEMNAME": "Cheese",
                "BATCHCODE": "DM/2007",
                "CONAME": "ABJ Enterprise"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ITEMCODE"], "I007");
    assert_eq!(body["CONAME"], "ABJ Enterprise");
}

#[tokio::test]
async fn find_item_returns_row_array() {
    let db = mock_db()
        .append_query_results([vec![cheese()]])
        .into_connection();

    let (status, body) = json_response(&db, get("/list/I007")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["ITEMNAME"], "Cheese");
}

#[tokio::test]
async fn rename_item_updates_name_by_code() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (status, body) = json_response(
        &db,
        json_request(
            "PUT",
            "/list",
            json!({ "ITEMCODE": "I007", "ITEMNAME": "Aged Cheese" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows_affected"], 1);

    let statement = format!("{:?}", db.into_transaction_log()[0]);
    assert!(statement.contains("ITEMNAME"));
    assert!(statement.contains("ITEMCODE"));
    assert!(!statement.contains("BATCHCODE"));
}

#[tokio::test]
async fn set_company_updates_coname_by_code() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (status, body) = json_response(
        &db,
        json_request(
            "PATCH",
            "/list",
            json!({ "ITEMCODE": "I007", "CONAME": "Foodies" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows_affected"], 1);

    let statement = format!("{:?}", db.into_transaction_log()[0]);
    assert!(statement.contains("CONAME"));
    assert!(!statement.contains("ITEMNAME"));
}

#[tokio::test]
async fn delete_item_targets_exactly_one_code_and_is_idempotent() {
    let db = mock_db()
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = json_response(&db, delete("/list/I007")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows_affected"], 1);

    let (status, body) = json_response(&db, delete("/list/I007")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows_affected"], 0);

    let log = db.into_transaction_log();
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("ITEMCODE"));
    assert!(statement.contains("I007"));
}
