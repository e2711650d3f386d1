mod common;

use common::{api_path, bearer, memo_json, setup_logged_in};
use mockito::Matcher;
use serde_json::json;
use textarchive_api_client::{ApiError, Memo, MemoCreateRequest, MemoUpdateRequest};

#[tokio::test]
async fn test_create_memo_sends_tag_list() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let response_body = memo_json("memo-1", "buy milk", Some("home,errand"));
    let mock = backend
        .server
        .mock("POST", api_path("/memos").as_str())
        .match_header("authorization", bearer("t1").as_str())
        .match_body(Matcher::Json(json!({
            "content": "buy milk",
            "tags": ["home", "errand"]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(response_body.to_string())
        .expect(1)
        .create_async()
        .await;

    let memo = backend
        .client
        .create_memo(&MemoCreateRequest {
            content: "buy milk".into(),
            summary: None,
            tags: Some(vec!["home".into(), "errand".into()]),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    let expected: Memo = serde_json::from_value(response_body).unwrap();
    assert_eq!(memo, expected);
    assert_eq!(memo.tags.as_deref(), Some("home,errand"));
    assert_eq!(memo.tag_list(), vec!["home", "errand"]);
}

#[tokio::test]
async fn test_list_memos_without_filter_sends_no_query() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let mock = backend
        .server
        .mock("GET", api_path("/memos").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "memos": [memo_json("memo-1", "a", None), memo_json("memo-2", "b", Some("x"))],
                "total": 2
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let list = backend.client.list_memos(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total, 2);
    assert_eq!(list.memos.len(), 2);
    assert!(list.memos[0].tag_list().is_empty());
}

#[tokio::test]
async fn test_list_memos_passes_filter_verbatim() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let mock = backend
        .server
        .mock("GET", api_path("/memos").as_str())
        .match_query(Matcher::UrlEncoded("tags".into(), "work, urgent".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"memos": [], "total": 0}).to_string())
        .expect(1)
        .create_async()
        .await;

    let list = backend.client.list_memos(Some("work, urgent")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_list_memos_empty_filter_sends_no_query() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let mock = backend
        .server
        .mock("GET", api_path("/memos").as_str())
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"memos": [], "total": 0}).to_string())
        .expect(1)
        .create_async()
        .await;

    let list = backend.client.list_memos(Some("")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_get_update_delete_memo() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let get_mock = backend
        .server
        .mock("GET", api_path("/memos/memo-1").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(memo_json("memo-1", "draft", None).to_string())
        .expect(1)
        .create_async()
        .await;
    let put_mock = backend
        .server
        .mock("PUT", api_path("/memos/memo-1").as_str())
        .match_body(Matcher::Json(json!({"content": "final", "tags": ["done"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(memo_json("memo-1", "final", Some("done")).to_string())
        .expect(1)
        .create_async()
        .await;
    let delete_mock = backend
        .server
        .mock("DELETE", api_path("/memos/memo-1").as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let memo = backend.client.get_memo("memo-1").await.unwrap();
    assert_eq!(memo.content, "draft");

    let updated = backend
        .client
        .update_memo(
            "memo-1",
            &MemoUpdateRequest {
                content: Some("final".into()),
                tags: Some(vec!["done".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "final");
    assert_eq!(updated.tag_list(), vec!["done"]);

    backend.client.delete_memo("memo-1").await.unwrap();

    get_mock.assert_async().await;
    put_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_get_missing_memo_is_not_found() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let _mock = backend
        .server
        .mock("GET", api_path("/memos/nope").as_str())
        .with_status(404)
        .with_body(r#"{"detail":"备忘录不存在"}"#)
        .create_async()
        .await;

    let err = backend.client.get_memo("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let _mock = backend
        .server
        .mock("GET", api_path("/memos/memo-1").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let err = backend.client.get_memo("memo-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
