mod common;

use common::{api_path, bearer, setup_logged_in};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_recognize_image_by_file_id() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let mock = backend
        .server
        .mock("POST", api_path("/ocr/recognize").as_str())
        .match_header("authorization", bearer("t1").as_str())
        .match_body(Matcher::Json(json!({"file_id": "file-1"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "text": "会议纪要\n下午三点",
                "details": [
                    {"text": "会议纪要", "confidence": 0.98, "box": [[10, 10], [120, 10], [120, 40], [10, 40]]},
                    {"text": "下午三点", "confidence": 0.87, "box": [[12.5, 50], [118, 52], [117, 80], [11, 78]]}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let result = backend.client.recognize_image("file-1").await.unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert_eq!(result.details.len(), 2);
    assert_eq!(result.details[1].bounding_box[0], [12.5, 50.0]);
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_recognize_failure_is_reported_in_body() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let _mock = backend
        .server
        .mock("POST", api_path("/ocr/recognize").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"success": false, "text": "", "details": [], "error": "OCR engine unavailable"})
                .to_string(),
        )
        .create_async()
        .await;

    let result = backend.client.recognize_image("file-1").await.unwrap();

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("OCR engine unavailable"));
}

#[tokio::test]
async fn test_edit_ocr_result() {
    let mut backend = setup_logged_in("t1", "user-1").await;
    let mock = backend
        .server
        .mock("POST", api_path("/ocr/edit").as_str())
        .match_body(Matcher::Json(json!({
            "file_id": "file-1",
            "edited_text": "会议纪要\n下午三点半"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "message": "OCR结果已更新",
                "edited_text": "会议纪要\n下午三点半"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let response = backend
        .client
        .edit_ocr_result("file-1", "会议纪要\n下午三点半")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.success);
    assert_eq!(response.edited_text.as_deref(), Some("会议纪要\n下午三点半"));
}
