use paperdrop_engine::{FailureKind, HttpUploadClient, UploadService};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upload_posts_a_single_multipart_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = HttpUploadClient::new(server.uri());
    client
        .upload("report.pdf", b"%PDF-1.4 fake".to_vec())
        .await
        .expect("upload ok");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "unexpected content type: {content_type}"
    );

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"report.pdf\""));
    assert!(body.contains("%PDF-1.4 fake"));
}

#[tokio::test]
async fn upload_treats_any_2xx_as_success_and_ignores_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(202).set_body_string("{\"ignored\": true}"))
        .mount(&server)
        .await;

    let client = HttpUploadClient::new(server.uri());
    let result = client.upload("a.pdf", vec![1, 2, 3]).await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn upload_fails_on_non_2xx_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpUploadClient::new(server.uri());
    let err = client.upload("a.pdf", vec![0]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn upload_reports_connection_failures_as_network_errors() {
    // Nothing listens here.
    let client = HttpUploadClient::new("http://127.0.0.1:9");
    let err = client.upload("a.pdf", vec![0]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
