use std::io::Write;
use std::time::Duration;

use paperdrop_engine::{EngineEvent, EngineHandle, FailureKind, ServiceEndpoints};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn engine_reads_the_file_and_reports_the_upload_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"%PDF-1.4 payload").expect("write temp file");
    let file_path = file.path().to_string_lossy().to_string();

    let endpoints = ServiceEndpoints::resolve(Some(server.uri()), Some(server.uri()));
    let (engine, events) = EngineHandle::new(endpoints);
    engine.submit_file(3, file_path, "payload.pdf");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event");
    assert_eq!(
        event,
        EngineEvent::UploadCompleted {
            generation: 3,
            result: Ok(()),
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_a_missing_file_as_an_io_failure() {
    let endpoints = ServiceEndpoints::default();
    let (engine, events) = EngineHandle::new(endpoints);
    engine.submit_file(1, "/nonexistent/nowhere.pdf", "nowhere.pdf");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event");
    match event {
        EngineEvent::UploadCompleted {
            generation: 1,
            result: Err(err),
        } => assert_eq!(err.kind, FailureKind::Io),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_forwards_fetched_jobs_with_the_request_generation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "j-1",
            "filename": "a.pdf",
            "status": "queued",
            "progress": 0,
            "created_at": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let endpoints = ServiceEndpoints::resolve(Some(server.uri()), Some(server.uri()));
    let (engine, events) = EngineHandle::new(endpoints);
    engine.fetch_jobs(7);

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event");
    match event {
        EngineEvent::JobsFetched {
            generation: 7,
            result: Ok(jobs),
        } => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].filename, "a.pdf");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
