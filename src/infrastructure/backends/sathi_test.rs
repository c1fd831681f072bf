use anyhow::Result;
use mockito::Matcher;

use super::ChatResponse;
use super::Sathi;
use super::UploadResponse;
use crate::domain::models::AssistantBackend;
use crate::domain::models::SessionError;
use crate::domain::models::Turn;

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let backend = Sathi::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(500).create();

    let backend = Sathi::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_gets_chat_replies() -> Result<()> {
    let body = serde_json::to_string(&ChatResponse {
        response: "hi there".to_string(),
        history: vec![Turn::user("hello"), Turn::assistant("hi there")],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .match_body(Matcher::JsonString(
            r#"{"message":"hello","history":[]}"#.to_string(),
        ))
        .with_status(200)
        .with_body(body)
        .create();

    let backend = Sathi::with_url(server.url());
    let exchange = backend.chat("hello", &[]).await.unwrap();

    assert_eq!(exchange.reply, "hi there".to_string());
    assert_eq!(
        exchange.history,
        vec![Turn::user("hello"), Turn::assistant("hi there")]
    );
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_sends_prior_history_without_the_new_message() -> Result<()> {
    let body = serde_json::to_string(&ChatResponse {
        response: "of course".to_string(),
        history: vec![
            Turn::user("hello"),
            Turn::assistant("hi there"),
            Turn::user("another question"),
            Turn::assistant("of course"),
        ],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .match_body(Matcher::JsonString(
            r#"{"message":"another question","history":[{"role":"user","content":"hello"},{"role":"assistant","content":"hi there"}]}"#.to_string(),
        ))
        .with_status(200)
        .with_body(body)
        .create();

    let backend = Sathi::with_url(server.url());
    let history = vec![Turn::user("hello"), Turn::assistant("hi there")];
    let exchange = backend.chat("another question", &history).await.unwrap();

    assert_eq!(exchange.reply, "of course".to_string());
    assert_eq!(exchange.history.len(), 4);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_surfaces_server_errors_verbatim() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .with_status(500)
        .with_body(r#"{"error":"model unavailable"}"#)
        .create();

    let backend = Sathi::with_url(server.url());
    let res = backend.chat("hello", &[]).await;

    match res {
        Err(SessionError::Service(msg)) => assert_eq!(msg, "model unavailable".to_string()),
        other => panic!("Expected a service error, got {other:?}"),
    }
    mock.assert();
}

#[tokio::test]
async fn it_reports_transport_errors_on_malformed_bodies() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create();

    let backend = Sathi::with_url(server.url());
    let res = backend.chat("hello", &[]).await;

    assert!(matches!(res, Err(SessionError::Transport)));
    mock.assert();
}

#[tokio::test]
async fn it_reports_transport_errors_on_unreadable_error_bodies() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat")
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let backend = Sathi::with_url(server.url());
    let res = backend.chat("hello", &[]).await;

    assert!(matches!(res, Err(SessionError::Transport)));
    mock.assert();
}

#[tokio::test]
async fn it_uploads_documents() -> Result<()> {
    let body = serde_json::to_string(&UploadResponse {
        filename: "menu.pdf".to_string(),
        analysis: "A three course dinner menu.".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/upload")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_body(body)
        .create();

    let backend = Sathi::with_url(server.url());
    let analysis = backend
        .upload("menu.pdf", b"%PDF-1.4 fixture".to_vec())
        .await
        .unwrap();

    assert_eq!(analysis.filename, "menu.pdf".to_string());
    assert_eq!(analysis.analysis, "A three course dinner menu.".to_string());
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_surfaces_upload_errors_verbatim() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/upload")
        .with_status(400)
        .with_body(r#"{"error":"File type not allowed. Please upload txt, pdf, doc, docx files."}"#)
        .create();

    let backend = Sathi::with_url(server.url());
    let res = backend.upload("menu.exe", b"MZ".to_vec()).await;

    match res {
        Err(SessionError::Service(msg)) => {
            assert_eq!(
                msg,
                "File type not allowed. Please upload txt, pdf, doc, docx files.".to_string()
            );
        }
        other => panic!("Expected a service error, got {other:?}"),
    }
    mock.assert();
}
