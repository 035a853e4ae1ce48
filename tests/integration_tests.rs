use check_status::core::input::collect_numbers;
use check_status::core::report::render;
use check_status::{CheckError, HttpDirectorySource, OutputFormat, StatusChecker, StatusConfig};
use httpmock::prelude::*;
use std::io::Cursor;

const DIRECTORY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<users>
  <user>
    <address1_telephone1>102</address1_telephone1>
    <tisa_useraccessibilitycode>Away</tisa_useraccessibilitycode>
    <fullname>Bob</fullname>
  </user>
  <user>
    <address1_telephone1>101</address1_telephone1>
    <tisa_useraccessibilitycode>In Office</tisa_useraccessibilitycode>
    <fullname>Alice</fullname>
  </user>
</users>"#;

async fn run_check(
    server: &MockServer,
    numbers: &[&str],
    target_status: &str,
) -> check_status::Result<String> {
    let config = StatusConfig::new(server.url("/api/users"), target_status);
    let args: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    let numbers = collect_numbers(&args, Cursor::new(""))?;

    let checker = StatusChecker::new(HttpDirectorySource::new(&config)?, &config);
    let report = checker.run(&numbers).await?;

    let mut out = Vec::new();
    render(&report, OutputFormat::Text, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_end_to_end_single_match() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200)
                .header("Content-Type", "application/xml")
                .body(DIRECTORY);
        })
        .await;

    let output = run_check(&server, &["101", "102"], "In Office").await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(
        output,
        "Found numbers with status 'In Office':\n101 - Alice (In Office)\n"
    );
}

#[tokio::test]
async fn test_end_to_end_default_status_literal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).body(
                "<users><user><address1_telephone1>4410</address1_telephone1>\
                 <tisa_useraccessibilitycode>В офисе</tisa_useraccessibilitycode>\
                 <fullname>Иван Петров</fullname></user></users>",
            );
        })
        .await;

    let output = run_check(&server, &["4410"], check_status::config::DEFAULT_TARGET_STATUS)
        .await
        .unwrap();

    assert!(output.ends_with("4410 - Иван Петров (В офисе)\n"));
}

#[tokio::test]
async fn test_end_to_end_no_matches() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).body(DIRECTORY);
        })
        .await;

    let output = run_check(&server, &["102", "777"], "In Office").await.unwrap();
    assert_eq!(output, "No matching numbers found with status 'In Office'.\n");
}

#[tokio::test]
async fn test_non_200_body_is_not_parsed() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(503).body("<html><body>unavailable");
        })
        .await;

    let err = run_check(&server, &["101"], "In Office").await.unwrap_err();

    api_mock.assert_async().await;
    assert!(matches!(err, CheckError::HttpStatusError { status: 503 }));
}

#[tokio::test]
async fn test_malformed_directory_reports_every_diagnostic() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200)
                .body("<users><user><fullname>Alice</name></user>");
        })
        .await;

    let err = run_check(&server, &["101"], "In Office").await.unwrap_err();

    match &err {
        CheckError::ParseError { diagnostics } => assert_eq!(diagnostics.len(), 3),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert_eq!(err.user_friendly_message().lines().count(), 4);
}
