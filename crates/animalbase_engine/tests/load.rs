use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use animalbase_engine::{DataSource, LoadError, LoadSettings, Loader, SourceLoader};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANIMALS: &str = r#"[
    { "fullname": "Leo the brave lion", "age": 3 },
    { "fullname": "Rex the grumpy wolf", "age": 7 }
]"#;

#[test]
fn source_parse_distinguishes_urls_and_paths() {
    assert_eq!(
        DataSource::parse("animals.json").unwrap(),
        DataSource::File(PathBuf::from("animals.json"))
    );
    assert!(matches!(
        DataSource::parse("https://example.com/animals.json").unwrap(),
        DataSource::Url(_)
    ));
    assert!(matches!(
        DataSource::parse("http://").unwrap_err(),
        LoadError::InvalidUrl(_)
    ));
}

#[tokio::test]
async fn loads_from_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("animals.json");
    fs::write(&file, ANIMALS).unwrap();

    let loader = SourceLoader::default();
    let report = loader.load(&DataSource::File(file)).await.unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].name, "Leo");
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let loader = SourceLoader::default();
    let err = loader
        .load(&DataSource::File(temp.path().join("missing.json")))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[tokio::test]
async fn loads_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ANIMALS, "application/json"))
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/animals.json", server.uri())).unwrap();
    let report = SourceLoader::default().load(&source).await.unwrap();
    assert_eq!(report.records[1].name, "Rex");
}

#[tokio::test]
async fn http_status_is_a_load_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/missing.json", server.uri())).unwrap();
    let err = SourceLoader::default().load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::HttpStatus(404)));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(ANIMALS),
        )
        .mount(&server)
        .await;

    let loader = SourceLoader::new(LoadSettings {
        request_timeout: Duration::from_millis(50),
        ..LoadSettings::default()
    });
    let source = DataSource::parse(&format!("{}/slow.json", server.uri())).unwrap();
    let err = loader.load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Timeout));
}

#[tokio::test]
async fn oversized_http_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[0,1,2,3,4]", "application/json"))
        .mount(&server)
        .await;

    let loader = SourceLoader::new(LoadSettings {
        max_bytes: 10,
        ..LoadSettings::default()
    });
    let source = DataSource::parse(&format!("{}/large.json", server.uri())).unwrap();
    let err = loader.load(&source).await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    ));
}

#[tokio::test]
async fn http_body_at_the_cap_loads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exact.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ANIMALS, "application/json"))
        .mount(&server)
        .await;

    let loader = SourceLoader::new(LoadSettings {
        max_bytes: ANIMALS.len() as u64,
        ..LoadSettings::default()
    });
    let source = DataSource::parse(&format!("{}/exact.json", server.uri())).unwrap();
    let report = loader.load(&source).await.unwrap();
    assert_eq!(report.records.len(), 2);
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("animals.json");
    fs::write(&file, ANIMALS).unwrap();

    let loader = SourceLoader::new(LoadSettings {
        max_bytes: 10,
        ..LoadSettings::default()
    });
    let err = loader.load(&DataSource::File(file)).await.unwrap_err();
    assert!(matches!(err, LoadError::TooLarge { max_bytes: 10, .. }));
}
