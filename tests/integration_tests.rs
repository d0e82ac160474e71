use carrier_lookup::config::toml_config::TomlConfig;
use carrier_lookup::{
    CarrierClient, EtlEngine, LocalStorage, LookupError, LookupPipeline, LookupSummary,
};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn test_config(dir: &TempDir, base_url: String) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.api.base_url = base_url;
    config.api.credentials_file = dir.path().join(".env.ytel").to_str().unwrap().to_string();
    config.api.rate_limit = 200;
    config.input.path = "phone_numbers.csv".to_string();
    config.output.path = "out/phone_numbers_with_carrier.csv".to_string();
    config
}

fn read_output(dir: &TempDir) -> (Vec<String>, Vec<csv::StringRecord>) {
    let data = std::fs::read(dir.path().join("out/phone_numbers_with_carrier.csv")).unwrap();
    let mut reader = csv::Reader::from_reader(data.as_slice());
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[tokio::test]
async fn test_end_to_end_mixed_results() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env.ytel", "integration-token\n");
    write_file(
        temp_dir.path(),
        "phone_numbers.csv",
        "phone_number,name\n+12125551234,Alice\n+13105550000,Bob\n+14155550199,Carol\n",
    );

    let verizon_body = concat!(
        r#"{"status":true,"payload":[{"status":true,"network":"Verizon","wireless":true,"#,
        r#""city":"New York","state":"NY","zipCode":"10001","country":"US"}]}"#
    );

    let server = MockServer::start();
    let verizon_mock = server.mock(|when, then| {
        when.method(GET)
            .path_contains("12125551234")
            .header("Authorization", "Bearer integration-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(verizon_body);
    });
    let throttled_mock = server.mock(|when, then| {
        when.method(GET).path_contains("13105550000");
        then.status(429).body(r#"{"message":"Too Many Requests"}"#);
    });
    let invalid_mock = server.mock(|when, then| {
        when.method(GET).path_contains("14155550199");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": false, "error": "invalid number"}));
    });

    let config = test_config(&temp_dir, server.url("/api/v4/carrier/lookup"));
    let client = CarrierClient::from_config(&config).unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = LookupPipeline::new(storage, config, client);

    let report = EtlEngine::new(pipeline).run().await.unwrap();

    verizon_mock.assert();
    throttled_mock.assert();
    invalid_mock.assert();
    assert_eq!(report.output_path, "out/phone_numbers_with_carrier.csv");
    assert_eq!(
        report.summary,
        LookupSummary {
            total: 3,
            successful: 1,
            failed: 2
        }
    );

    let (headers, rows) = read_output(&temp_dir);
    assert_eq!(
        headers,
        vec![
            "phone_number",
            "success",
            "carrier",
            "line_type",
            "city",
            "state",
            "zip_code",
            "country",
            "raw_response",
            "error"
        ]
    );
    assert_eq!(rows.len(), 3);

    assert_eq!(&rows[0][0], "+12125551234");
    assert_eq!(&rows[0][1], "True");
    assert_eq!(&rows[0][2], "Verizon");
    assert_eq!(&rows[0][3], "wireless");
    assert_eq!(&rows[0][4], "New York");
    assert_eq!(&rows[0][6], "10001");
    assert_eq!(&rows[0][8], verizon_body);

    assert_eq!(&rows[1][0], "+13105550000");
    assert_eq!(&rows[1][1], "False");
    assert_eq!(&rows[1][3], "");
    assert_eq!(&rows[1][8], r#"{"message":"Too Many Requests"}"#);
    assert_eq!(&rows[1][9], "HTTP 429");

    assert_eq!(&rows[2][0], "+14155550199");
    assert_eq!(&rows[2][1], "False");
    assert_eq!(&rows[2][2], "");
    assert_eq!(&rows[2][9], "invalid number");

    for row in &rows {
        assert!(&row[1] == "True" || &row[1] == "False");
    }
}

#[tokio::test]
async fn test_unreachable_api_still_writes_every_row() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_file(temp_dir.path(), ".env.ytel", "token");
    write_file(
        temp_dir.path(),
        "phone_numbers.csv",
        "phone_number\n+12125551234\n+13105550000\n",
    );

    // 先佔用再釋放一個埠，確保連線會被拒絕
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let config = test_config(&temp_dir, format!("http://127.0.0.1:{}/lookup", port));
    let client = CarrierClient::from_config(&config)?;
    let pipeline = LookupPipeline::new(LocalStorage::new(temp_dir.path()), config, client);

    let report = EtlEngine::new(pipeline).run().await?;

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.failed, 2);

    let (_, rows) = read_output(&temp_dir);
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "+12125551234");
    assert_eq!(&rows[1][0], "+13105550000");
    for row in &rows {
        assert_eq!(&row[1], "False");
        assert!(!row[9].is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_header_only_input_writes_header_only_output() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env.ytel", "token");
    write_file(temp_dir.path(), "phone_numbers.csv", "phone_number\n");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let config = test_config(&temp_dir, server.url("/lookup"));
    let client = CarrierClient::from_config(&config).unwrap();
    let pipeline = LookupPipeline::new(LocalStorage::new(temp_dir.path()), config, client);

    let report = EtlEngine::new(pipeline).run().await.unwrap();

    api_mock.assert_hits(0);
    assert_eq!(report.summary, LookupSummary::default());

    let (headers, rows) = read_output(&temp_dir);
    assert_eq!(headers.len(), 10);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_missing_input_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env.ytel", "token");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let config = test_config(&temp_dir, server.url("/lookup"));
    let client = CarrierClient::from_config(&config).unwrap();
    let pipeline = LookupPipeline::new(LocalStorage::new(temp_dir.path()), config, client);

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, LookupError::InputNotFoundError { .. }));
    api_mock.assert_hits(0);
    assert!(!temp_dir
        .path()
        .join("out/phone_numbers_with_carrier.csv")
        .exists());
}

#[test]
fn test_missing_credentials_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, "https://api.ytel.com/api/v4/carrier/lookup".to_string());

    let err = CarrierClient::from_config(&config).err().unwrap();
    assert!(matches!(err, LookupError::MissingCredentialError { .. }));
}

#[test]
fn test_empty_credentials_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env.ytel", "\n");
    let config = test_config(&temp_dir, "https://api.ytel.com/api/v4/carrier/lookup".to_string());

    let err = CarrierClient::from_config(&config).err().unwrap();
    assert!(matches!(err, LookupError::EmptyCredentialError { .. }));
}
