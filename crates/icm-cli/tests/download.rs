//! Tests of the `download-owners` command.

use std::fs;

use chrono::{DateTime, Duration, Utc};
use icm_cli::commands::{owner_source, run_download_owners};
use icm_cli::config::Config;
use icm_model::{Owner, OwnerCode};
use icm_standards::{OwnerSource, Result};

struct FixedSource;

impl OwnerSource for FixedSource {
    fn fetch_owners(&self) -> Result<Vec<Owner>> {
        Ok(vec![Owner {
            code: OwnerCode::new("ABC").unwrap(),
            company: "some-company".to_string(),
            city: "some-city".to_string(),
            country: "some-country".to_string(),
        }])
    }
}

fn at(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_download_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("owner.csv");
    let count =
        run_download_owners(&FixedSource, dir.path(), &output, at("2024-01-01T00:00:00Z")).unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "ABC;some-company;some-city;some-country\n"
    );
}

#[test]
fn test_second_download_is_rate_limited() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("owner.csv");
    let now = at("2024-01-01T00:00:00Z");
    run_download_owners(&FixedSource, dir.path(), &output, now).unwrap();

    let error = run_download_owners(
        &FixedSource,
        dir.path(),
        &output,
        now + Duration::seconds(100),
    )
    .unwrap_err();
    assert_eq!(
        error.to_string(),
        "timeout is set to 5m to relieve server load, try in 200s again"
    );

    run_download_owners(&FixedSource, dir.path(), &output, now + Duration::minutes(6)).unwrap();
}

#[test]
fn test_missing_url_is_reported() {
    let error = owner_source(None, &Config::default()).unwrap_err();
    assert!(error.to_string().contains("--url"));
}
