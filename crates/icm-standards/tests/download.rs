//! Tests for the owner download and its rate limit.

use std::cell::Cell;
use std::fs;

use chrono::{DateTime, Duration, Utc};
use icm_model::{Owner, OwnerCode};
use icm_standards::{
    OwnerRegistry, OwnerSource, Result, StandardsError, TimestampGate, update_owner_file,
};

struct FixedSource {
    owners: Vec<Owner>,
    calls: Cell<usize>,
}

impl FixedSource {
    fn new() -> Self {
        Self {
            owners: vec![
                Owner {
                    code: OwnerCode::new("ABC").unwrap(),
                    company: "some-company".to_string(),
                    city: "some-city".to_string(),
                    country: "some-country".to_string(),
                },
                Owner {
                    code: OwnerCode::new("XYZ").unwrap(),
                    company: "Company; with separator".to_string(),
                    city: "City".to_string(),
                    country: "Country".to_string(),
                },
            ],
            calls: Cell::new(0),
        }
    }
}

impl OwnerSource for FixedSource {
    fn fetch_owners(&self) -> Result<Vec<Owner>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.owners.clone())
    }
}

fn at(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_initial_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let gate = TimestampGate::open(dir.path()).unwrap();
    assert_eq!(gate.last_update(), at("2018-10-29T15:00:00Z"));
    assert_eq!(
        fs::read_to_string(dir.path().join("owner-last-update")).unwrap(),
        "2018-10-29T15:00:00Z\n"
    );
}

#[test]
fn test_download_writes_owner_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("owner.csv");
    let mut gate = TimestampGate::open(dir.path()).unwrap();
    let source = FixedSource::new();

    let now = at("2024-05-01T12:00:00Z");
    let count = update_owner_file(&source, &mut gate, now, &output).unwrap();
    assert_eq!(count, 2);
    assert_eq!(source.calls.get(), 1);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "ABC;some-company;some-city;some-country\nXYZ;\"Company; with separator\";City;Country\n"
    );
    let registry = OwnerRegistry::load(&output, None).unwrap();
    assert_eq!(registry.len(), 2);

    let reopened = TimestampGate::open(dir.path()).unwrap();
    assert_eq!(reopened.last_update(), now);
}

#[test]
fn test_download_is_rate_limited() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("owner.csv");
    let mut gate = TimestampGate::open(dir.path()).unwrap();
    let source = FixedSource::new();

    let first = at("2024-05-01T12:00:00Z");
    update_owner_file(&source, &mut gate, first, &output).unwrap();

    let err = update_owner_file(&source, &mut gate, first + Duration::seconds(60), &output)
        .unwrap_err();
    assert!(matches!(err, StandardsError::RateLimited { retry_in: 240 }));
    assert_eq!(
        err.to_string(),
        "timeout is set to 5m to relieve server load, try in 240s again"
    );
    assert_eq!(source.calls.get(), 1);

    update_owner_file(&source, &mut gate, first + Duration::seconds(301), &output).unwrap();
    assert_eq!(source.calls.get(), 2);
}
