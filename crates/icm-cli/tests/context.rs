//! Tests of the application directories, configuration and tables on disk.

use std::fs;

use icm_cli::commands::{AppContext, ValidateOptions, run_validate};
use icm_cli::config::{Config, DEFAULT_CONFIG};
use icm_cli::input::PeekedInput;
use icm_model::OwnerLookup;
use icm_standards::AppDirs;

#[test]
fn test_first_use_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let context = AppContext::load(AppDirs::under(dir.path())).unwrap();
    assert_eq!(context.config, Config::default());
    assert_eq!(
        fs::read_to_string(dir.path().join("config.toml")).unwrap(),
        DEFAULT_CONFIG
    );

    let lookups = context.lookups().unwrap();
    assert!(dir.path().join("data").join("owner.csv").exists());
    assert!(lookups.owners.lookup_owner("MSC").is_some());
}

#[test]
fn test_existing_config_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "sep-owner-equip = \"\"\n").unwrap();
    let context = AppContext::load(AppDirs::under(dir.path())).unwrap();
    assert_eq!(context.config.sep_owner_equip, "");
    assert_eq!(context.config.sep_check_size, "   ");
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "output = \"xml\"\n").unwrap();
    let error = AppContext::load(AppDirs::under(dir.path())).unwrap_err();
    assert!(error.to_string().contains("config.toml"));
}

#[test]
fn test_validate_with_custom_owner() {
    let dir = tempfile::tempdir().unwrap();
    let context = AppContext::load(AppDirs::under(dir.path())).unwrap();
    fs::write(
        context.dirs.data_dir.join("custom-owner.csv"),
        "ABC;some-company;some-city;some-country\n",
    )
    .unwrap();
    let lookups = context.lookups().unwrap();

    let args = ["abc u 123456 0".to_string()];
    let mut output = Vec::new();
    let failed = run_validate(
        PeekedInput::from_args(&args),
        &mut output,
        &lookups,
        &ValidateOptions::default(),
    )
    .unwrap();
    assert!(!failed);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "
  ABC U 123456 0  ✔
   ↑  ↑
   │  └─ freight container
   │
   └─ some-company
      some-city
      some-country

"
    );
}
