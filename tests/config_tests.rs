use overview_core::{
    config::{Config, ConfigManager},
    domain::ComparisonPeriod,
};
use tempfile::tempdir;

#[test]
fn default_config_matches_overview_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.range_days, 30);
    assert_eq!(cfg.comparison_period, ComparisonPeriod::LastYear);
    assert!(cfg.data_path.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = manager.load().expect("load default");
    assert_eq!(cfg, Config::default());

    cfg.set_value("locale", "de-DE").expect("locale");
    cfg.set_value("period", "no-comparison").expect("period");
    cfg.set_value("data", "/tmp/overview.json").expect("data");
    manager.save(&cfg).expect("save config");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.locale_config().decimal_separator, ',');
    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn corrupt_config_is_a_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.path(), "{not json").expect("write");

    let err = manager.load().unwrap_err();
    assert!(matches!(err, overview_core::OverviewError::Serde(_)));
}
