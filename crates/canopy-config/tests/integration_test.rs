//! Integration tests for canopy-config crate.

use canopy_common::test_utils::{config_fixtures, create_temp_dir, init_test_logging};
use canopy_config::{ConfigCache, ConfigError, ConfigFormat, ConfigLoader, I18nConfig};
use std::fs;

fn write_fixture(name: &str, content: &str) -> (tempfile::TempDir, ConfigLoader) {
    let dir = create_temp_dir();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, ConfigLoader::new(path))
}

fn assert_full_config(config: &I18nConfig) {
    assert_eq!(config.locales, vec!["en", "ja", "zh"]);
    assert_eq!(config.default_locale.as_deref(), Some("ja"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_load_every_format() {
    init_test_logging();

    let (_toml_dir, toml) = write_fixture("canopy.toml", config_fixtures::full_config_toml());
    let (_yaml_dir, yaml) = write_fixture("canopy.yml", config_fixtures::full_config_yaml());
    let (_json_dir, json) = write_fixture("canopy.json", config_fixtures::full_config_json());

    assert_full_config(&toml.load().unwrap());
    assert_full_config(&yaml.load().unwrap());
    assert_full_config(&json.load().unwrap());
}

#[test]
fn test_minimal_config_defaults_to_first_locale() {
    let config =
        ConfigLoader::parse(config_fixtures::minimal_config_toml(), ConfigFormat::Toml).unwrap();
    assert_eq!(config.default_locale, None);
    assert_eq!(config.logging.level, "info");

    let locales = config.locale_set().unwrap();
    assert_eq!(locales.default_locale(), "ja");
    assert_eq!(locales.iter().collect::<Vec<_>>(), vec!["ja", "en"]);
}

#[test]
fn test_config_builds_messages() {
    let config =
        ConfigLoader::parse(config_fixtures::full_config_json(), ConfigFormat::Json).unwrap();
    let builder = config
        .builder()
        .unwrap()
        .add([("hello", [("en", "Hello"), ("ja", "こんにちは"), ("zh", "你好")])])
        .unwrap();

    let messages = builder.build(None);
    assert_eq!(messages.locale(), "ja");
    assert_eq!(messages.text("hello").unwrap(), "こんにちは");
}

#[test]
fn test_unsupported_extension() {
    let (_dir, loader) = write_fixture("canopy.ini", "locales = en");
    assert!(matches!(loader.load(), Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file() {
    let dir = create_temp_dir();
    let loader = ConfigLoader::new(dir.path().join("absent.toml"));
    assert!(matches!(loader.load(), Err(ConfigError::Io(_))));
}

#[test]
fn test_parse_errors_keep_their_format() {
    assert!(matches!(
        ConfigLoader::parse("locales = [", ConfigFormat::Toml),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        ConfigLoader::parse("locales: [en", ConfigFormat::Yaml),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        ConfigLoader::parse("{\"locales\":", ConfigFormat::Json),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_invalid_documents_are_rejected() {
    let cases = [
        "locales = []",
        r#"locales = ["en", "en"]"#,
        r#"locales = ["en", "ja"]
default_locale = "fr""#,
        r#"locales = ["en", "this is not a locale"]"#,
    ];

    for case in cases {
        assert!(
            matches!(
                ConfigLoader::parse(case, ConfigFormat::Toml),
                Err(ConfigError::Invalid(_))
            ),
            "accepted: {case}"
        );
    }
}

#[test]
fn test_save_then_load() {
    let dir = create_temp_dir();
    let config = I18nConfig {
        locales: vec!["en".to_string(), "pt-BR".to_string()],
        default_locale: Some("pt-BR".to_string()),
        ..I18nConfig::default()
    };

    for name in ["saved.toml", "saved.yaml", "saved.json"] {
        let loader = ConfigLoader::new(dir.path().join(name));
        loader.save(&config).unwrap();
        assert_eq!(loader.load().unwrap(), config, "round trip through {name}");
    }

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 3);
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = create_temp_dir();
    let path = dir.path().join("canopy.toml");
    let loader = ConfigLoader::new(&path);

    let config = I18nConfig {
        locales: Vec::new(),
        ..I18nConfig::default()
    };
    assert!(loader.save(&config).is_err());
    assert!(!path.exists());
}

#[test]
fn test_config_cache() {
    let cache = ConfigCache::default();
    assert_eq!(cache.get().locales, vec!["en"]);

    let mut next = I18nConfig::default();
    next.locales.push("ja".to_string());
    next.default_locale = Some("ja".to_string());
    cache.update(next).unwrap();
    assert_eq!(cache.locale_set().unwrap().default_locale(), "ja");

    let broken = I18nConfig {
        locales: Vec::new(),
        ..I18nConfig::default()
    };
    assert!(cache.update(broken).is_err());
    assert_eq!(cache.get().locales, vec!["en", "ja"]);
}

#[test]
fn test_cache_reload() {
    let (_dir, loader) = write_fixture("canopy.yaml", config_fixtures::full_config_yaml());
    let cache = ConfigCache::default();

    let reloaded = cache.reload(&loader).unwrap();
    assert_full_config(&reloaded);
    assert_eq!(cache.locale_set().unwrap().len(), 3);
}
