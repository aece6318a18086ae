use std::io::Write;
use std::time::Duration;

use pw_bot::BotConfig;
use tempfile::NamedTempFile;

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_put_defense_ahead_of_offense() {
    let config = BotConfig::default();
    assert_eq!(config.defense_base_weight, 0.0);
    assert_eq!(config.offense_base_weight, 25.0);
    assert_eq!(config.overkill_margin, 2);
    assert_eq!(config.cluster_radius, 10.0);
    assert_eq!(config.turn_budget(), Duration::from_secs(1));
    assert_eq!(config.time_check_fraction, 0.9);
}

#[test]
fn loads_every_field_from_yaml() {
    let file = yaml_file(
        "defense_base_weight: 5.0\n\
         offense_base_weight: 40.0\n\
         overkill_margin: 3\n\
         cluster_radius: 12.5\n\
         turn_budget_seconds: 0.5\n\
         time_check_fraction: 0.25\n",
    );

    let config = BotConfig::load(file.path()).unwrap();
    assert_eq!(config.defense_base_weight, 5.0);
    assert_eq!(config.offense_base_weight, 40.0);
    assert_eq!(config.overkill_margin, 3);
    assert_eq!(config.cluster_radius, 12.5);
    assert_eq!(config.turn_budget(), Duration::from_millis(500));
    assert_eq!(config.time_check_fraction, 0.25);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let file = yaml_file("overkill_margin: 7\n");

    let config = BotConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        BotConfig {
            overkill_margin: 7,
            ..BotConfig::default()
        }
    );
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = BotConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn malformed_yaml_is_an_error() {
    let file = yaml_file("overkill_margin: [not, a, number]\n");
    assert!(BotConfig::load(file.path()).is_err());
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(
        BotConfig::load_or_default(None).unwrap(),
        BotConfig::default()
    );
}

#[test]
fn unusable_budgets_become_zero() {
    for seconds in [-1.0, f64::NAN, f64::INFINITY] {
        let config = BotConfig {
            turn_budget_seconds: seconds,
            ..BotConfig::default()
        };
        assert_eq!(config.turn_budget(), Duration::ZERO);
    }
}
