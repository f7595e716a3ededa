use anyhow::Result;
use lang_tour::utils::validation::Validate;
use lang_tour::{TomlConfig, TourConfig, TourEngine, TourError, Transcript};
use tempfile::TempDir;

#[tokio::test(start_paused = true)]
async fn test_tour_with_config_file_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("greeting.txt");
    let normalized_path = output.to_string_lossy().replace('\\', "/");

    let config_content = format!(
        r#"
[fetch]
delay_ms = 250
primary_url = "https://one.example.org"
secondary_url = "http://two.example.org/data"

[output]
path = "{}"
message = "Hello from TOML"
"#,
        normalized_path
    );
    let config_path = temp_dir.path().join("tour.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let mut config = TourConfig::default();
    TomlConfig::from_file(&config_path)?.apply_to(&mut config);
    config.validate()?;

    let transcript = Transcript::silent();
    TourEngine::new(config, transcript.clone()).run().await?;

    assert_eq!(std::fs::read_to_string(&output)?, "Hello from TOML");
    assert_eq!(transcript.position("Fetching data from https://one.example.org"), Some(2));
    assert_eq!(
        transcript.position("Fetching data from http://two.example.org/data"),
        Some(3)
    );
    assert_eq!(transcript.position("fetch_data took 0.25 seconds"), Some(4));

    Ok(())
}

#[test]
fn test_env_vars_are_substituted() -> Result<()> {
    std::env::set_var("LANG_TOUR_TEST_GREETING", "from the environment");
    let toml = TomlConfig::from_toml_str(
        r#"
[output]
message = "${LANG_TOUR_TEST_GREETING}"
"#,
    )?;

    let mut config = TourConfig::default();
    toml.apply_to(&mut config);
    assert_eq!(config.message, "from the environment");
    Ok(())
}

#[test]
fn test_invalid_url_in_file_fails_validation() -> Result<()> {
    let toml = TomlConfig::from_toml_str("[fetch]\nprimary_url = \"not a url\"\n")?;
    let mut config = TourConfig::default();
    toml.apply_to(&mut config);

    match config.validate() {
        Err(TourError::InvalidConfigValueError { field, .. }) => assert_eq!(field, "primary_url"),
        other => panic!("expected invalid primary_url, got {:?}", other),
    }
    Ok(())
}
