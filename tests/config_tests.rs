// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use shot2test::config::AppConfig;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.groq.model, "llava-v1.5-7b-4096-preview");
    assert_eq!(config.groq.max_tokens, 4024);
    assert_eq!(config.groq.max_attempts, 3);
    assert_eq!(config.groq.rate_limit_delay_seconds, 120);
    assert_eq!(config.prompt.max_chars, 20_000);
    assert_eq!(config.imaging.jpeg_quality, 75);
    assert_eq!(config.logging.file.as_deref(), Some("app.log"));
    assert!(!config.cloudinary.is_configured());
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[server]
port = 9100

[cloudinary]
cloud_name = "demo"
api_key = "123"
api_secret = "shh"

[groq]
api_key = "gsk_file"
model = "llama-3.2-11b-vision-preview"

[prompt]
max_chars = 15000
"#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.server.port, 9100);
    assert!(config.cloudinary.is_configured());
    assert_eq!(config.groq.api_key.expose(), "gsk_file");
    assert_eq!(config.groq.model, "llama-3.2-11b-vision-preview");
    assert_eq!(config.prompt.max_chars, 15_000);
    // Untouched sections keep their defaults
    assert_eq!(config.groq.max_tokens, 4024);
    assert_eq!(config.imaging.jpeg_quality, 75);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config.server.port, 8501);
}

#[test]
fn test_empty_log_file_disables_file_output() {
    assert_eq!(AppConfig::default().logging.file_path(), Some("app.log"));

    let file = write_config("[logging]\nfile = \"\"\n");
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.logging.file_path(), None);

    let file = write_config("[logging]\nfile = \"  \"\n");
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.logging.file_path(), None);
}

#[test]
fn test_invalid_quality_is_rejected() {
    let file = write_config("[imaging]\njpeg_quality = 0\n");
    assert!(AppConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_debug_hides_secrets() {
    let file = write_config("[groq]\napi_key = \"gsk_secretvalue\"\n");
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert!(!format!("{:?}", config).contains("gsk_secretvalue"));
}
