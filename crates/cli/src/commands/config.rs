use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use handoff_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["HANDOFF_LOGGING_LEVEL", "HANDOFF_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_ascii_lowercase(),
        field_source(
            "logging.format",
            &["HANDOFF_LOGGING_FORMAT", "HANDOFF_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "display.locale",
        &format!("{:?}", config.display.locale).to_ascii_lowercase(),
        field_source(
            "display.locale",
            &["HANDOFF_DISPLAY_LOCALE", "HANDOFF_LOCALE"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("  {key} = {value}  ({source})")
}

fn field_source(
    key: &str,
    env_keys: &[&str],
    doc: Option<&Value>,
    path: Option<&Path>,
) -> String {
    for env_key in env_keys {
        if env::var(env_key).map(|value| !value.trim().is_empty()).unwrap_or(false) {
            return format!("env: {env_key}");
        }
    }

    if let (Some(doc), Some(path)) = (doc, path) {
        if doc_has_key(doc, key) {
            return format!("file: {}", path.display());
        }
    }

    "default".to_string()
}

fn doc_has_key(doc: &Value, dotted_key: &str) -> bool {
    let mut current = doc;
    for part in dotted_key.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("handoff.toml"), PathBuf::from("config/handoff.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let raw = fs::read_to_string(path?).ok()?;
    raw.parse::<Value>().ok()
}
