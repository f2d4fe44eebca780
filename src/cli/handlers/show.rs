//! Show command handler

use std::io::Write;

use crate::AppState;
use crate::cli::parser::OutputFormat;

/// Handler for the show command
pub struct ShowCommandHandler<'a> {
    state: &'a AppState,
}

impl<'a> ShowCommandHandler<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Print the redacted settings in the requested format
    pub fn execute(&self, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
        let settings = self.state.settings().redacted();
        match format {
            OutputFormat::Text => {
                for (name, value) in settings.entries() {
                    writeln!(out, "{}={}", name, value.as_deref().unwrap_or("None"))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &settings)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn run(settings: Settings, format: OutputFormat) -> String {
        let state = AppState::new(settings);
        let mut out = Vec::new();
        ShowCommandHandler::new(&state)
            .execute(format, &mut out)
            .expect("show should succeed");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_text() {
        let output = run(Settings::default(), OutputFormat::Text);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "HTTP_BASE_URL=https://data-argo.ifremer.fr");
        assert!(lines.contains(&"HTTP_TIMEOUT=30"));
        assert!(lines.contains(&"PG_WRITE_URL=None"));
        assert!(lines.contains(&"LOCAL_STAGE_PATH=/tmp/raw_staging"));
    }

    #[test]
    fn test_show_json_redacts_secrets() {
        let output = run(
            Settings {
                s3_secret_key: Some("s3cr3t".to_string()),
                ..Settings::default()
            },
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["s3_secret_key"], "[REDACTED]");
        assert_eq!(value["s3_access_key"], serde_json::Value::Null);
        assert_eq!(value["http_timeout"], 30);
        assert!(!output.contains("s3cr3t"));
    }
}
