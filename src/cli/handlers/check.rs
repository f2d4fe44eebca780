//! Check command handler
//!
//! Reports the effective settings of an already loaded configuration.

use std::io::Write;

use crate::AppState;

/// Handler for the check command
pub struct CheckCommandHandler<'a> {
    state: &'a AppState,
}

impl<'a> CheckCommandHandler<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Log every setting (secrets redacted) and print a short report
    ///
    /// Values the typed views do not recognise are reported as warnings; they
    /// never fail the check.
    pub fn execute(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let settings = self.state.settings().redacted();

        for (name, value) in settings.entries() {
            tracing::info!(
                setting = name,
                value = value.as_deref().unwrap_or("None"),
                "Effective setting"
            );
        }

        writeln!(out, "✓ Configuration loaded")?;
        writeln!(out, "✓ Data source: {} (DAC {})", settings.http_base_url, settings.argo_dac)?;

        match self.state.settings().deployment() {
            Ok(env) => writeln!(out, "✓ Environment: {}", env)?,
            Err(e) => {
                tracing::warn!(error = %e, "Unrecognised environment");
                writeln!(out, "! {}", e)?;
            }
        }

        match self.state.settings().compression() {
            Ok(codec) => writeln!(out, "✓ Parquet compression: {}", codec)?,
            Err(e) => {
                tracing::warn!(error = %e, "Unrecognised compression codec");
                writeln!(out, "! {}", e)?;
            }
        }

        if self.state.settings().database_enabled() {
            writeln!(out, "✓ Metadata database is configured")?;
        } else {
            writeln!(out, "- Metadata database disabled (PG_WRITE_URL not set)")?;
        }

        if self.state.settings().s3_credentials().is_some() {
            writeln!(
                out,
                "✓ Object storage credentials for bucket '{}'",
                settings.s3_bucket_name
            )?;
        } else {
            writeln!(out, "- Object storage credentials not set")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn run(settings: Settings) -> String {
        let state = AppState::new(settings);
        let mut out = Vec::new();
        CheckCommandHandler::new(&state)
            .execute(&mut out)
            .expect("check should succeed");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_defaults() {
        let report = run(Settings::default());
        assert!(report.contains("Configuration loaded"));
        assert!(report.contains("DAC incois"));
        assert!(report.contains("Environment: prod"));
        assert!(report.contains("Parquet compression: snappy"));
        assert!(report.contains("Metadata database disabled"));
        assert!(report.contains("credentials not set"));
    }

    #[test]
    fn test_check_reports_unknown_values_without_failing() {
        let report = run(Settings {
            environment: "staging".to_string(),
            parquet_compression: "lz4".to_string(),
            ..Settings::default()
        });
        assert!(report.contains("'staging'"));
        assert!(report.contains("'lz4'"));
    }

    #[test]
    fn test_check_never_prints_secrets() {
        let report = run(Settings {
            pg_write_url: Some("postgres://atlas:hunter2@db/atlas".to_string()),
            s3_access_key: Some("AKIAEXAMPLE".to_string()),
            s3_secret_key: Some("s3cr3t".to_string()),
            ..Settings::default()
        });
        assert!(report.contains("Metadata database is configured"));
        assert!(report.contains("bucket 'atlas'"));
        assert!(!report.contains("hunter2"));
        assert!(!report.contains("s3cr3t"));
    }
}
