//! Deployment environment tag

use std::str::FromStr;

use crate::config::error::ConfigError;

/// Deployment environment selected by `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production deployment
    #[default]
    Prod,
    /// Local development
    Dev,
}

impl Environment {
    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Dev => "dev",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Prod)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Ok(Environment::Prod),
            "dev" | "development" => Ok(Environment::Dev),
            _ => Err(ConfigError::unsupported("ENVIRONMENT", s, "prod, dev")),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Prod);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Dev);
    }

    #[test]
    fn test_environment_case_insensitive() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Prod);
        assert_eq!("Dev".parse::<Environment>().unwrap(), Environment::Dev);
    }

    #[test]
    fn test_environment_invalid() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert_eq!(err.field(), Some("ENVIRONMENT"));
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_environment_default_and_display() {
        assert_eq!(Environment::default(), Environment::Prod);
        assert!(Environment::Prod.is_production());
        assert!(!Environment::Dev.is_production());
        assert_eq!(Environment::Dev.to_string(), "dev");
    }
}
