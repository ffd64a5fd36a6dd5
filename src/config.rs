use crate::constants::*;
use crate::users::{Argon2Hash, CredentialScheme, PlainText};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PasswordScheme {
    /// Verbatim storage and comparison; the demo-data default.
    Plain,
    Argon2,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub seed_demo: bool,
    pub password_scheme: PasswordScheme,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeedFlag(String),
    InvalidPasswordScheme(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSeedFlag(value) => {
                write!(f, "EXPENSEFLOW_SEED_DEMO must be true or false, got: {}", value)
            }
            ConfigError::InvalidPasswordScheme(value) => {
                write!(
                    f,
                    "EXPENSEFLOW_PASSWORD_SCHEME must be plain or argon2, got: {}",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path =
            env::var("EXPENSEFLOW_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

        let seed_demo = match env::var("EXPENSEFLOW_SEED_DEMO") {
            Err(_) => true,
            Ok(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidSeedFlag(raw)),
            },
        };

        let password_scheme = match env::var("EXPENSEFLOW_PASSWORD_SCHEME") {
            Err(_) => PasswordScheme::Plain,
            Ok(raw) => match raw.to_ascii_lowercase().as_str() {
                "plain" => PasswordScheme::Plain,
                "argon2" => PasswordScheme::Argon2,
                _ => return Err(ConfigError::InvalidPasswordScheme(raw)),
            },
        };

        Ok(Config {
            data_path,
            seed_demo,
            password_scheme,
        })
    }

    pub fn credential_scheme(&self) -> Box<dyn CredentialScheme> {
        match self.password_scheme {
            PasswordScheme::Plain => Box::new(PlainText),
            PasswordScheme::Argon2 => Box::new(Argon2Hash),
        }
    }
}
