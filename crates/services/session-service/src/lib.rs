//! Interview Session Service Library
//!
//! Storage mapping for interview sessions: SeaORM entities, the explicit
//! table definition, and the session repository. Connection setup and
//! migrations belong to the hosting application, which hands an open
//! `Arc<DatabaseConnection>` to [`SessionStore`].

pub mod config;
pub mod repository;
pub mod schema;

use std::io::BufRead;

use common::AppResult;
use domain::{verify_password, Password};
use tracing::info;

pub use crate::config::SessionServiceConfig;
pub use crate::repository::{InterviewSessionRepository, SessionStore};
pub use crate::schema::{interview_sessions, SchemaBackend, TableSchema};

/// Render the `interview_sessions` definition, as SQL or as JSON.
pub fn render_schema(backend: SchemaBackend, json: bool) -> Result<String, serde_json::Error> {
    let schema = interview_sessions();
    if json {
        serde_json::to_string_pretty(&schema)
    } else {
        Ok(schema.to_sql(backend))
    }
}

/// Read one line from `input`, dropping the trailing newline only.
pub fn read_secret(input: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Hash a password with the configured Argon2 costs.
pub fn hash_password(plain_text: &str, config: &SessionServiceConfig) -> AppResult<String> {
    let password = Password::hash_with(plain_text, &config.password_hashing)?;
    info!(
        memory_kib = config.password_hashing.memory_kib,
        iterations = config.password_hashing.iterations,
        "Password hashed"
    );
    Ok(password.into_string())
}

/// Check a password against a stored hash; any failure is a mismatch.
pub fn check_password(plain_text: &str, stored_hash: &str) -> bool {
    verify_password(plain_text, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::HashingParams;
    use std::io::Cursor;

    #[test]
    fn test_read_secret_strips_line_ending() {
        let mut input = Cursor::new("hunter2\r\nignored\n");
        assert_eq!(read_secret(&mut input).unwrap(), "hunter2");
    }

    #[test]
    fn test_read_secret_keeps_inner_whitespace() {
        let mut input = Cursor::new("  spaced out  ");
        assert_eq!(read_secret(&mut input).unwrap(), "  spaced out  ");
    }

    #[test]
    fn test_read_secret_empty_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_secret(&mut input).unwrap(), "");
    }

    #[test]
    fn test_hash_then_check() {
        let config = SessionServiceConfig {
            password_hashing: HashingParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            ..SessionServiceConfig::default()
        };

        let hash = hash_password("correct horse", &config).unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"));
        assert!(check_password("correct horse", &hash));
        assert!(!check_password("battery staple", &hash));
    }

    #[test]
    fn test_render_schema_json() {
        let out = render_schema(SchemaBackend::Postgres, true).unwrap();
        assert!(out.contains("\"name\": \"interview_sessions\""));
    }

    #[test]
    fn test_render_schema_sqlite() {
        let out = render_schema(SchemaBackend::Sqlite, false).unwrap();
        assert!(out.starts_with("CREATE TABLE IF NOT EXISTS"));
        assert!(out.contains("interview_sessions"));
    }
}
