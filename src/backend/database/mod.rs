//! Database abstraction layer
//!
//! Provides a unified interface for the doctors table across database
//! backends (PostgreSQL, SQLite). Each backend owns its own sqlx pool and
//! its own SQL text; all request data is bound as parameters, never
//! concatenated into the statement.

pub mod config;
pub mod postgres;
pub mod sqlite;

pub use config::DatabaseBackendConfig;

use crate::error::{AppError, AppResult};

/// Parse a path-supplied doctor id into the integer the store expects.
///
/// The HTTP layer passes the id through unvalidated; this is the point where
/// a non-numeric value gets rejected, as a client error rather than a server
/// fault.
pub(crate) fn parse_doctor_id(id: &str) -> AppResult<i64> {
    id.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid doctor id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_doctor_id("42").unwrap(), 42);
    }

    #[test]
    fn non_numeric_ids_are_bad_requests() {
        match parse_doctor_id("abc") {
            Err(AppError::BadRequest(message)) => assert!(message.contains("abc")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
