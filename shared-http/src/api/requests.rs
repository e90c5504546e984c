use serde::Serialize;

/// Output format appended to every statement sent over HTTP.
pub const JSON_FORMAT: &str = "FORMAT JSON";

/// Query string for `GET /?query=...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    pub query: String,
}

impl QueryParams {
    /// Wraps a `SELECT` so the server answers with the JSON envelope.
    pub fn json(sql: impl AsRef<str>) -> Self {
        let sql = sql.as_ref().trim().trim_end_matches(';').trim_end();
        Self {
            query: format!("{sql} {JSON_FORMAT}"),
        }
    }
}

// === Statements ===

pub const SERVER_VERSION_QUERY: &str = "SELECT version() AS version";

/// Any grant of `ALL` or `ACCESS MANAGEMENT`, held directly or through a role.
pub const ADMIN_GRANTS_QUERY: &str = "SELECT count() > 0 AS is_admin FROM system.grants \
     WHERE access_type IN ('ALL', 'ACCESS MANAGEMENT') \
     AND (user_name = currentUser() \
     OR role_name IN (SELECT granted_role_name FROM system.role_grants \
     WHERE user_name = currentUser()))";
