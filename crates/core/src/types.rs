/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// A create/update payload: a JSON object whose keys are column names.
///
/// Payloads are forwarded to the store as-is; only the service-level
/// required-field checks look inside them.
pub type Fields = serde_json::Map<String, serde_json::Value>;
