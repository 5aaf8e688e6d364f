/// Database row types — these map directly to SQLite rows.
/// Distinct from veritas-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}
