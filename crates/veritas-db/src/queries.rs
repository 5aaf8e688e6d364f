use crate::models::UserRow;
use crate::{Database, StoreError};
use rusqlite::{Connection, OptionalExtension};

impl Database {
    /// Insert a new user. The UNIQUE constraint on email makes this a
    /// transactional insert-or-fail; a violated constraint surfaces as
    /// `StoreError::DuplicateEmail`.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)",
                (name, email, password_hash),
            )
            .map_err(map_unique_violation)?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }
}

fn map_unique_violation(err: rusqlite::Error) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicateEmail
        }
        _ => StoreError::Sqlite(err),
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?1",
    )?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password_hash: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_fetch_user() {
        let db = Database::open_in_memory().unwrap();

        let id = db.create_user("Ada", "ada@example.com", "hash-a").unwrap();
        assert!(id > 0);

        let row = db.get_user_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.name, "Ada");
        assert_eq!(row.password_hash, "hash-a");
    }

    #[test]
    fn unknown_email_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn duplicate_email_is_rejected_once() {
        let db = Database::open_in_memory().unwrap();

        db.create_user("Ada", "ada@example.com", "hash-a").unwrap();

        // Same email with a different name and hash still violates uniqueness.
        let err = db
            .create_user("Grace", "ada@example.com", "hash-g")
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));

        // The first row is untouched.
        let row = db.get_user_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(row.name, "Ada");
    }
}
