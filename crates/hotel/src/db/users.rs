use rusqlite::{Connection, OptionalExtension, params};

use crate::error::HotelError;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub hashed_pw: String,
}

/// Insert a user and return its id. A taken username is a `Conflict`.
pub fn insert_user(conn: &Connection, username: &str, hashed_pw: &str) -> Result<i64, HotelError> {
    conn.execute(
        "INSERT INTO users (username, hashed_pw) VALUES (?1, ?2)",
        params![username, hashed_pw],
    )
    .map_err(|e| match HotelError::from(e) {
        HotelError::Conflict(_) => HotelError::Conflict(format!("username '{username}' is taken")),
        other => other,
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_username(conn: &Connection, username: &str) -> Result<Option<UserRecord>, HotelError> {
    let user = conn
        .query_row(
            "SELECT id, username, hashed_pw FROM users WHERE username = ?1",
            params![username],
            |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    hashed_pw: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}
