use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id        INTEGER PRIMARY KEY,
    username  TEXT NOT NULL UNIQUE,
    hashed_pw TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS rooms (
    id          INTEGER PRIMARY KEY,
    room_number TEXT NOT NULL UNIQUE,
    rate        REAL NOT NULL,
    occupied    INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS bookings (
    id             INTEGER PRIMARY KEY,
    client_id      INTEGER REFERENCES users(id),
    room_ref       INTEGER REFERENCES rooms(id),
    check_in_date  TEXT NOT NULL,
    check_out_date TEXT NOT NULL
);
";

/// Create the tables if they are missing. Idempotent.
///
/// `REFERENCES` clauses document the relations only: bookings may name a
/// guest that never registered and outlive the room they point at, so
/// foreign-key enforcement is switched off on every connection.
pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    conn.execute_batch(SCHEMA)
}
