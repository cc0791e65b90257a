use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;

use crate::error::HotelError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub rate: f64,
    pub occupied: bool,
}

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_number: row.get(1)?,
        rate: row.get(2)?,
        occupied: row.get(3)?,
    })
}

/// Insert a free room and return its id. A reused room number is a `Conflict`.
pub fn insert_room(conn: &Connection, room_number: &str, rate: f64) -> Result<i64, HotelError> {
    conn.execute(
        "INSERT INTO rooms (room_number, rate, occupied) VALUES (?1, ?2, 0)",
        params![room_number, rate],
    )
    .map_err(|e| match HotelError::from(e) {
        HotelError::Conflict(_) => HotelError::Conflict(format!("room '{room_number}' already exists")),
        other => other,
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>, HotelError> {
    let mut stmt = conn.prepare("SELECT id, room_number, rate, occupied FROM rooms ORDER BY id")?;
    let rooms = stmt
        .query_map([], room_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rooms)
}

pub fn find_room(conn: &Connection, id: i64) -> Result<Option<Room>, HotelError> {
    let room = conn
        .query_row(
            "SELECT id, room_number, rate, occupied FROM rooms WHERE id = ?1",
            params![id],
            room_from_row,
        )
        .optional()?;
    Ok(room)
}

/// Returns whether a room with that id existed.
pub fn set_occupied(conn: &Connection, id: i64, occupied: bool) -> Result<bool, HotelError> {
    let changed = conn.execute(
        "UPDATE rooms SET occupied = ?1 WHERE id = ?2",
        params![occupied, id],
    )?;
    Ok(changed > 0)
}

/// Current rates ordered by room id, so range bounds mean the same rooms
/// from one request to the next.
pub fn rate_snapshot(conn: &Connection) -> Result<Vec<f64>, HotelError> {
    let mut stmt = conn.prepare("SELECT rate FROM rooms ORDER BY id")?;
    let rates = stmt
        .query_map([], |row| row.get::<_, f64>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rates)
}
