use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use serde::Serialize;

use crate::db::rooms;
use crate::error::HotelError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: i64,
    pub client_id: i64,
    pub room_ref: i64,
    pub check_in_date: String,
    pub check_out_date: String,
}

#[derive(Debug, Clone)]
pub struct NewBooking<'a> {
    pub client_id: i64,
    pub room_ref: i64,
    pub check_in_date: &'a str,
    pub check_out_date: &'a str,
}

/// Mark the room occupied and record the booking, atomically.
///
/// The write lock is taken up front so concurrent reservations of one room
/// queue behind each other instead of failing to upgrade a read lock.
///
/// A missing or already occupied room is `BadRequest("Room not available")`.
pub fn reserve(conn: &mut Connection, booking: &NewBooking<'_>) -> Result<i64, HotelError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let available = rooms::find_room(&tx, booking.room_ref)?.is_some_and(|room| !room.occupied);
    if !available {
        return Err(HotelError::BadRequest("Room not available".to_string()));
    }

    rooms::set_occupied(&tx, booking.room_ref, true)?;
    tx.execute(
        "INSERT INTO bookings (client_id, room_ref, check_in_date, check_out_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            booking.client_id,
            booking.room_ref,
            booking.check_in_date,
            booking.check_out_date
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;
    Ok(id)
}

pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>, HotelError> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, room_ref, check_in_date, check_out_date
         FROM bookings ORDER BY id",
    )?;
    let bookings = stmt
        .query_map([], |row| {
            Ok(Booking {
                id: row.get(0)?,
                client_id: row.get(1)?,
                room_ref: row.get(2)?,
                check_in_date: row.get(3)?,
                check_out_date: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(bookings)
}

/// Delete the booking and free its room if the room still exists.
///
/// A missing booking is `NotFound("Booking not found")`.
pub fn cancel(conn: &mut Connection, booking_id: i64) -> Result<(), HotelError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let room_ref: Option<i64> = tx
        .query_row(
            "SELECT room_ref FROM bookings WHERE id = ?1",
            params![booking_id],
            |row| row.get(0),
        )
        .optional()?;
    let Some(room_ref) = room_ref else {
        return Err(HotelError::NotFound("Booking not found".to_string()));
    };

    rooms::set_occupied(&tx, room_ref, false)?;
    tx.execute("DELETE FROM bookings WHERE id = ?1", params![booking_id])?;
    tx.commit()?;
    Ok(())
}
