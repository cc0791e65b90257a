pub mod bookings;
pub mod pool;
pub mod rooms;
pub mod schema;
pub mod users;
