use crate::model::id::RoomId;
use rust_decimal::Decimal;

pub struct CreateRoom {
    pub room_number: String,
    pub description: String,
    pub max_capacity: i32,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

#[derive(Debug)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub room_number: String,
    pub description: String,
    pub max_capacity: i32,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

#[derive(Debug)]
pub struct DeleteRoom {
    pub room_id: RoomId,
}
