use kernel::model::{id::RoomId, room::Room};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_number: String,
    pub description: String,
    pub max_capacity: i32,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        } = value;
        Room {
            room_id,
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        }
    }
}

// ページネーション用の adapter 内部の型
#[derive(sqlx::FromRow)]
pub struct PaginatedRoomRow {
    pub total: i64,
    pub room_id: RoomId,
}
