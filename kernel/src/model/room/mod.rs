use crate::model::id::RoomId;
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug)]
pub struct Room {
    pub room_id: RoomId,
    pub room_number: String,
    pub description: String,
    pub max_capacity: i32,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

/// 予約明細に埋め込む客室情報
#[derive(Debug)]
pub struct BookingRoom {
    pub room_id: RoomId,
    pub room_number: String,
}

/// 客室一覧の絞り込み条件
#[derive(Debug)]
pub struct RoomListOptions {
    pub limit: i64,
    pub offset: i64,
    pub available: Option<bool>,
}
