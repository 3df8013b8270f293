use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoomId,
    list::PaginatedList,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomListOptions,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 1 泊あたりの料金は正の値でなければならない
fn positive_price(value: &Decimal, _: &()) -> garde::Result {
    if *value <= Decimal::ZERO {
        return Err(garde::Error::new(
            "price per night must be greater than zero",
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 1))]
    pub max_capacity: i32,
    #[garde(custom(positive_price))]
    pub price_per_night: Decimal,
    #[garde(skip)]
    pub is_available: bool,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        } = value;
        CreateRoom {
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 1))]
    pub max_capacity: i32,
    #[garde(custom(positive_price))]
    pub price_per_night: Decimal,
    #[garde(skip)]
    pub is_available: bool,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                room_number,
                description,
                max_capacity,
                price_per_night,
                is_available,
            },
        ) = value;
        UpdateRoom {
            room_id,
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
    #[garde(skip)]
    pub available: Option<bool>,
}

const DEFAULT_LIMIT: i64 = 20;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl From<RoomListQuery> for RoomListOptions {
    fn from(value: RoomListQuery) -> Self {
        let RoomListQuery {
            limit,
            offset,
            available,
        } = value;
        Self {
            limit,
            offset,
            available,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRoomResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<RoomResponse>,
}

impl From<PaginatedList<Room>> for PaginatedRoomResponse {
    fn from(value: PaginatedList<Room>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: RoomId,
    pub room_number: String,
    pub description: String,
    pub max_capacity: i32,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        } = value;
        Self {
            room_id,
            room_number,
            description,
            max_capacity,
            price_per_night,
            is_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    #[test]
    fn default_limit_applies_when_omitted() {
        let query: RoomListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, 0);
        assert!(query.available.is_none());
        assert!(query.validate(&()).is_ok());
    }

    #[test]
    fn oversized_limit_is_rejected() {
        let query: RoomListQuery = serde_json::from_str(r#"{"limit": 1000}"#).unwrap();
        assert!(query.validate(&()).is_err());
    }

    #[test]
    fn negative_offset_is_rejected() {
        let query: RoomListQuery = serde_json::from_str(r#"{"offset": -1}"#).unwrap();
        assert!(query.validate(&()).is_err());
    }

    fn valid_create_request() -> CreateRoomRequest {
        CreateRoomRequest {
            room_number: "101".into(),
            description: "Twin room".into(),
            max_capacity: 2,
            price_per_night: Decimal::new(15000, 2),
            is_available: true,
        }
    }

    #[test]
    fn valid_room_request_passes() {
        assert!(valid_create_request().validate(&()).is_ok());
    }

    #[test]
    fn zero_capacity_room_is_rejected() {
        let mut req = valid_create_request();
        req.max_capacity = 0;
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn zero_price_room_is_rejected() {
        let mut req = valid_create_request();
        req.price_per_night = Decimal::ZERO;
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn negative_price_room_is_rejected() {
        let mut req = valid_create_request();
        req.price_per_night = Decimal::new(-5000, 2);
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn negative_price_update_is_rejected() {
        let req = UpdateRoomRequest {
            room_number: "101".into(),
            description: "Twin room".into(),
            max_capacity: 2,
            price_per_night: Decimal::new(-5000, 2),
            is_available: true,
        };
        assert!(req.validate(&()).is_err());
    }
}
