use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingDetail, BookingStatus},
    customer::BookingCustomer,
    id::{BookingId, CustomerId, RoomId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub start_date: NaiveDate,
    #[garde(skip)]
    pub end_date: NaiveDate,
}

// 絞り込みなし、または start と end の両方を指定する
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[garde(skip)]
    pub start: Option<NaiveDate>,
    #[garde(skip)]
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, VariantNames)]
pub enum BookingStatusName {
    Confirmed,
    Cancelled,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub booked_at: DateTime<Utc>,
    pub total_price: Decimal,
    pub booking_status: BookingStatusName,
    pub customer: BookingCustomerResponse,
    pub details: Vec<BookingDetailResponse>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            booked_at,
            total_price,
            booking_status,
            customer,
            details,
        } = value;
        Self {
            booking_id,
            booked_at,
            total_price,
            booking_status: booking_status.into(),
            customer: customer.into(),
            details: details.into_iter().map(BookingDetailResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCustomerResponse {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
}

impl From<BookingCustomer> for BookingCustomerResponse {
    fn from(value: BookingCustomer) -> Self {
        let BookingCustomer {
            customer_id,
            full_name,
            email,
        } = value;
        Self {
            customer_id,
            full_name,
            email,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailResponse {
    pub room_id: RoomId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_price: Decimal,
}

impl From<BookingDetail> for BookingDetailResponse {
    fn from(value: BookingDetail) -> Self {
        let BookingDetail {
            room_id,
            room_number,
            start_date,
            end_date,
            actual_price,
        } = value;
        Self {
            room_id,
            room_number,
            start_date,
            end_date,
            actual_price,
        }
    }
}
