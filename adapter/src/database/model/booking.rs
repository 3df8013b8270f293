use kernel::model::{
    booking::{Booking, BookingDetail, BookingStatus},
    customer::BookingCustomer,
    id::{BookingId, CustomerId, RoomId},
};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

// 予約一覧を取得する際に使う型。
// bookings・customers・booking_details・rooms を JOIN した
// 明細 1 行ぶんのレコードがこの型にはまる。
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub booked_at: DateTime<Utc>,
    pub total_price: Decimal,
    pub booking_status: String,
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub room_id: RoomId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_price: Decimal,
}

impl BookingRow {
    fn into_detail(self) -> BookingDetail {
        let BookingRow {
            room_id,
            room_number,
            start_date,
            end_date,
            actual_price,
            ..
        } = self;
        BookingDetail {
            room_id,
            room_number,
            start_date,
            end_date,
            actual_price,
        }
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let booking_status = BookingStatus::from_str(&value.booking_status)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        let customer = BookingCustomer {
            customer_id: value.customer_id,
            full_name: value.full_name.clone(),
            email: value.email.clone(),
        };
        Ok(Booking {
            booking_id: value.booking_id,
            booked_at: value.booked_at,
            total_price: value.total_price,
            booking_status,
            customer,
            details: vec![value.into_detail()],
        })
    }
}

// JOIN 結果の明細行を予約ごとにまとめる。
// 行は booking_id が連続するように並んでいる前提（SQL 側で保証する）。
pub fn rows_into_bookings(rows: Vec<BookingRow>) -> AppResult<Vec<Booking>> {
    let mut bookings: Vec<Booking> = Vec::new();
    for row in rows {
        match bookings.last_mut() {
            Some(booking) if booking.booking_id == row.booking_id => {
                booking.details.push(row.into_detail());
            }
            _ => bookings.push(row.try_into()?),
        }
    }
    Ok(bookings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(booking_id: BookingId, room_number: &str) -> BookingRow {
        BookingRow {
            booking_id,
            booked_at: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            total_price: Decimal::new(45000, 2),
            booking_status: "confirmed".into(),
            customer_id: CustomerId::new(),
            full_name: "Eleanor Young".into(),
            email: "eleanor@example.com".into(),
            room_id: RoomId::new(),
            room_number: room_number.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            actual_price: Decimal::new(15000, 2),
        }
    }

    #[test]
    fn single_detail_booking() {
        let bookings = rows_into_bookings(vec![row(BookingId::new(), "101")]).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].details.len(), 1);
        assert_eq!(bookings[0].details[0].room_number, "101");
        assert_eq!(bookings[0].booking_status, BookingStatus::Confirmed);
    }

    #[test]
    fn consecutive_rows_group_into_one_booking() {
        let id = BookingId::new();
        let bookings = rows_into_bookings(vec![row(id, "101"), row(id, "102")]).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].details.len(), 2);
    }

    #[test]
    fn distinct_bookings_stay_separate() {
        let bookings =
            rows_into_bookings(vec![row(BookingId::new(), "101"), row(BookingId::new(), "102")])
                .unwrap();
        assert_eq!(bookings.len(), 2);
    }

    #[test]
    fn unknown_status_fails_conversion() {
        let mut bad = row(BookingId::new(), "101");
        bad.booking_status = "pending".into();
        assert!(matches!(
            rows_into_bookings(vec![bad]),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
