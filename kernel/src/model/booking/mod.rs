use crate::model::{
    customer::BookingCustomer,
    id::{BookingId, RoomId},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_at: DateTime<Utc>,
    pub total_price: Decimal,
    pub booking_status: BookingStatus,
    pub customer: BookingCustomer,
    pub details: Vec<BookingDetail>,
}

#[derive(Debug)]
pub struct BookingDetail {
    pub room_id: RoomId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_price: Decimal,
}

/// 宿泊日数を計算する。終了日が開始日以前の場合はエラーを返す。
pub fn stay_nights(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<i64> {
    let nights = (end_date - start_date).num_days();
    if nights <= 0 {
        return Err(AppError::UnprocessableEntity(
            "宿泊終了日は開始日より後の日付を指定してください。".into(),
        ));
    }
    Ok(nights)
}

/// 宿泊料金の合計 = 1 泊あたりの料金 × 宿泊日数
pub fn total_price(price_per_night: Decimal, nights: i64) -> Decimal {
    price_per_night * Decimal::from(nights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_night_stay() {
        assert_eq!(stay_nights(date(2024, 3, 1), date(2024, 3, 2)).unwrap(), 1);
    }

    #[test]
    fn multi_night_stay() {
        assert_eq!(stay_nights(date(2024, 3, 1), date(2024, 3, 8)).unwrap(), 7);
    }

    #[test]
    fn zero_length_stay_is_rejected() {
        let res = stay_nights(date(2024, 3, 1), date(2024, 3, 1));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let res = stay_nights(date(2024, 3, 5), date(2024, 3, 1));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn total_is_nightly_rate_times_nights() {
        // 150.00 × 3 泊 = 450.00
        assert_eq!(
            total_price(Decimal::new(15000, 2), 3),
            Decimal::new(45000, 2)
        );
    }
}
