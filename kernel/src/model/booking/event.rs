use crate::model::id::{BookingId, CustomerId, RoomId};
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub booked_by: CustomerId,
    pub booked_at: DateTime<Utc>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// キャンセル可否（本人または管理者）の確認は API 層で行う
#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
}
