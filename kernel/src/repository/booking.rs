use crate::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        Booking,
    },
    id::{BookingId, CustomerId},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を作成する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // すべての予約を顧客情報つきで取得する
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    // 予約日が [start, end]（終了日を含む）に入る予約を取得する
    async fn find_by_booked_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Booking>>;
    // 顧客 ID に紐づく予約を予約日の新しい順に取得する
    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>>;
    // booking_id から予約を取得する
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // 予約をキャンセルする
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;
}
