use crate::database::{
    model::booking::{rows_into_bookings, BookingRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        stay_nights, total_price, Booking, BookingStatus,
    },
    id::{BookingId, CustomerId},
};
use kernel::repository::booking::BookingRepository;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

const BOOKING_SELECT: &str = r#"
    SELECT
        b.booking_id,
        b.booked_at,
        b.total_price,
        b.booking_status,
        c.customer_id,
        c.full_name,
        c.email,
        d.room_id,
        r.room_number,
        d.start_date,
        d.end_date,
        d.actual_price
    FROM bookings AS b
    INNER JOIN customers AS c ON b.customer_id = c.customer_id
    INNER JOIN booking_details AS d ON b.booking_id = d.booking_id
    INNER JOIN rooms AS r ON d.room_id = r.room_id
"#;

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        // 宿泊日数が正であることを先に確かめる
        let nights = stay_nights(event.start_date, event.end_date)?;

        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の客室 ID をもつ客室が存在するか
        // - 存在した場合、その客室は利用可能か
        // - その宿泊期間は既存の予約と重なっていないか
        //
        // すべて Yes だった場合、このブロック以降の処理に進む
        let price_per_night: Decimal = {
            //
            // ① 客室の存在確認 ＋ is_available チェック
            //
            let room_row: Option<(bool, Decimal)> = sqlx::query_as(
                r#"
                SELECT is_available, price_per_night
                FROM rooms
                WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let (is_available, price_per_night) = match room_row {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "客室（{}）が見つかりませんでした。",
                        event.room_id
                    )))
                }
                Some(r) => r,
            };

            if !is_available {
                return Err(AppError::UnprocessableEntity(format!(
                    "客室（{}）は現在利用できません（is_available = false）",
                    event.room_id
                )));
            }

            //
            // ② 希望宿泊期間が既存の予約と重なっていないか確認
            //    重複条件：
            //        existing.start < new.end AND new.start < existing.end
            //
            let overlap: Option<(BookingId,)> = sqlx::query_as(
                r#"
                SELECT d.booking_id
                FROM booking_details AS d
                INNER JOIN bookings AS b ON d.booking_id = b.booking_id
                WHERE d.room_id = $1
                  AND b.booking_status = 'confirmed'
                  AND d.start_date < $3
                  AND $2 < d.end_date
                LIMIT 1
                "#,
            )
            .bind(event.room_id)
            .bind(event.start_date)
            .bind(event.end_date)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if overlap.is_some() {
                return Err(AppError::UnprocessableEntity(format!(
                    "客室（{}）は指定期間にすでに予約が存在します。",
                    event.room_id
                )));
            }

            price_per_night
        };

        // 合計金額 = 1 泊あたりの料金 × 宿泊日数
        let total = total_price(price_per_night, nights);

        // 予約処理を行う、すなわち bookings テーブルと
        // booking_details テーブルにレコードを追加する
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, customer_id, booked_at, total_price, booking_status)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.booked_at)
        .bind(total)
        .bind(BookingStatus::Confirmed.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        let res = sqlx::query(
            r#"
                INSERT INTO booking_details
                (booking_id, room_id, start_date, end_date, actual_price)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(booking_id)
        .bind(event.room_id)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(price_per_night)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking detail record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{BOOKING_SELECT} ORDER BY b.booked_at DESC, b.booking_id"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows_into_bookings(rows)
    }

    // 予約日が [start, end] に入る予約を取得する。終了日当日の予約も含める
    async fn find_by_booked_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let (range_start, range_end) = booked_range_bounds(start, end)?;

        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"{BOOKING_SELECT}
            WHERE b.booked_at >= $1 AND b.booked_at < $2
            ORDER BY b.booked_at DESC, b.booking_id"#
        ))
        .bind(range_start)
        .bind(range_end)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows_into_bookings(rows)
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"{BOOKING_SELECT}
            WHERE b.customer_id = $1
            ORDER BY b.booked_at DESC, b.booking_id"#
        ))
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows_into_bookings(rows)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{BOOKING_SELECT} WHERE b.booking_id = $1"
        ))
        .bind(booking_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows_into_bookings(rows)?.into_iter().next())
    }

    // キャンセル操作。confirmed の予約のみ cancelled に遷移できる
    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET booking_status = $1
                WHERE booking_id = $2 AND booking_status = $3
            "#,
        )
        .bind(BookingStatus::Cancelled.as_ref())
        .bind(event.booking_id)
        .bind(BookingStatus::Confirmed.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::UnprocessableEntity(format!(
                "予約（{}）はキャンセルできません（存在しないかキャンセル済みです）。",
                event.booking_id
            )));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    // create メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

// [start, end] の日付範囲を、終了日の翌日 0 時を排他的上限とする
// タイムスタンプ範囲に変換する
fn booked_range_bounds(
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    if end < start {
        return Err(AppError::UnprocessableEntity(
            "終了日は開始日以降の日付を指定してください。".into(),
        ));
    }
    let next_day = end.succ_opt().ok_or_else(|| {
        AppError::UnprocessableEntity("終了日が日付の上限を超えています。".into())
    })?;
    let range_start = start.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let range_end = next_day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    Ok((range_start, range_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_includes_whole_end_day() {
        let (start, end) = booked_range_bounds(date(2024, 3, 1), date(2024, 3, 5)).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
        // 3/5 いっぱいまでを含むので上限は 3/6 の 0 時
        assert_eq!(end.to_rfc3339(), "2024-03-06T00:00:00+00:00");
    }

    #[test]
    fn single_day_range_spans_one_day() {
        let (start, end) = booked_range_bounds(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert_eq!((end - start).num_days(), 1);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let res = booked_range_bounds(date(2024, 3, 5), date(2024, 3, 1));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }
}
