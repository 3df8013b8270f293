use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingListQuery, BookingResponse, BookingsResponse, CreateBookingRequest},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::event::{CancelBooking, CreateBooking},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let create_booking = CreateBooking::new(
        req.room_id,
        user.id(),
        chrono::Utc::now(),
        req.start_date,
        req.end_date,
    );

    // 宿泊日数・合計金額の計算と空室チェックはリポジトリ側の
    // トランザクション内で行われる
    let booking_id = registry
        .booking_repository()
        .create(create_booking)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "bookingId": booking_id.to_string() })),
    ))
}

// 期間指定がない場合は全件、start と end の両方があれば
// 予約日がその範囲（終了日を含む）に入る予約のみを返す
pub async fn show_booking_list(
    user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    query.validate(&())?;

    let bookings = match (query.start, query.end) {
        (None, None) => registry.booking_repository().find_all().await?,
        (Some(start), Some(end)) => {
            registry
                .booking_repository()
                .find_by_booked_date_range(start, end)
                .await?
        }
        _ => {
            return Err(AppError::UnprocessableEntity(
                "期間で絞り込む場合は start と end の両方を指定してください。".into(),
            ))
        }
    };

    Ok(Json(BookingsResponse::from(bookings)))
}

pub async fn show_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound("指定された予約が見つかりませんでした。".into())
        })?;

    // 管理者以外は自分の予約のみ参照できる
    if !user.is_admin() && booking.customer.customer_id != user.id() {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(Json(booking.into()))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound("指定された予約が見つかりませんでした。".into())
        })?;

    // 管理者以外は自分の予約のみキャンセルできる
    if !user.is_admin() && booking.customer.customer_id != user.id() {
        return Err(AppError::ForbiddenOperation);
    }

    let cancel_booking = CancelBooking::new(booking_id);
    registry
        .booking_repository()
        .cancel(cancel_booking)
        .await
        .map(|_| StatusCode::OK)
}
