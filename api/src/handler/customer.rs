use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::BookingsResponse,
        customer::{
            CreateCustomerRequest, CustomerResponse, CustomersResponse,
            UpdateCustomerPasswordRequest, UpdateCustomerPasswordRequestWithId,
            UpdateCustomerRequest, UpdateCustomerRequestWithId,
        },
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{customer::event::DeactivateCustomer, id::CustomerId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_customer(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCustomerRequest>,
) -> AppResult<impl IntoResponse> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let customer_id = registry.customer_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "customerId": customer_id.to_string() })),
    ))
}

pub async fn show_customer_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CustomersResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .customer_repository()
        .find_all()
        .await
        .map(CustomersResponse::from)
        .map(Json)
}

pub async fn show_customer(
    user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CustomerResponse>> {
    // 管理者以外は自分自身の情報のみ参照できる
    if !user.is_admin() && user.id() != customer_id {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .customer_repository()
        .find_by_id(customer_id)
        .await
        .and_then(|c| match c {
            Some(c) => Ok(Json(c.into())),
            None => Err(AppError::EntityNotFound(
                "指定された顧客が見つかりませんでした。".into(),
            )),
        })
}

pub async fn show_current_customer(user: AuthorizedUser) -> Json<CustomerResponse> {
    Json(CustomerResponse::from(user.customer))
}

pub async fn show_current_customer_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_customer_id(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn update_customer(
    user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateCustomerRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() && user.id() != customer_id {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_customer = UpdateCustomerRequestWithId::new(customer_id, req);
    registry
        .customer_repository()
        .update(update_customer.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn update_current_customer_password(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateCustomerPasswordRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_password = UpdateCustomerPasswordRequestWithId::new(user.id(), req);
    registry
        .customer_repository()
        .update_password(update_password.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn deactivate_customer(
    user: AuthorizedUser,
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let deactivate_customer = DeactivateCustomer {
        customer_id,
    };
    registry
        .customer_repository()
        .deactivate(deactivate_customer)
        .await
        .map(|_| StatusCode::OK)
}
