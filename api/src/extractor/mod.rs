use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{
    auth::AccessToken,
    customer::Customer,
    id::CustomerId,
    role::Role,
};
use registry::AppRegistry;
use shared::error::AppError;

/// Bearer トークンで認証済みの顧客
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub customer: Customer,
}

impl AuthorizedUser {
    pub fn id(&self) -> CustomerId {
        self.customer.customer_id
    }

    pub fn is_admin(&self) -> bool {
        self.customer.role == Role::Admin
    }
}

#[async_trait::async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    // リクエストヘッダのアクセストークンから顧客を特定する
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthorizedError)?;
        let access_token = AccessToken(bearer.token().to_string());

        let customer_id = registry
            .auth_repository()
            .fetch_customer_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        let customer = registry
            .customer_repository()
            .find_by_id(customer_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            customer,
        })
    }
}
