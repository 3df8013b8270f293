use crate::{
    database::ConnectionPool,
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    customer::CustomerStatus,
    id::CustomerId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use std::{str::FromStr, sync::Arc};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_customer_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<CustomerId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(CustomerId::from))
    }

    async fn verify_customer(&self, email: &str, password: &str) -> AppResult<CustomerId> {
        let customer_row: Option<CustomerPasswordRow> = sqlx::query_as(
            r#"
                SELECT customer_id, password_hash, customer_status
                FROM customers
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(customer_row) = customer_row else {
            return Err(AppError::UnauthenticatedError);
        };

        // 退会済み（deactive）の顧客はログインできない
        let status = CustomerStatus::from_str(&customer_row.customer_status)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        if status == CustomerStatus::Deactive {
            return Err(AppError::UnauthenticatedError);
        }

        let valid = bcrypt::verify(password, &customer_row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(customer_row.customer_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let (key, value) = AuthorizationKey::from_event(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerPasswordRow {
    customer_id: CustomerId,
    password_hash: String,
    customer_status: String,
}

struct AuthorizationKey(String);
struct AuthorizedCustomerId(CustomerId);

impl AuthorizationKey {
    fn from_event(event: CreateToken) -> (Self, AuthorizedCustomerId) {
        let key = Self(uuid::Uuid::new_v4().simple().to_string());
        (key, AuthorizedCustomerId(event.customer_id))
    }
}

impl From<AuthorizationKey> for AccessToken {
    fn from(value: AuthorizationKey) -> Self {
        Self(value.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.to_string())
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(value: AccessToken) -> Self {
        Self(value.0)
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedCustomerId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl RedisValue for AuthorizedCustomerId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedCustomerId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(CustomerId::from_str(&value)?))
    }
}

impl From<AuthorizedCustomerId> for CustomerId {
    fn from(value: AuthorizedCustomerId) -> Self {
        value.0
    }
}
