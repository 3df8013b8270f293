use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::CustomerId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンから顧客 ID を引く
    async fn fetch_customer_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<CustomerId>>;
    // メールアドレスとパスワードで顧客を認証する
    async fn verify_customer(&self, email: &str, password: &str) -> AppResult<CustomerId>;
    // アクセストークンを発行する
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    // アクセストークンを破棄する
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}
