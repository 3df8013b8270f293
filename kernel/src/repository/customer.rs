use crate::model::{
    customer::{
        event::{CreateCustomer, DeactivateCustomer, UpdateCustomer, UpdateCustomerPassword},
        Customer,
    },
    id::CustomerId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    // 顧客を登録する
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId>;
    // すべての顧客を取得する
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    // customer_id に紐づく顧客を取得する
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>>;
    // 顧客のプロフィールを更新する
    async fn update(&self, event: UpdateCustomer) -> AppResult<()>;
    // 現在のパスワードを検証したうえでパスワードを更新する
    async fn update_password(&self, event: UpdateCustomerPassword) -> AppResult<()>;
    // 顧客を退会（Deactive 化）する
    async fn deactivate(&self, event: DeactivateCustomer) -> AppResult<()>;
}
