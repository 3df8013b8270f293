use crate::database::{model::customer::CustomerRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    customer::{
        event::{CreateCustomer, DeactivateCustomer, UpdateCustomer, UpdateCustomerPassword},
        Customer, CustomerStatus,
    },
    id::CustomerId,
    role::Role,
};
use kernel::repository::customer::CustomerRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CustomerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    // 顧客を登録する。パスワードは bcrypt でハッシュ化して保存する
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId> {
        let customer_id = CustomerId::new();
        let hashed_password = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let res = sqlx::query(
            r#"
                INSERT INTO customers
                (customer_id, full_name, email, telephone, birthday,
                password_hash, customer_status, role)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer_id)
        .bind(&event.full_name)
        .bind(&event.email)
        .bind(&event.telephone)
        .bind(event.birthday)
        .bind(hashed_password)
        .bind(CustomerStatus::Active.as_ref())
        .bind(Role::Customer.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No customer record has been created".into(),
            ));
        }

        Ok(customer_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
                SELECT
                    customer_id,
                    full_name,
                    email,
                    telephone,
                    birthday,
                    customer_status,
                    role
                FROM customers
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Customer::try_from).collect()
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
                SELECT
                    customer_id,
                    full_name,
                    email,
                    telephone,
                    birthday,
                    customer_status,
                    role
                FROM customers
                WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Customer::try_from).transpose()
    }

    async fn update(&self, event: UpdateCustomer) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE customers
                SET
                    full_name = $1,
                    email = $2,
                    telephone = $3,
                    birthday = $4
                WHERE customer_id = $5
            "#,
        )
        .bind(&event.full_name)
        .bind(&event.email)
        .bind(&event.telephone)
        .bind(event.birthday)
        .bind(event.customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "指定された顧客が見つかりませんでした。".into(),
            ));
        }

        Ok(())
    }

    // 現在のパスワードを検証してから新しいハッシュに置き換える
    async fn update_password(&self, event: UpdateCustomerPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let original_password_hash: String = sqlx::query_scalar(
            r#"
                SELECT password_hash FROM customers
                WHERE customer_id = $1
            "#,
        )
        .bind(event.customer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let valid = bcrypt::verify(&event.current_password, &original_password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        let new_password_hash = bcrypt::hash(&event.new_password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                UPDATE customers
                SET password_hash = $1
                WHERE customer_id = $2
            "#,
        )
        .bind(new_password_hash)
        .bind(event.customer_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    // 物理削除はせず customer_status を deactive に切り替える
    async fn deactivate(&self, event: DeactivateCustomer) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE customers
                SET customer_status = $1
                WHERE customer_id = $2
            "#,
        )
        .bind(CustomerStatus::Deactive.as_ref())
        .bind(event.customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "指定された顧客が見つかりませんでした。".into(),
            ));
        }

        Ok(())
    }
}
