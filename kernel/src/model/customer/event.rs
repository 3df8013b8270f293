use crate::model::id::CustomerId;
use chrono::NaiveDate;
use derive_new::new;

#[derive(new)]
pub struct CreateCustomer {
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: NaiveDate,
    pub password: String,
}

#[derive(new)]
pub struct UpdateCustomer {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: NaiveDate,
}

#[derive(new)]
pub struct UpdateCustomerPassword {
    pub customer_id: CustomerId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(new)]
pub struct DeactivateCustomer {
    pub customer_id: CustomerId,
}
