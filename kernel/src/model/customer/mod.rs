use crate::model::{id::CustomerId, role::Role};
use chrono::NaiveDate;
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Deactive,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: NaiveDate,
    pub customer_status: CustomerStatus,
    pub role: Role,
}

/// 予約に埋め込む顧客情報
#[derive(Debug)]
pub struct BookingCustomer {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
}
