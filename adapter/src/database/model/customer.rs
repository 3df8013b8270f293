use kernel::model::{
    customer::{Customer, CustomerStatus},
    id::CustomerId,
    role::Role,
};
use shared::error::AppError;
use sqlx::types::chrono::NaiveDate;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct CustomerRow {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: NaiveDate,
    pub customer_status: String,
    pub role: String,
}

// customer_status と role は TEXT で保持しているため、変換は失敗しうる
impl TryFrom<CustomerRow> for Customer {
    type Error = AppError;

    fn try_from(value: CustomerRow) -> Result<Self, Self::Error> {
        let CustomerRow {
            customer_id,
            full_name,
            email,
            telephone,
            birthday,
            customer_status,
            role,
        } = value;
        Ok(Customer {
            customer_id,
            full_name,
            email,
            telephone,
            birthday,
            customer_status: CustomerStatus::from_str(&customer_status)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            role: Role::from_str(&role)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, role: &str) -> CustomerRow {
        CustomerRow {
            customer_id: CustomerId::new(),
            full_name: "Eleanor Young".into(),
            email: "eleanor@example.com".into(),
            telephone: "0123456789".into(),
            birthday: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            customer_status: status.into(),
            role: role.into(),
        }
    }

    #[test]
    fn row_converts_into_customer() {
        let customer = Customer::try_from(row("active", "customer")).unwrap();
        assert_eq!(customer.customer_status, CustomerStatus::Active);
        assert_eq!(customer.role, Role::Customer);
    }

    #[test]
    fn deactive_status_is_recognized() {
        let customer = Customer::try_from(row("deactive", "admin")).unwrap();
        assert_eq!(customer.customer_status, CustomerStatus::Deactive);
        assert_eq!(customer.role, Role::Admin);
    }

    #[test]
    fn unknown_status_fails_conversion() {
        let res = Customer::try_from(row("suspended", "customer"));
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));
    }
}
