use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer, UpdateCustomerPassword},
        Customer, CustomerStatus,
    },
    id::CustomerId,
    role::Role,
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, VariantNames)]
pub enum CustomerStatusName {
    Active,
    Deactive,
}

impl From<CustomerStatus> for CustomerStatusName {
    fn from(value: CustomerStatus) -> Self {
        match value {
            CustomerStatus::Active => Self::Active,
            CustomerStatus::Deactive => Self::Deactive,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, VariantNames)]
pub enum RoleName {
    Admin,
    Customer,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::Customer => Self::Customer,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub telephone: String,
    #[garde(skip)]
    pub birthday: NaiveDate,
    #[garde(length(min = 1))]
    pub password: String,
}

impl From<CreateCustomerRequest> for CreateCustomer {
    fn from(value: CreateCustomerRequest) -> Self {
        let CreateCustomerRequest {
            full_name,
            email,
            telephone,
            birthday,
            password,
        } = value;
        Self {
            full_name,
            email,
            telephone,
            birthday,
            password,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub telephone: String,
    #[garde(skip)]
    pub birthday: NaiveDate,
}

#[derive(new)]
pub struct UpdateCustomerRequestWithId(CustomerId, UpdateCustomerRequest);

impl From<UpdateCustomerRequestWithId> for UpdateCustomer {
    fn from(value: UpdateCustomerRequestWithId) -> Self {
        let UpdateCustomerRequestWithId(
            customer_id,
            UpdateCustomerRequest {
                full_name,
                email,
                telephone,
                birthday,
            },
        ) = value;
        UpdateCustomer {
            customer_id,
            full_name,
            email,
            telephone,
            birthday,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerPasswordRequest {
    #[garde(length(min = 1))]
    current_password: String,
    #[garde(length(min = 1))]
    new_password: String,
}

#[derive(new)]
pub struct UpdateCustomerPasswordRequestWithId(CustomerId, UpdateCustomerPasswordRequest);

impl From<UpdateCustomerPasswordRequestWithId> for UpdateCustomerPassword {
    fn from(value: UpdateCustomerPasswordRequestWithId) -> Self {
        let UpdateCustomerPasswordRequestWithId(
            customer_id,
            UpdateCustomerPasswordRequest {
                current_password,
                new_password,
            },
        ) = value;
        UpdateCustomerPassword {
            customer_id,
            current_password,
            new_password,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersResponse {
    pub items: Vec<CustomerResponse>,
}

impl From<Vec<Customer>> for CustomersResponse {
    fn from(value: Vec<Customer>) -> Self {
        Self {
            items: value.into_iter().map(CustomerResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub telephone: String,
    pub birthday: NaiveDate,
    pub customer_status: CustomerStatusName,
    pub role: RoleName,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let Customer {
            customer_id,
            full_name,
            email,
            telephone,
            birthday,
            customer_status,
            role,
        } = value;
        Self {
            customer_id,
            full_name,
            email,
            telephone,
            birthday,
            customer_status: customer_status.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    fn valid_request() -> CreateCustomerRequest {
        CreateCustomerRequest {
            full_name: "Eleanor Young".into(),
            email: "eleanor@example.com".into(),
            telephone: "0123456789".into(),
            birthday: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn valid_customer_request_passes() {
        assert!(valid_request().validate(&()).is_ok());
    }

    #[test]
    fn empty_full_name_is_rejected() {
        let mut req = valid_request();
        req.full_name = "".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn empty_password_is_rejected() {
        let mut req = valid_request();
        req.password = "".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn response_never_contains_password() {
        // CustomerResponse がパスワード系のフィールドを持たないことを
        // シリアライズ結果で確認する
        let customer = Customer {
            customer_id: CustomerId::new(),
            full_name: "Eleanor Young".into(),
            email: "eleanor@example.com".into(),
            telephone: "0123456789".into(),
            birthday: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            customer_status: CustomerStatus::Active,
            role: Role::Customer,
        };
        let json = serde_json::to_string(&CustomerResponse::from(customer)).unwrap();
        assert!(!json.to_ascii_lowercase().contains("password"));
    }
}
