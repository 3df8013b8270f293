use crate::model::id::CustomerId;

pub struct CreateToken {
    pub customer_id: CustomerId,
}

impl CreateToken {
    pub fn new(customer_id: CustomerId) -> Self {
        Self { customer_id }
    }
}
