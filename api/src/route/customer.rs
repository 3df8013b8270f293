use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::customer::{
    deactivate_customer, register_customer, show_current_customer,
    show_current_customer_bookings, show_customer, show_customer_list,
    update_current_customer_password, update_customer,
};

pub fn build_customer_routers() -> Router<AppRegistry> {
    let customers_routers = Router::new()
        .route("/", post(register_customer))
        .route("/", get(show_customer_list))
        .route("/me", get(show_current_customer))
        .route("/me/bookings", get(show_current_customer_bookings))
        .route("/me/password", put(update_current_customer_password))
        .route("/:customer_id", get(show_customer))
        .route("/:customer_id", put(update_customer))
        .route("/:customer_id", delete(deactivate_customer));

    Router::new().nest("/customers", customers_routers)
}
