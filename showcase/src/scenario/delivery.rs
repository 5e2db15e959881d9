use std::rc::Rc;

use chrono::Utc;
use delivery::{Courier, Customer, DeliverySystem, OrderFactory};
use log::debug;

use crate::{config::app::AppConfig, AppError};

const ORDER_ID: u64 = 1;

/// Hands one order to the configured courier and walks it along the waypoints.
pub fn run(config: &AppConfig) -> Result<DeliverySystem, AppError> {
    let customer = Rc::new(Customer::new(
        config.customer_name.as_str(),
        config.customer_location,
    ));
    let order = OrderFactory::create_order(ORDER_ID, customer, config.delivery_address, Utc::now());
    debug!("Created {}", order);

    let mut system = DeliverySystem::new();
    system.add_order(order)?;
    system.add_courier(Courier::with_kind(
        config.courier_name.as_str(),
        config.courier_kind,
        config.courier_location,
    ))?;

    system.assign_order_to_courier(ORDER_ID, &config.courier_name)?;
    for &waypoint in &config.waypoints {
        system.update_courier_location(&config.courier_name, waypoint)?;
    }
    Ok(system)
}
