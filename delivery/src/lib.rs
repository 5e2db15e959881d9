mod courier;
mod customer;
mod delivery_system;
mod location;
mod order;

pub use courier::{Courier, CourierKind, Relocation};
pub use customer::Customer;
pub use delivery_system::DeliverySystem;
pub use location::Location;
pub use order::{Order, OrderFactory, STATUS_HANDED_TO_COURIER, STATUS_PENDING};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DeliveryError {
    #[error("Unknown order: {0}")]
    OrderNotFound(u64),
    #[error("Unknown courier: {0}")]
    CourierNotFound(String),
    #[error("Order {0} is already registered")]
    DuplicateOrder(u64),
    #[error("Courier {0} is already registered")]
    DuplicateCourier(String),
}
