use std::{fmt, rc::Rc};

use chrono::{DateTime, Utc};

use crate::{Customer, Location};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_HANDED_TO_COURIER: &str = "Handed to courier";

/// An order shares its customer, which may also be watching a courier.
#[derive(Debug, Clone)]
pub struct Order {
    id: u64,
    customer: Rc<Customer>,
    delivery_address: Location,
    order_date: DateTime<Utc>,
    status: String,
}

impl Order {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn customer(&self) -> &Rc<Customer> {
        &self.customer
    }

    pub fn delivery_address(&self) -> Location {
        self.delivery_address
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn update_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {}, Customer: {}, Status: {}, Ordered at: {}, Address: {}",
            self.id,
            self.customer.name(),
            self.status,
            self.order_date.format("%Y-%m-%d %H:%M:%S"),
            self.delivery_address
        )
    }
}

pub struct OrderFactory;

impl OrderFactory {
    pub fn create_order(
        id: u64,
        customer: Rc<Customer>,
        delivery_address: Location,
        order_date: DateTime<Utc>,
    ) -> Order {
        Order {
            id,
            customer,
            delivery_address,
            order_date,
            status: STATUS_PENDING.to_string(),
        }
    }
}
