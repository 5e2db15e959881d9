use common::subject_observer::Subject;
use log::{debug, info};

use crate::{Courier, DeliveryError, Location, Order, STATUS_HANDED_TO_COURIER};

/// Owns the orders and couriers, looked up by order id and courier name. Both
/// keys are unique within a system.
#[derive(Debug, Default)]
pub struct DeliverySystem {
    orders: Vec<Order>,
    couriers: Vec<Courier>,
}

impl DeliverySystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order(&mut self, order: Order) -> Result<(), DeliveryError> {
        if self.order(order.id()).is_some() {
            return Err(DeliveryError::DuplicateOrder(order.id()));
        }
        debug!("Adding order {}", order.id());
        self.orders.push(order);
        Ok(())
    }

    pub fn add_courier(&mut self, courier: Courier) -> Result<(), DeliveryError> {
        if self.courier(courier.name()).is_some() {
            return Err(DeliveryError::DuplicateCourier(courier.name().to_string()));
        }
        debug!("Adding courier {}", courier.name());
        self.couriers.push(courier);
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    pub fn order(&self, order_id: u64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == order_id)
    }

    pub fn courier(&self, courier_name: &str) -> Option<&Courier> {
        self.couriers
            .iter()
            .find(|courier| courier.name() == courier_name)
    }

    /// Subscribes the order's customer to the courier's moves and marks the
    /// order as handed over. Nothing changes when either lookup fails.
    pub fn assign_order_to_courier(
        &mut self,
        order_id: u64,
        courier_name: &str,
    ) -> Result<(), DeliveryError> {
        let order_index = self.order_index(order_id)?;
        let courier_index = self.courier_index(courier_name)?;

        let order = &mut self.orders[order_index];
        let courier = &mut self.couriers[courier_index];
        courier.register_observer(order.customer().clone());
        order.update_status(STATUS_HANDED_TO_COURIER);
        info!("Order {} assigned to courier {}", order.id(), courier.name());
        Ok(())
    }

    pub fn update_courier_location(
        &mut self,
        courier_name: &str,
        location: Location,
    ) -> Result<(), DeliveryError> {
        let courier_index = self.courier_index(courier_name)?;
        self.couriers[courier_index].move_to(location);
        Ok(())
    }

    fn order_index(&self, order_id: u64) -> Result<usize, DeliveryError> {
        self.orders
            .iter()
            .position(|order| order.id() == order_id)
            .ok_or(DeliveryError::OrderNotFound(order_id))
    }

    fn courier_index(&self, courier_name: &str) -> Result<usize, DeliveryError> {
        self.couriers
            .iter()
            .position(|courier| courier.name() == courier_name)
            .ok_or_else(|| DeliveryError::CourierNotFound(courier_name.to_string()))
    }
}
