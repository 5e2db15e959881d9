use common::subject_observer::Observer;
use log::info;

use crate::{Courier, Location, Relocation};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    location: Location,
}

impl Customer {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Customer {
            name: name.into(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    fn message(&self, relocation: &Relocation) -> String {
        format!("Customer {} received message: {}", self.name, relocation)
    }
}

impl Observer<Courier, Relocation> for Customer {
    fn update(&self, _: &Courier, event: Relocation) {
        info!("{}", self.message(&event));
    }
}
