use std::fmt;

use common::subject_observer::{ObserverError, Observers, SharedObserver, Subject};
use log::debug;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::Location;

/// Fast couriers move exactly like regular ones, the kind is descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize)]
pub enum CourierKind {
    #[default]
    Regular,
    Fast,
}

/// Event sent to the observers of a courier after each move.
#[derive(Debug, Clone, PartialEq)]
pub struct Relocation {
    pub courier_name: String,
    pub location: Location,
}

impl fmt::Display for Relocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Courier {} at point: {}", self.courier_name, self.location)
    }
}

#[derive(Debug)]
pub struct Courier {
    name: String,
    kind: CourierKind,
    location: Location,
    observers: Observers<Self, Relocation>,
}

impl Courier {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self::with_kind(name, CourierKind::Regular, location)
    }

    pub fn with_kind(name: impl Into<String>, kind: CourierKind, location: Location) -> Self {
        Courier {
            name: name.into(),
            kind,
            location,
            observers: Observers::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CourierKind {
        self.kind
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn move_to(&mut self, location: Location) {
        debug!("{} courier {} moving to {}", self.kind, self.name, location);
        self.location = location;
        self.notify_observers(Relocation {
            courier_name: self.name.clone(),
            location,
        });
    }
}

impl Subject<Relocation> for Courier {
    fn register_observer(&mut self, observer: SharedObserver<Self, Relocation>) {
        self.observers.attach(observer);
    }

    fn unregister_observer(
        &mut self,
        observer: SharedObserver<Self, Relocation>,
    ) -> Result<(), ObserverError> {
        self.observers.detach(&observer)
    }

    fn notify_observers(&self, event: Relocation) {
        self.observers.notify(self, event);
    }
}
