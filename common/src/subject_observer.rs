use std::{fmt, rc::Rc};

use log::{debug, trace};
use thiserror::Error;

pub trait Observer<S: ?Sized, E> {
    fn update(&self, source: &S, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer not found: it is not registered on this subject")]
    NotFound,
}

pub trait Subject<E: Clone>: Sized {
    fn register_observer(&mut self, observer: SharedObserver<Self, E>);
    fn unregister_observer(&mut self, observer: SharedObserver<Self, E>)
        -> Result<(), ObserverError>;
    fn notify_observers(&self, event: E);
}

/// Ordered list of observer handles embedded in a subject.
///
/// The list only shares the observers, it never owns their lifetime. Attaching
/// the same handle twice is accepted and leads to two deliveries per
/// notification.
pub struct Observers<S: ?Sized, E> {
    entries: Vec<SharedObserver<S, E>>,
}

impl<S: ?Sized, E> Default for Observers<S, E> {
    fn default() -> Self {
        Observers { entries: vec![] }
    }
}

impl<S: ?Sized, E> fmt::Debug for Observers<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<S: ?Sized, E: Clone> Observers<S, E> {
    pub fn attach(&mut self, observer: SharedObserver<S, E>) {
        self.entries.push(observer);
        debug!("Observer attached, {} registered", self.entries.len());
    }

    /// Removes the first occurrence of `observer`, compared by address.
    pub fn detach(&mut self, observer: &SharedObserver<S, E>) -> Result<(), ObserverError> {
        let position = self
            .entries
            .iter()
            .position(|obs| Rc::ptr_eq(obs, observer))
            .ok_or(ObserverError::NotFound)?;
        self.entries.remove(position);
        debug!("Observer detached, {} registered", self.entries.len());
        Ok(())
    }

    /// Calls every observer in attach order. A panicking observer aborts the
    /// remaining deliveries.
    pub fn notify(&self, source: &S, event: E) {
        trace!("Notifying {} observers", self.entries.len());
        for obs in &self.entries {
            obs.update(source, event.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        panic::{catch_unwind, AssertUnwindSafe},
        rc::Rc,
    };

    use common_test::get_seeded_rng;
    use mockall::{mock, Sequence};
    use rand::Rng;

    use super::{Observer, ObserverError, Observers, SharedObserver, Subject};

    #[derive(Default)]
    struct Probe {
        observers: Observers<Probe, u32>,
    }

    impl Subject<u32> for Probe {
        fn register_observer(&mut self, observer: SharedObserver<Self, u32>) {
            self.observers.attach(observer);
        }

        fn unregister_observer(
            &mut self,
            observer: SharedObserver<Self, u32>,
        ) -> Result<(), ObserverError> {
            self.observers.detach(&observer)
        }

        fn notify_observers(&self, event: u32) {
            self.observers.notify(self, event);
        }
    }

    mock! {
        Listener {}

        impl Observer<Probe, u32> for Listener {
            fn update(&self, source: &Probe, event: u32);
        }
    }

    type Journal = Rc<RefCell<Vec<(usize, u32)>>>;

    struct Tally {
        id: usize,
        journal: Journal,
    }

    impl Observer<Probe, u32> for Tally {
        fn update(&self, _: &Probe, event: u32) {
            self.journal.borrow_mut().push((self.id, event));
        }
    }

    struct Faulty;

    impl Observer<Probe, u32> for Faulty {
        fn update(&self, _: &Probe, _: u32) {
            panic!("faulty observer");
        }
    }

    #[test]
    fn test_notify_should_follow_attach_order() {
        // Given
        let mut seq = Sequence::new();
        let mut first = MockListener::new();
        let mut second = MockListener::new();
        first
            .expect_update()
            .withf(|_, event| *event == 7)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        second
            .expect_update()
            .withf(|_, event| *event == 7)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut probe = Probe::default();
        probe.register_observer(Rc::new(first));
        probe.register_observer(Rc::new(second));

        // When
        probe.notify_observers(7);

        // Then the mocks verify count and order when dropped
    }

    #[test]
    fn test_notify_should_deliver_once_per_attachment() {
        // Given
        let mut rng = get_seeded_rng().unwrap();
        let observer_count = rng.gen_range(1..8usize);
        let notify_count = rng.gen_range(1..6u32);
        let journal = Journal::default();
        let mut probe = Probe::default();
        for id in 0..observer_count {
            probe.register_observer(Rc::new(Tally {
                id,
                journal: journal.clone(),
            }));
        }

        // When
        for event in 0..notify_count {
            probe.notify_observers(event);
        }

        // Then
        let expected = (0..notify_count)
            .flat_map(|event| (0..observer_count).map(move |id| (id, event)))
            .collect::<Vec<_>>();
        assert_eq!(
            expected,
            *journal.borrow(),
            "Every observer should be called once per notification, in attach order"
        );
    }

    #[test]
    fn test_attach_twice_should_deliver_twice() {
        // Given
        let mut listener = MockListener::new();
        listener.expect_update().times(2).return_const(());
        let listener: SharedObserver<Probe, u32> = Rc::new(listener);
        let mut probe = Probe::default();
        probe.register_observer(listener.clone());
        probe.register_observer(listener);

        // When
        probe.notify_observers(1);

        // Then
        assert_eq!(2, probe.observers.len());
    }

    #[test]
    fn test_detach_should_remove_first_occurrence_only() {
        // Given
        let journal = Journal::default();
        let repeated: SharedObserver<Probe, u32> = Rc::new(Tally {
            id: 0,
            journal: journal.clone(),
        });
        let other: SharedObserver<Probe, u32> = Rc::new(Tally {
            id: 1,
            journal: journal.clone(),
        });
        let mut probe = Probe::default();
        probe.register_observer(repeated.clone());
        probe.register_observer(other);
        probe.register_observer(repeated.clone());

        // When
        let result = probe.unregister_observer(repeated);
        probe.notify_observers(3);

        // Then
        assert_eq!(Ok(()), result);
        assert_eq!(
            vec![(1, 3), (0, 3)],
            *journal.borrow(),
            "Only the first occurrence should be detached"
        );
    }

    #[test]
    fn test_detached_observer_should_not_be_notified() {
        // Given
        let mut kept = MockListener::new();
        kept.expect_update().times(1).return_const(());
        let mut dropped = MockListener::new();
        dropped.expect_update().times(0);
        let dropped: SharedObserver<Probe, u32> = Rc::new(dropped);
        let mut probe = Probe::default();
        probe.register_observer(Rc::new(kept));
        probe.register_observer(dropped.clone());

        // When
        probe.unregister_observer(dropped).unwrap();
        probe.notify_observers(5);

        // Then
        assert_eq!(1, probe.observers.len());
    }

    #[test]
    fn test_detach_should_fail_when_observer_is_absent() {
        // Given
        let mut probe = Probe::default();
        let stranger: SharedObserver<Probe, u32> = Rc::new(MockListener::new());

        // When
        let result = probe.unregister_observer(stranger);

        // Then
        assert_eq!(Err(ObserverError::NotFound), result);
        assert!(probe.observers.is_empty());
    }

    #[test]
    fn test_panicking_observer_should_abort_remaining_deliveries() {
        // Given
        let journal = Journal::default();
        let mut probe = Probe::default();
        probe.register_observer(Rc::new(Tally {
            id: 0,
            journal: journal.clone(),
        }));
        probe.register_observer(Rc::new(Faulty));
        probe.register_observer(Rc::new(Tally {
            id: 2,
            journal: journal.clone(),
        }));

        // When
        let result = catch_unwind(AssertUnwindSafe(|| probe.notify_observers(9)));

        // Then
        assert!(result.is_err(), "Should propagate the observer panic");
        assert_eq!(vec![(0, 9)], *journal.borrow());
    }
}
