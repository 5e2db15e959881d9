use common::subject_observer::{ObserverError, Observers, SharedObserver, Subject};
use log::debug;

use crate::{Series, TvSeries};

/// Wraps a [`TvSeries`] and tells its subscribers about every new episode.
#[derive(Debug)]
pub struct TvSeriesPublisher {
    tv_series: TvSeries,
    observers: Observers<Self, Series>,
}

impl TvSeriesPublisher {
    pub fn new(tv_series: TvSeries) -> Self {
        TvSeriesPublisher {
            tv_series,
            observers: Observers::default(),
        }
    }

    pub fn tv_series(&self) -> &TvSeries {
        &self.tv_series
    }

    /// Rating changes are not broadcast.
    pub fn update_rating(&mut self, rating: u32) {
        self.tv_series.update_rating(rating);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends the episode first, so observers already see it in the show.
    pub fn add_new_series(&mut self, series: Series) {
        debug!(
            "Publishing {} for '{}'",
            series.name(),
            self.tv_series.title()
        );
        self.tv_series.add_new_series(series.clone());
        self.notify_observers(series);
    }
}

impl Subject<Series> for TvSeriesPublisher {
    fn register_observer(&mut self, observer: SharedObserver<Self, Series>) {
        self.observers.attach(observer);
    }

    fn unregister_observer(
        &mut self,
        observer: SharedObserver<Self, Series>,
    ) -> Result<(), ObserverError> {
        self.observers.detach(&observer)
    }

    fn notify_observers(&self, event: Series) {
        self.observers.notify(self, event);
    }
}
