use common::subject_observer::Observer;
use log::info;

use crate::{Series, TvSeries, TvSeriesPublisher};

#[derive(Debug, Clone, PartialEq)]
pub struct UserObserver {
    first_name: String,
    age: u32,
}

impl UserObserver {
    pub fn new(first_name: impl Into<String>, age: u32) -> Self {
        UserObserver {
            first_name: first_name.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    fn greeting(&self, tv_series: &TvSeries, series: &Series) -> String {
        format!(
            "{}, congratulations! A new episode of your favourite series '{}' is out: {}",
            self.first_name,
            tv_series.title(),
            series.name()
        )
    }
}

impl Observer<TvSeriesPublisher, Series> for UserObserver {
    fn update(&self, source: &TvSeriesPublisher, event: Series) {
        info!("{}", self.greeting(source.tv_series(), &event));
    }
}
