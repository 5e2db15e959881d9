use crate::Series;

/// A show and the episodes published so far, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TvSeries {
    title: String,
    description: String,
    rating: Option<u32>,
    series: Vec<Series>,
}

impl TvSeries {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        TvSeries {
            title: title.into(),
            description: description.into(),
            rating: None,
            series: vec![],
        }
    }

    pub fn with_rating(mut self, rating: u32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rating(&self) -> Option<u32> {
        self.rating
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn count_series(&self) -> usize {
        self.series.len()
    }

    /// Episodes are only published through [`crate::TvSeriesPublisher`], which
    /// notifies its observers.
    pub(crate) fn add_new_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn update_rating(&mut self, rating: u32) {
        self.rating = Some(rating);
    }
}
