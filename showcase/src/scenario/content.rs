use std::rc::Rc;

use chrono::Utc;
use common::subject_observer::Subject;
use content::{ContentFactory, ContentKind, Series, TvSeries, TvSeriesPublisher, UserObserver};
use log::{error, info};

use crate::{config::app::AppConfig, AppError};

/// Catalogs the configured entries, then publishes every episode to the
/// configured viewers. Unknown catalog kinds are logged and skipped.
pub fn run(config: &AppConfig) -> Result<TvSeriesPublisher, AppError> {
    for entry in &config.catalog {
        match ContentFactory::create_content(&entry.kind, entry.name.as_str(), Utc::now()) {
            Ok(content) => info!("Catalogued {} '{}'", content.kind(), content.name()),
            Err(err) => error!("{}", err),
        }
    }

    let mut publisher = TvSeriesPublisher::new(TvSeries::new(
        config.show_title.as_str(),
        config.show_description.as_str(),
    ));
    for viewer in &config.viewers {
        publisher.register_observer(Rc::new(UserObserver::new(
            viewer.first_name.as_str(),
            viewer.age,
        )));
    }

    for name in &config.episodes {
        let content = ContentFactory::create(ContentKind::Series, name.as_str(), Utc::now());
        publisher.add_new_series(Series::try_from(content)?);
    }
    Ok(publisher)
}
