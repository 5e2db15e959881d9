mod content;
mod publisher;
mod tv_series;
mod user;

pub use content::{Content, ContentFactory, ContentKind, Movie, Series};
pub use publisher::TvSeriesPublisher;
pub use tv_series::TvSeries;
pub use user::UserObserver;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("Come on, that is way off target: '{0}' is neither a Series nor a Movie")]
    UnknownKind(String),
    #[error("Expected {expected} content but got {found}")]
    KindMismatch {
        expected: ContentKind,
        found: ContentKind,
    },
}
