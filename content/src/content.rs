use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::debug;
use strum::{Display, EnumIter, EnumString};

use crate::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ContentKind {
    Series,
    Movie,
}

/// A single episode.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    release_date: DateTime<Utc>,
}

impl Series {
    pub fn new(name: impl Into<String>, release_date: DateTime<Utc>) -> Self {
        Series {
            name: name.into(),
            release_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    name: String,
    release_date: DateTime<Utc>,
}

impl Movie {
    pub fn new(name: impl Into<String>, release_date: DateTime<Utc>) -> Self {
        Movie {
            name: name.into(),
            release_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Series(Series),
    Movie(Movie),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Series(_) => ContentKind::Series,
            Content::Movie(_) => ContentKind::Movie,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Content::Series(series) => series.name(),
            Content::Movie(movie) => movie.name(),
        }
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        match self {
            Content::Series(series) => series.release_date(),
            Content::Movie(movie) => movie.release_date(),
        }
    }
}

impl TryFrom<Content> for Series {
    type Error = ContentError;

    fn try_from(content: Content) -> Result<Self, Self::Error> {
        match content {
            Content::Series(series) => Ok(series),
            other => Err(ContentError::KindMismatch {
                expected: ContentKind::Series,
                found: other.kind(),
            }),
        }
    }
}

pub struct ContentFactory;

impl ContentFactory {
    pub fn create(kind: ContentKind, name: impl Into<String>, release_date: DateTime<Utc>) -> Content {
        match kind {
            ContentKind::Series => Content::Series(Series::new(name, release_date)),
            ContentKind::Movie => Content::Movie(Movie::new(name, release_date)),
        }
    }

    /// Builds content from a textual kind, `"Series"` or `"Movie"`.
    pub fn create_content(
        kind: &str,
        name: impl Into<String>,
        release_date: DateTime<Utc>,
    ) -> Result<Content, ContentError> {
        let kind =
            ContentKind::from_str(kind).map_err(|_| ContentError::UnknownKind(kind.to_string()))?;
        debug!("Creating {kind} content");
        Ok(Self::create(kind, name, release_date))
    }
}
