//! Required-field check for items about to be published.
//!
//! A malformed record must break the import run, never reach the site build.

use crate::domain::entities::FeedItem;
use std::fmt;
use thiserror::Error;

/// Fields every `FeedItem` must carry, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Slug,
    SourceUrl,
    Excerpt,
    Date,
    ImageUrl,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::Title,
        RequiredField::Slug,
        RequiredField::SourceUrl,
        RequiredField::Excerpt,
        RequiredField::Date,
        RequiredField::ImageUrl,
    ];

    /// Field name as it appears in the serialized item.
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Slug => "slug",
            RequiredField::SourceUrl => "sourceUrl",
            RequiredField::Excerpt => "excerpt",
            RequiredField::Date => "date",
            RequiredField::ImageUrl => "imageUrl",
        }
    }

    fn is_present(self, item: &FeedItem) -> bool {
        match self {
            RequiredField::Title => !item.title.is_empty(),
            RequiredField::Slug => !item.slug.is_empty(),
            RequiredField::SourceUrl => !item.source_url.is_empty(),
            RequiredField::Excerpt => !item.excerpt.is_empty(),
            RequiredField::Date => item.date.is_some(),
            RequiredField::ImageUrl => !item.image_url.is_empty(),
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First missing field of an item, with the item's JSON form for the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required field `{field}` in item: {item}")]
pub struct ValidationError {
    pub field: RequiredField,
    pub item: String,
}

/// Return the item unchanged if all required fields are present.
pub fn validate(item: FeedItem) -> Result<FeedItem, ValidationError> {
    match RequiredField::ALL
        .into_iter()
        .find(|field| !field.is_present(&item))
    {
        Some(field) => Err(ValidationError {
            field,
            item: serde_json::to_string(&item).unwrap_or_else(|_| format!("{:?}", item)),
        }),
        None => Ok(item),
    }
}
