use std::borrow::Cow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_EXCERPT_LENGTH: u64 = 300;
const MAX_CONTENT_LENGTH: u64 = 20_000;
const MAX_TAGS: u64 = 10;
const MAX_TAG_LENGTH: u64 = 30;

// ───── Stored Records ────────────────────────────────────────────────

/// A blog post as persisted in the blog collection.
///
/// `date` is assigned once at creation and is never changed by edits.
/// `tags`, `excerpt` and `content` tolerate being absent in stored data
/// and come back as empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub content: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Payload for creating a post or replacing the editable fields of an
/// existing one. Identity and creation date are owned by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogPostRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(custom(function = "validate_tags"))]
    #[serde(default)]
    pub tags: Vec<String>,

    #[validate(length(max = MAX_EXCERPT_LENGTH))]
    #[serde(default)]
    pub excerpt: String,

    #[validate(length(max = MAX_CONTENT_LENGTH))]
    #[serde(default)]
    pub content: String,
}

// ───── Validation Helpers ───────────────────────────────────────────
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS as usize {
        return Err(new_validation_error("too_many_tags", "Too many tags provided"));
    }
    for tag in tags {
        if tag.is_empty() || tag.len() > MAX_TAG_LENGTH as usize {
            return Err(new_validation_error("invalid_tag_length", "Tag length must be within allowed range"));
        }
        if !tag.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(new_validation_error("invalid_tag_chars", "Tags must be alphanumeric or hyphens"));
        }
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
