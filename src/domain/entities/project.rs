use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::blog_post::new_validation_error;

const MIN_NAME_LENGTH: u64 = 2;
const MAX_NAME_LENGTH: u64 = 120;
const MAX_TAGLINE_LENGTH: u64 = 200;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_LIST_ITEMS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A project entry. Edit-in-place is not supported; new projects are
/// prepended to the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,

    #[serde(default)]
    pub tech: Vec<String>,

    #[serde(default)]
    pub impact: Vec<String>,

    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH),
        custom(function = "validate_name")
    )]
    pub name: String,

    #[validate(length(max = MAX_TAGLINE_LENGTH))]
    #[serde(default)]
    pub tagline: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_string_list"))]
    #[serde(default)]
    pub tech: Vec<String>,

    #[validate(custom(function = "validate_string_list"))]
    #[serde(default)]
    pub impact: Vec<String>,

    #[validate(custom(function = "validate_links"))]
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

// ───── Validation Helpers ───────────────────────────────────────────
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(new_validation_error("name_blank", "Project name cannot be blank"));
    }
    Ok(())
}

pub fn validate_string_list(items: &[String]) -> Result<(), ValidationError> {
    if items.len() > MAX_LIST_ITEMS {
        return Err(new_validation_error("too_many_items", "Too many entries provided"));
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(new_validation_error("blank_item", "Entries cannot be blank"));
    }
    Ok(())
}

pub fn validate_links(links: &[ProjectLink]) -> Result<(), ValidationError> {
    if links.len() > MAX_LIST_ITEMS {
        return Err(new_validation_error("too_many_links", "Too many links provided"));
    }
    for link in links {
        validate_url(&link.url)?;
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}
