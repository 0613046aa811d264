use serde::{Deserialize, Serialize};
use validator::Validate;

/// A testimonial is immutable once created; the collection only supports
/// prepend and (in the UI) delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTestimonialRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 100))]
    pub role: String,

    #[validate(length(min = 5, max = 1000))]
    pub quote: String,
}
