pub mod blog_post;
pub mod contact_message;
pub mod profile;
pub mod project;
pub mod testimonial;
