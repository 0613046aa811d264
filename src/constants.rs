/// One storage entry per named collection, each holding a JSON array.
pub const BLOG_POSTS_KEY: &str = "portfolio_blog_posts_v1";
pub const TESTIMONIALS_KEY: &str = "portfolio_testimonials_v1";
pub const CONTACT_MESSAGES_KEY: &str = "portfolio_contact_messages_v1";
pub const PROJECTS_KEY: &str = "portfolio_projects_v1";

pub const BLOG_POST_ID_PREFIX: &str = "post";
pub const TESTIMONIAL_ID_PREFIX: &str = "t";
pub const CONTACT_MESSAGE_ID_PREFIX: &str = "msg";
pub const PROJECT_ID_PREFIX: &str = "proj";

/// Synthetic tag that disables tag filtering on the blog view.
pub const ALL_TAG: &str = "all";
