mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod seeds;

pub use domain::{entities, use_cases};
pub use interfaces::repositories;
pub use infrastructure::utils;

use std::sync::Arc;

use errors::AppError;
use repositories::{collection::CollectionStore, file_storage::FileStorage};
use settings::AppConfig;
use use_cases::{
    blog::BlogPostHandler, contact::ContactHandler, projects::ProjectHandler,
    testimonials::TestimonialHandler,
};

/// The portfolio content core. Owns one handler per named collection,
/// all sharing a single durable storage backend. Intended to be built
/// once and injected into the UI layer.
pub struct PortfolioState {
    pub blog_handler: AppBlogPostHandler,
    pub testimonial_handler: AppTestimonialHandler,
    pub contact_handler: AppContactHandler,
    pub project_handler: AppProjectHandler,
}

pub type AppBlogPostHandler = BlogPostHandler<FileStorage>;
pub type AppTestimonialHandler = TestimonialHandler<FileStorage>;
pub type AppContactHandler = ContactHandler<FileStorage>;
pub type AppProjectHandler = ProjectHandler<FileStorage>;

impl PortfolioState {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let storage = Arc::new(FileStorage::new(&config.data_dir)?);
        let store = CollectionStore::new(storage);

        Ok(PortfolioState {
            blog_handler: BlogPostHandler::new(store.clone()),
            testimonial_handler: TestimonialHandler::new(store.clone()),
            contact_handler: ContactHandler::new(store.clone()),
            project_handler: ProjectHandler::new(store),
        })
    }
}
