#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use portfolio_core::{
    entities::blog_post::{BlogPost, BlogPostRequest},
    repositories::{collection::CollectionStore, memory_storage::MemoryStorage},
    use_cases::{
        blog::BlogPostHandler, contact::ContactHandler, projects::ProjectHandler,
        testimonials::TestimonialHandler,
    },
};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

pub fn memory_store() -> (Arc<MemoryStorage>, CollectionStore<MemoryStorage>) {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let store = CollectionStore::new(Arc::clone(&storage));
    (storage, store)
}

pub fn blog_handler() -> (Arc<MemoryStorage>, BlogPostHandler<MemoryStorage>) {
    let (storage, store) = memory_store();
    (storage, BlogPostHandler::new(store))
}

pub fn testimonial_handler() -> (Arc<MemoryStorage>, TestimonialHandler<MemoryStorage>) {
    let (storage, store) = memory_store();
    (storage, TestimonialHandler::new(store))
}

pub fn contact_handler() -> (Arc<MemoryStorage>, ContactHandler<MemoryStorage>) {
    let (storage, store) = memory_store();
    (storage, ContactHandler::new(store))
}

pub fn project_handler() -> (Arc<MemoryStorage>, ProjectHandler<MemoryStorage>) {
    let (storage, store) = memory_store();
    (storage, ProjectHandler::new(store))
}

pub fn post(id: &str, title: &str, date: (i32, u32, u32), tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        excerpt: String::new(),
        content: String::new(),
    }
}

/// The two-post example collection from the view contract.
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            excerpt: "Validation, error shape, maintainability.".to_string(),
            content: "Model validation and consistent error payloads.".to_string(),
            ..post("post_1", "API Design", (2025, 6, 15), &["dotnet", "api"])
        },
        BlogPost {
            excerpt: "Small steps and clear rollback paths.".to_string(),
            content: "Build once, deploy many.".to_string(),
            ..post("post_2", "CI/CD Basics", (2025, 5, 2), &["devops"])
        },
    ]
}

pub fn draft(title: &str, tags: &[&str]) -> BlogPostRequest {
    BlogPostRequest {
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        excerpt: "A short excerpt.".to_string(),
        content: "Some content.".to_string(),
    }
}
