use validator::Validate;

use crate::{
    constants::{PROJECTS_KEY, PROJECT_ID_PREFIX},
    entities::project::{NewProjectRequest, Project},
    errors::AppError,
    repositories::{collection::CollectionStore, storage::KeyValueStorage},
    seeds,
    utils::ids::create_id,
};

pub struct ProjectHandler<S>
where
    S: KeyValueStorage,
{
    store: CollectionStore<S>,
}

impl<S> ProjectHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: CollectionStore<S>) -> Self {
        ProjectHandler { store }
    }

    /// Retrieves all projects, most recent first.
    pub fn list(&self) -> Vec<Project> {
        self.store.load(PROJECTS_KEY, &seeds::starter_projects())
    }

    /// Validates and prepends a new project.
    pub fn add(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let project = Project {
            id: create_id(PROJECT_ID_PREFIX),
            name: request.name.trim().to_string(),
            tagline: request.tagline.trim().to_string(),
            description: request.description.trim().to_string(),
            tech: request.tech,
            impact: request.impact,
            links: request.links,
        };

        self.store.mutate(PROJECTS_KEY, &seeds::starter_projects(), |items| {
            items.insert(0, project.clone());
        });

        Ok(project)
    }
}
