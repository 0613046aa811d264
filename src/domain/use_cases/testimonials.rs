use validator::Validate;

use crate::{
    constants::{TESTIMONIALS_KEY, TESTIMONIAL_ID_PREFIX},
    entities::testimonial::{NewTestimonialRequest, Testimonial},
    errors::AppError,
    repositories::{collection::CollectionStore, storage::KeyValueStorage},
    seeds,
    utils::ids::create_id,
};

pub struct TestimonialHandler<S>
where
    S: KeyValueStorage,
{
    store: CollectionStore<S>,
}

impl<S> TestimonialHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: CollectionStore<S>) -> Self {
        TestimonialHandler { store }
    }

    /// Retrieves all testimonials, most recent first.
    pub fn list(&self) -> Vec<Testimonial> {
        self.store.load(TESTIMONIALS_KEY, &seeds::seed_testimonials())
    }

    /// Validates and prepends a new testimonial.
    pub fn add(&self, request: NewTestimonialRequest) -> Result<Testimonial, AppError> {
        request.validate()?;

        let testimonial = Testimonial {
            id: create_id(TESTIMONIAL_ID_PREFIX),
            name: request.name.trim().to_string(),
            role: request.role.trim().to_string(),
            quote: request.quote.trim().to_string(),
        };

        self.store.mutate(TESTIMONIALS_KEY, &seeds::seed_testimonials(), |items| {
            items.insert(0, testimonial.clone());
        });

        Ok(testimonial)
    }
}
