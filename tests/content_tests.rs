mod test_utils;

use portfolio_core::{
    constants::{CONTACT_MESSAGES_KEY, PROJECTS_KEY, TESTIMONIALS_KEY},
    entities::{
        contact_message::NewContactMessageRequest,
        project::{NewProjectRequest, ProjectLink},
        testimonial::NewTestimonialRequest,
    },
    errors::AppError,
    seeds,
    settings::{AppConfig, AppEnvironment},
    PortfolioState,
};
use test_utils::*;

fn testimonial_request() -> NewTestimonialRequest {
    NewTestimonialRequest {
        name: "  Chiamaka N.  ".to_string(),
        role: "Engineering Manager".to_string(),
        quote: "Ships reliable software and communicates clearly.".to_string(),
    }
}

fn contact_request() -> NewContactMessageRequest {
    NewContactMessageRequest {
        name: "Recruiter".to_string(),
        email: "recruiter@example.com".to_string(),
        message: "We have a role that might interest you.".to_string(),
    }
}

fn project_request() -> NewProjectRequest {
    NewProjectRequest {
        name: "Log Shipper".to_string(),
        tagline: "Tail and forward structured logs.".to_string(),
        description: "A small daemon forwarding JSON logs to a central sink.".to_string(),
        tech: vec!["Rust".to_string()],
        impact: vec!["Cut log loss to zero".to_string()],
        links: vec![ProjectLink {
            label: "GitHub".to_string(),
            url: "https://github.com/janeokoro/log-shipper".to_string(),
        }],
    }
}

// ───── Testimonials ─────────────────────────────────────────────────

#[test]
fn testimonial_add_prepends_and_trims() {
    let (_, handler) = testimonial_handler();

    let added = handler.add(testimonial_request()).unwrap();

    assert!(added.id.starts_with("t_"));
    assert_eq!(added.name, "Chiamaka N.");

    let listed = handler.list();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].id, added.id);
    // Seed order is preserved behind the new entry.
    assert_eq!(listed[1].id, "t1");
}

#[test]
fn testimonial_rejects_short_quote() {
    let (_, handler) = testimonial_handler();

    let result = handler.add(NewTestimonialRequest {
        quote: "ok".to_string(),
        ..testimonial_request()
    });

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ───── Contact messages ─────────────────────────────────────────────

#[test]
fn contact_collection_starts_empty() {
    let (_, handler) = contact_handler();

    assert!(handler.list().is_empty());
    assert_eq!(handler.count(), 0);
}

#[test]
fn contact_submit_prepends_a_timestamped_message() {
    let (_, handler) = contact_handler();

    let first = handler.submit(contact_request()).unwrap();
    let second = handler
        .submit(NewContactMessageRequest {
            name: "Another Recruiter".to_string(),
            ..contact_request()
        })
        .unwrap();

    assert!(first.id.starts_with("msg_"));
    assert_ne!(first.id, second.id);

    let listed = handler.list();
    assert_eq!(handler.count(), 2);
    assert_eq!(listed[0].id, second.id);
    assert!(listed[0].created_at >= listed[1].created_at);
}

#[test]
fn contact_submit_rejects_malformed_email() {
    let (_, handler) = contact_handler();

    let result = handler.submit(NewContactMessageRequest {
        email: "not-an-email".to_string(),
        ..contact_request()
    });

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[test]
fn contact_submit_rejects_blank_message() {
    let (_, handler) = contact_handler();

    let result = handler.submit(NewContactMessageRequest {
        message: "hey".to_string(),
        ..contact_request()
    });

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ───── Projects ─────────────────────────────────────────────────────

#[test]
fn fresh_project_list_is_the_starter_set() {
    let (_, handler) = project_handler();

    let projects = handler.list();

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id, "proj_release-automation");
}

#[test]
fn project_add_prepends() {
    let (_, handler) = project_handler();

    let added = handler.add(project_request()).unwrap();

    assert!(added.id.starts_with("proj_"));

    let listed = handler.list();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].id, added.id);
    assert_eq!(listed[0].tech, vec!["Rust"]);
}

#[test]
fn project_add_rejects_non_http_links() {
    let (_, handler) = project_handler();

    let result = handler.add(NewProjectRequest {
        links: vec![ProjectLink {
            label: "FTP".to_string(),
            url: "ftp://example.com/dump".to_string(),
        }],
        ..project_request()
    });

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[test]
fn project_add_rejects_blank_list_entries() {
    let (_, handler) = project_handler();

    let result = handler.add(NewProjectRequest {
        tech: vec!["Rust".to_string(), "   ".to_string()],
        ..project_request()
    });

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

// ───── Static content & wiring ──────────────────────────────────────

#[test]
fn static_seed_content_is_populated() {
    assert!(!seeds::BASE_PROFILE.name.is_empty());
    assert!(!seeds::SKILLS.backend.is_empty());
    assert!(!seeds::EXPERIENCE.is_empty());
    assert!(!seeds::EDUCATION.is_empty());
    assert!(!seeds::CERTIFICATIONS.is_empty());
    assert!(!seeds::ACHIEVEMENTS.is_empty());

    let mut ids: Vec<&str> = seeds::EXPERIENCE.iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), seeds::EXPERIENCE.len());
}

#[test]
fn portfolio_state_wires_all_collections_over_one_directory() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio-Core-Test".to_string(),
        data_dir: dir.path().display().to_string(),
    };

    let state = PortfolioState::new(&config).unwrap();

    assert_eq!(state.blog_handler.list().len(), 2);
    assert_eq!(state.testimonial_handler.list().len(), 2);
    assert_eq!(state.contact_handler.count(), 0);
    assert_eq!(state.project_handler.list().len(), 3);

    // Reads seeded one file per named collection.
    for key in [TESTIMONIALS_KEY, CONTACT_MESSAGES_KEY, PROJECTS_KEY] {
        assert!(dir.path().join(format!("{key}.json")).exists());
    }

    // Mutations survive a full reopen.
    state.project_handler.add(project_request()).unwrap();
    let reopened = PortfolioState::new(&config).unwrap();
    assert_eq!(reopened.project_handler.list().len(), 4);
    assert_eq!(reopened.project_handler.list()[0].name, "Log Shipper");
}
