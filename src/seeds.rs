//! Default portfolio content.
//!
//! The static owner data is built once and shared; the per-collection
//! seed functions return fresh values because every `load` may hand the
//! seed out as the live collection.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::entities::{
    blog_post::BlogPost,
    profile::{Achievement, Certification, Education, Experience, Profile, SkillMatrix},
    project::{Project, ProjectLink},
    testimonial::Testimonial,
};

pub static BASE_PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    name: "Jane Okoro".to_string(),
    title: "Full Stack Developer".to_string(),
    location: "Lagos, NG".to_string(),
    email: "hello@janeokoro.dev".to_string(),
    phone: "+234 801 234 5678".to_string(),
    linkedin: "https://www.linkedin.com/in/jane-okoro".to_string(),
    github: "https://github.com/janeokoro".to_string(),
    resume_url: "https://janeokoro.dev/resume.pdf".to_string(),
    summary: "Full stack developer with 3+ years of experience building and \
              deploying web applications across the .NET and React \
              ecosystems. Strong on API design, dependency injection, \
              responsive UI, and CI/CD. Comfortable owning modules \
              end-to-end and supporting production."
        .to_string(),
});

pub static SKILLS: Lazy<SkillMatrix> = Lazy::new(|| SkillMatrix {
    backend: strings(&[
        "C#",
        ".NET Core",
        "ASP.NET Web API",
        "Entity Framework",
        "LINQ",
        "Dependency Injection",
        "REST APIs",
    ]),
    frontend: strings(&[
        "React.js",
        "TypeScript",
        "JavaScript",
        "HTML5",
        "CSS3",
        "Responsive Web Design",
    ]),
    database: strings(&[
        "SQL Server",
        "Stored Procedures",
        "Transactions",
        "Query Optimization",
    ]),
    testing: strings(&["NUnit", "xUnit", "Moq", "Unit Testing", "Debugging"]),
    devops: strings(&[
        "Azure DevOps",
        "Git",
        "GitHub",
        "CI/CD pipelines",
        "IIS deployments",
    ]),
    ways_of_working: strings(&[
        "Agile/Scrum",
        "Design Patterns",
        "Code Reviews",
        "Documentation",
    ]),
});

pub static EXPERIENCE: Lazy<Vec<Experience>> = Lazy::new(|| {
    vec![
        Experience {
            id: "exp_halide_sde".to_string(),
            company: "Halide Systems".to_string(),
            title: "Software Design Engineer".to_string(),
            location: "Lagos, NG".to_string(),
            start: "2024-05".to_string(),
            end: "Present".to_string(),
            highlights: strings(&[
                "Enhanced server-hosted .NET apps (C#, ASP.NET Core, Web API, LINQ, DI).",
                "Designed and consumed REST APIs with validation and error handling.",
                "Streamlined releases with Azure DevOps pipelines.",
                "Built responsive interfaces with React and a modern web stack.",
            ]),
        },
        Experience {
            id: "exp_halide_trainee".to_string(),
            company: "Halide Systems".to_string(),
            title: "Software Design Trainee".to_string(),
            location: "Lagos, NG".to_string(),
            start: "2023-11".to_string(),
            end: "2024-05".to_string(),
            highlights: strings(&[
                "Built responsive UI using React and TypeScript.",
                "Supported ASP.NET Core / Web API development and testing.",
                "Owned modules end-to-end, from design to delivery.",
            ]),
        },
    ]
});

pub static EDUCATION: Lazy<Vec<Education>> = Lazy::new(|| {
    vec![
        Education {
            id: "edu_msc".to_string(),
            degree: "MSc Computer Science".to_string(),
            institution: "University of Lagos".to_string(),
            dates: "2022 – 2023".to_string(),
        },
        Education {
            id: "edu_bsc".to_string(),
            degree: "BSc Computer Science".to_string(),
            institution: "Covenant University".to_string(),
            dates: "2018 – 2021".to_string(),
        },
    ]
});

pub static CERTIFICATIONS: Lazy<Vec<Certification>> = Lazy::new(|| {
    vec![
        Certification {
            id: "cert_az900".to_string(),
            name: "Microsoft Certified: Azure Fundamentals".to_string(),
            issuer: "Microsoft".to_string(),
        },
        Certification {
            id: "cert_github".to_string(),
            name: "Career Essentials in GitHub Professional Certificate".to_string(),
            issuer: "GitHub".to_string(),
        },
    ]
});

pub static ACHIEVEMENTS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    vec![
        Achievement {
            id: "ach_quarter_award".to_string(),
            title: "Q1 Delivery Award".to_string(),
            org: "Halide Systems".to_string(),
            note: "Recognized for delivery and impact.".to_string(),
        },
        Achievement {
            id: "ach_hackathon".to_string(),
            title: "Hackathon Winner".to_string(),
            org: "Halide Systems".to_string(),
            note: "Won \"Most Efficient Idea\" and \"People's Choice\".".to_string(),
        },
    ]
});

/// Seed posts shipped with a fresh install.
pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "post_api-design".to_string(),
            title: "API Design Notes: Validation-first Web APIs".to_string(),
            date: seed_date(2025, 6, 15),
            tags: strings(&["dotnet", "api", "patterns"]),
            excerpt: "A practical checklist for building APIs: validation, \
                      error shape, and maintainability."
                .to_string(),
            content: "Outline:\n- Model validation\n- Consistent error payloads\n\
                      - DI and testability\n- Logging and correlation IDs\n"
                .to_string(),
        },
        BlogPost {
            id: "post_ci-cd".to_string(),
            title: "CI/CD Basics: Making Deployments Boring".to_string(),
            date: seed_date(2025, 5, 2),
            tags: strings(&["devops", "azure"]),
            excerpt: "Lessons from automating deployments: small steps, \
                      repeatability, and clear rollback paths."
                .to_string(),
            content: "Key ideas:\n- Build once, deploy many\n\
                      - Environment config discipline\n- Smoke tests\n"
                .to_string(),
        },
    ]
}

pub fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "t1".to_string(),
            name: "Team Lead (Sample)".to_string(),
            role: "Engineering Lead".to_string(),
            quote: "Reliable, fast to learn, and owns modules end-to-end. \
                    Great at communicating and unblocking the team."
                .to_string(),
        },
        Testimonial {
            id: "t2".to_string(),
            name: "Peer (Sample)".to_string(),
            role: "Full Stack Developer".to_string(),
            quote: "Strong fundamentals and careful with production quality. \
                    Always willing to help with debugging and improvements."
                .to_string(),
        },
    ]
}

/// Placeholder projects shown until the owner adds real ones.
pub fn starter_projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj_release-automation".to_string(),
            name: "Release Automation Toolkit".to_string(),
            tagline: "Automated build and deploy workflows to reduce manual release steps.".to_string(),
            description: "Reusable pipeline templates and scripts that standardize \
                          CI/CD across projects, focused on repeatable deployments \
                          and safer rollbacks."
                .to_string(),
            tech: strings(&["Azure DevOps", "GitHub Actions", "PowerShell", ".NET"]),
            impact: strings(&[
                "Reduced manual release effort",
                "Improved deployment consistency",
                "Made rollbacks predictable",
            ]),
            links: vec![ProjectLink {
                label: "GitHub".to_string(),
                url: "https://github.com/janeokoro".to_string(),
            }],
        },
        Project {
            id: "proj_api-platform".to_string(),
            name: "REST API Platform".to_string(),
            tagline: "Validation-first APIs with clear errors and traceability.".to_string(),
            description: "Web APIs with strong input validation, standardized error \
                          responses, and clean separation of concerns."
                .to_string(),
            tech: strings(&["ASP.NET Core", "Web API", "Entity Framework", "SQL Server"]),
            impact: strings(&[
                "Cleaner integration for clients",
                "Fewer production defects",
                "Faster onboarding for new devs",
            ]),
            links: vec![ProjectLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/jane-okoro".to_string(),
            }],
        },
        Project {
            id: "proj_monitoring".to_string(),
            name: "App Monitoring Dashboard".to_string(),
            tagline: "Observability using Elasticsearch and Kibana.".to_string(),
            description: "Instrumented apps and dashboards tracking performance and \
                          error trends, used to triage issues and validate improvements."
                .to_string(),
            tech: strings(&["Elasticsearch", "Kibana", "IIS", "Azure"]),
            impact: strings(&[
                "Faster incident triage",
                "Better visibility into bottlenecks",
            ]),
            links: vec![],
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
