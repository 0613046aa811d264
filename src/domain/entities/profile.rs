use serde::{Deserialize, Serialize};

/// Static owner data shown on the portfolio. None of these records are
/// persisted through the collection store; they ship with the build and
/// are replaced by editing the seed content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub resume_url: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatrix {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub database: Vec<String>,
    pub testing: Vec<String>,
    pub devops: Vec<String>,
    pub ways_of_working: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    /// `YYYY-MM` month stamp.
    pub start: String,
    /// `YYYY-MM` month stamp, or the literal `Present`.
    pub end: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub org: String,
    pub note: String,
}
