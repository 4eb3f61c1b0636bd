//! The read-only content source every pane renders from. The window core
//! never touches these types directly; content providers do.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resume {
    pub personal: Personal,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub security: Security,
    pub education: Vec<Education>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
    pub role: String,
    pub summary: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub command: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Security {
    pub hall_of_fame: Vec<String>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub gpa: String,
}

/// Parsed once from the embedded asset. The asset ships inside the binary,
/// so a parse failure is a build defect, not a runtime condition.
pub static RESUME: Lazy<Resume> = Lazy::new(|| {
    serde_json::from_str(include_str!("content/resume.json"))
        .expect("embedded resume.json must deserialize")
});
