//! Static profile data model.
//!
//! Everything the page displays comes from one read-only [`Profile`] loaded
//! once at startup from the embedded TOML (`data/profile.toml`). There is no
//! create/update/delete lifecycle - the data exists for the process duration
//! and is never mutated.
//!
//! All list fields preserve author order. The renderer must not sort or
//! deduplicate them; experience/education/publications are taken as
//! pre-sorted by the data owner.

use serde::Deserialize;

/// The embedded static data object.
const PROFILE_TOML: &str = include_str!("../data/profile.toml");

/// Base URL of the document resolver that publication links point at.
pub const DOI_RESOLVER: &str = "https://doi.org/";

// =============================================================================
// Entities
// =============================================================================

/// Identity block shown in the hero section and footer.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub scholar: String,
    pub email_work: String,
    pub email_research: String,
}

impl HeaderInfo {
    /// `mailto:` target for the work address.
    pub fn mailto_work(&self) -> String {
        format!("mailto:{}", self.email_work)
    }

    /// `mailto:` target for the research address.
    pub fn mailto_research(&self) -> String {
        format!("mailto:{}", self.email_research)
    }

    /// Logo initials derived from the name ("Fadillah Siva" -> "FS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Summary and research vision, displayed once.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutInfo {
    pub summary: String,
    pub vision: String,
}

/// One research interest: title plus a short description.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestItem {
    pub title: String,
    pub description: String,
}

/// One professional experience entry, rendered as a timeline card.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub description: String,
}

/// One education entry. `note` is optional; absence renders nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub grade: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// One publication, linking to the external document resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationEntry {
    pub title: String,
    pub publisher: String,
    pub doi: String,
}

impl PublicationEntry {
    /// Resolver link target: fixed base URL + identifier, concatenated
    /// exactly once.
    pub fn doi_url(&self) -> String {
        format!("{}{}", DOI_RESOLVER, self.doi)
    }
}

/// The complete static data object.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub header: HeaderInfo,
    pub about: AboutInfo,
    pub interests: Vec<InterestItem>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub publications: Vec<PublicationEntry>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
}

impl Profile {
    /// Parse the embedded profile data.
    pub fn embedded() -> Result<Self, toml::de::Error> {
        toml::from_str(PROFILE_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = Profile::embedded().unwrap();
        assert!(!profile.header.name.is_empty());
        assert!(!profile.interests.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.publications.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.skills.is_empty());
    }

    #[test]
    fn test_doi_url_single_concatenation() {
        let entry = PublicationEntry {
            title: "T".to_string(),
            publisher: "P".to_string(),
            doi: "10.1/xyz".to_string(),
        };
        assert_eq!(entry.doi_url(), "https://doi.org/10.1/xyz");
    }

    #[test]
    fn test_mailto_targets() {
        let profile = Profile::embedded().unwrap();
        let work = profile.header.mailto_work();
        let research = profile.header.mailto_research();
        assert!(work.starts_with("mailto:"));
        assert!(research.starts_with("mailto:"));
        assert_ne!(work, research);
    }

    #[test]
    fn test_initials() {
        let mut header = Profile::embedded().unwrap().header;
        header.name = "Fadillah Siva".to_string();
        assert_eq!(header.initials(), "FS");
        header.name = "cher".to_string();
        assert_eq!(header.initials(), "C");
    }

    #[test]
    fn test_optional_note_absent() {
        let entry: EducationEntry = toml::from_str(
            r#"
            degree = "B.Sc."
            school = "Somewhere"
            period = "2010 - 2014"
            grade = "GPA 3.8"
            "#,
        )
        .unwrap();
        assert!(entry.note.is_none());
    }
}
