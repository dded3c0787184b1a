//! The page content model.
//!
//! Everything the page shows lives here as plain data. The built-in
//! profile is compiled in; [`PageContent::validate`] guards the
//! structural assumptions the layout and view code rely on, so a
//! deserialized replacement profile fails loudly instead of rendering
//! a half-empty page.

use folio_protocol::SectionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("page has no navigation items")]
    NoNavItems,
    #[error("navigation item `{0}` targets the home section")]
    NavTargetsHome(String),
    #[error("navigation has two items targeting `{0}`")]
    DuplicateNavTarget(SectionId),
    #[error("section `{0}` has no content")]
    EmptySection(SectionId),
    #[error("experience entry `{0}` has no bullet points")]
    EmptyBullets(String),
    #[error("project `{0}` has no technology tags")]
    NoTags(String),
    #[error("`{0}` is not an absolute profile URL")]
    BadProfileUrl(String),
    #[error("`{0}` is not an email address")]
    BadEmail(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub target: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub skills_intro: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub date_range: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub title: String,
    pub headline: String,
    pub blurb: String,
    pub cta_label: String,
}

/// Outbound links shown in the sidebar and wired into the HTML export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub monogram: String,
    pub hero: Hero,
    pub nav: Vec<NavItem>,
    pub about: About,
    pub experience_title: String,
    pub experience: Vec<ExperienceEntry>,
    pub projects_title: String,
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
    pub links: Links,
    pub footer: String,
}

impl PageContent {
    /// The compiled-in profile.
    pub fn builtin() -> Self {
        Self {
            monogram: "IW".to_owned(),
            hero: Hero {
                greeting: "Hi, my name is".to_owned(),
                name: "Ian Wong.".to_owned(),
                tagline: "I build intelligent systems.".to_owned(),
                intro: "I'm a computer science graduate student at Georgia Tech \
                        specializing in Machine Learning. Currently, I'm focused on \
                        developing scalable ML systems and data visualizations."
                    .to_owned(),
            },
            nav: vec![
                NavItem { target: SectionId::About, label: "About".to_owned() },
                NavItem { target: SectionId::Experience, label: "Experience".to_owned() },
                NavItem { target: SectionId::Projects, label: "Projects".to_owned() },
                NavItem { target: SectionId::Contact, label: "Contact".to_owned() },
            ],
            about: About {
                title: "About Me".to_owned(),
                paragraphs: vec![
                    "I'm a computer science graduate student passionate about machine \
                     learning and data visualization. My background in mathematics and \
                     education has given me a unique perspective on problem-solving and \
                     explaining complex concepts."
                        .to_owned(),
                ],
                skills_intro: "Here are some technologies I've been working with recently:"
                    .to_owned(),
                skills: vec![
                    "Python".to_owned(),
                    "C++".to_owned(),
                    "Java".to_owned(),
                    "D3.js".to_owned(),
                    "React".to_owned(),
                    "Machine Learning".to_owned(),
                    "Spark".to_owned(),
                    "AWS".to_owned(),
                ],
            },
            experience_title: "Experience".to_owned(),
            experience: vec![
                ExperienceEntry {
                    role: "Graduate Teaching Assistant".to_owned(),
                    organization: "Georgia Institute of Technology".to_owned(),
                    date_range: "August 2024 - Present".to_owned(),
                    bullets: vec![
                        "Led in-person office hours offering one-on-one support for \
                         complex CS concepts"
                            .to_owned(),
                        "Optimized and upgraded auto-grader for immediate feedback on \
                         assignments"
                            .to_owned(),
                    ],
                },
                ExperienceEntry {
                    role: "Secondary School Teacher".to_owned(),
                    organization: "Richmond School District".to_owned(),
                    date_range: "September 2022 - June 2024".to_owned(),
                    bullets: vec![
                        "Developed curriculum material for advanced mathematics courses"
                            .to_owned(),
                        "Implemented new grading scale tools improving assessment \
                         efficiency"
                            .to_owned(),
                    ],
                },
            ],
            projects_title: "Some Things I've Built".to_owned(),
            projects: vec![
                ProjectEntry {
                    name: "US Property Price Visualization".to_owned(),
                    description: "Interactive visualization platform processing millions \
                                  of property records. Implemented advanced clustering \
                                  algorithms and predictive models for real-time analysis."
                        .to_owned(),
                    tags: vec![
                        "Python".to_owned(),
                        "Spark".to_owned(),
                        "D3.js".to_owned(),
                        "Machine Learning".to_owned(),
                    ],
                },
                ProjectEntry {
                    name: "Fake News Detector".to_owned(),
                    description: "NLP-powered system achieving 83%+ accuracy in detecting \
                                  fake news articles. Implemented Word2Vec embeddings and \
                                  Random Forest classification."
                        .to_owned(),
                    tags: vec![
                        "Python".to_owned(),
                        "NLP".to_owned(),
                        "Streamlit".to_owned(),
                        "Machine Learning".to_owned(),
                    ],
                },
            ],
            contact: Contact {
                title: "What's Next?".to_owned(),
                headline: "Get In Touch".to_owned(),
                blurb: "I'm currently looking for new opportunities in machine learning \
                        and software development. Whether you have a question or just \
                        want to say hi, I'll try my best to get back to you!"
                    .to_owned(),
                cta_label: "Say Hello".to_owned(),
            },
            links: Links {
                linkedin: "https://www.linkedin.com/in/ian-wong-gt/".to_owned(),
                email: "ianwong.gatech@gmail.com".to_owned(),
            },
            footer: "Built with Rust & Ratatui".to_owned(),
        }
    }

    /// Title shown above a section body. The hero has none.
    pub fn section_title(&self, id: SectionId) -> Option<&str> {
        match id {
            SectionId::Home => None,
            SectionId::About => Some(&self.about.title),
            SectionId::Experience => Some(&self.experience_title),
            SectionId::Projects => Some(&self.projects_title),
            SectionId::Contact => Some(&self.contact.title),
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav.is_empty() {
            return Err(ContentError::NoNavItems);
        }
        let mut seen: Vec<SectionId> = Vec::with_capacity(self.nav.len());
        for item in &self.nav {
            if item.target == SectionId::Home {
                return Err(ContentError::NavTargetsHome(item.label.clone()));
            }
            if seen.contains(&item.target) {
                return Err(ContentError::DuplicateNavTarget(item.target));
            }
            seen.push(item.target);
        }

        let hero = &self.hero;
        if hero.greeting.is_empty()
            || hero.name.is_empty()
            || hero.tagline.is_empty()
            || hero.intro.is_empty()
        {
            return Err(ContentError::EmptySection(SectionId::Home));
        }
        if self.about.paragraphs.is_empty() || self.about.skills.is_empty() {
            return Err(ContentError::EmptySection(SectionId::About));
        }
        if self.experience.is_empty() {
            return Err(ContentError::EmptySection(SectionId::Experience));
        }
        for entry in &self.experience {
            if entry.bullets.is_empty() {
                return Err(ContentError::EmptyBullets(entry.role.clone()));
            }
        }
        if self.projects.is_empty() {
            return Err(ContentError::EmptySection(SectionId::Projects));
        }
        for project in &self.projects {
            if project.tags.is_empty() {
                return Err(ContentError::NoTags(project.name.clone()));
            }
        }
        if self.contact.headline.is_empty() || self.contact.cta_label.is_empty() {
            return Err(ContentError::EmptySection(SectionId::Contact));
        }

        if !self.links.linkedin.starts_with("https://") {
            return Err(ContentError::BadProfileUrl(self.links.linkedin.clone()));
        }
        let email = &self.links.email;
        if !email.contains('@') || !email.contains('.') || email.contains(char::is_whitespace) {
            return Err(ContentError::BadEmail(email.clone()));
        }
        Ok(())
    }
}

/// 1-based position of a section among the numbered nav targets.
/// The hero is unnumbered.
pub fn section_number(id: SectionId) -> Option<usize> {
    SectionId::ALL
        .iter()
        .position(|s| *s == id)
        .filter(|idx| *idx > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        PageContent::builtin().validate().unwrap_or_else(|e| panic!("builtin invalid: {e}"));
    }

    #[test]
    fn nav_skips_home() {
        let content = PageContent::builtin();
        assert_eq!(content.nav.len(), 4);
        assert!(content.nav.iter().all(|item| item.target != SectionId::Home));
    }

    #[test]
    fn home_nav_item_is_rejected() {
        let mut content = PageContent::builtin();
        content.nav.push(NavItem { target: SectionId::Home, label: "Top".to_owned() });
        assert!(matches!(content.validate(), Err(ContentError::NavTargetsHome(_))));
    }

    #[test]
    fn duplicate_nav_target_is_rejected() {
        let mut content = PageContent::builtin();
        content.nav.push(NavItem { target: SectionId::About, label: "Bio".to_owned() });
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateNavTarget(SectionId::About))
        ));
    }

    #[test]
    fn empty_skills_are_rejected() {
        let mut content = PageContent::builtin();
        content.about.skills.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptySection(SectionId::About))
        ));
    }

    #[test]
    fn bullet_free_experience_is_rejected() {
        let mut content = PageContent::builtin();
        content.experience[0].bullets.clear();
        assert!(matches!(content.validate(), Err(ContentError::EmptyBullets(_))));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut content = PageContent::builtin();
        content.links.email = "not an email".to_owned();
        assert!(matches!(content.validate(), Err(ContentError::BadEmail(_))));
    }

    #[test]
    fn sections_after_home_are_numbered() {
        assert_eq!(section_number(SectionId::Home), None);
        assert_eq!(section_number(SectionId::About), Some(1));
        assert_eq!(section_number(SectionId::Contact), Some(4));
    }

    #[test]
    fn content_roundtrips_through_json() {
        let content = PageContent::builtin();
        let json = serde_json::to_string(&content).unwrap_or_default();
        let back: PageContent = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(back.hero.name, content.hero.name);
        assert_eq!(back.projects.len(), content.projects.len());
        back.validate().unwrap_or_else(|e| panic!("roundtrip invalid: {e}"));
    }
}
