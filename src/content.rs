use std::sync::{Arc, LazyLock};

/// Fallback target for links that were left out of a record.
pub const PLACEHOLDER_HREF: &str = "#";

static BUILTIN: LazyLock<Content> = LazyLock::new(Content::builtin);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub gradient: String,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
}

impl Project {
    pub fn demo_href(&self) -> &str {
        link_or_placeholder(self.demo_link.as_deref())
    }

    pub fn github_href(&self) -> &str {
        link_or_placeholder(self.github_link.as_deref())
    }
}

pub fn link_or_placeholder(link: Option<&str>) -> &str {
    link.unwrap_or(PLACEHOLDER_HREF)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub href: String,
    /// devicon class for the icon shown before the label
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Everything the page renders. Cloning shares the underlying tables.
#[derive(Debug, Clone)]
pub struct Content {
    pub meta: PageMeta,
    pub skills: Arc<[SkillGroup]>,
    pub projects: Arc<[Project]>,
    pub social: Arc<[SocialLink]>,
}

/// The site's content, built on first use and shared by every render after that.
pub fn content() -> Content {
    BUILTIN.clone()
}

fn skill_group(title: &str, skills: &[&str], color: &str) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        color: color.to_string(),
    }
}

fn tag(name: &str, color: &str) -> Tag {
    Tag {
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn social(href: &str, icon: &str, label: &str) -> SocialLink {
    SocialLink {
        href: href.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
    }
}

impl Content {
    pub fn builtin() -> Self {
        let skills = vec![
            skill_group(
                "ML/DL",
                &["TensorFlow", "PyTorch", "Scikit-learn", "Keras"],
                "cyan",
            ),
            skill_group(
                "NLP & LLMs",
                &["Transformers", "LangChain", "OpenAI API", "Hugging Face"],
                "teal",
            ),
            skill_group(
                "MLOps",
                &["MLflow", "Docker", "Kubernetes", "FastAPI"],
                "amber",
            ),
            skill_group(
                "Data & Cloud",
                &["Python", "Pandas / NumPy", "AWS / GCP", "PostgreSQL"],
                "emerald",
            ),
        ];

        let projects = vec![
            Project {
                title: "AI Chatbot Assistant".to_string(),
                description: "Intelligent chatbot powered by LLMs with RAG capabilities for context-aware conversations.".to_string(),
                tags: vec![
                    tag("LangChain", "cyan"),
                    tag("OpenAI", "emerald"),
                    tag("FastAPI", "teal"),
                ],
                gradient: "bg-gradient-to-br from-cyan-400 to-teal-500".to_string(),
                demo_link: None,
                github_link: None,
            },
            Project {
                title: "Computer Vision Pipeline".to_string(),
                description: "Real-time object detection and tracking system using YOLO and deep learning models.".to_string(),
                tags: vec![
                    tag("PyTorch", "amber"),
                    tag("OpenCV", "orange"),
                    tag("YOLO", "lime"),
                ],
                gradient: "bg-gradient-to-br from-amber-400 to-orange-500".to_string(),
                demo_link: None,
                github_link: None,
            },
            Project {
                title: "Sentiment Analysis API".to_string(),
                description: "NLP service for analyzing sentiment in text with support for multiple languages and emotions.".to_string(),
                tags: vec![
                    tag("Transformers", "teal"),
                    tag("BERT", "emerald"),
                    tag("FastAPI", "cyan"),
                ],
                gradient: "bg-gradient-to-br from-emerald-400 to-cyan-500".to_string(),
                demo_link: None,
                github_link: None,
            },
        ];

        let social = vec![
            social("https://github.com/tuanquang", "devicon-github-plain", "GitHub"),
            social(
                "https://linkedin.com/in/tuanquang",
                "devicon-linkedin-plain",
                "LinkedIn",
            ),
            social("mailto:contact@tuanquang.dev", "extra-email", "Email"),
        ];

        Self {
            meta: PageMeta {
                title: "Tuan Quang - AI Engineer Portfolio".to_string(),
                description: "AI Engineer specializing in machine learning, deep learning, and NLP. Building intelligent systems that make an impact.".to_string(),
            },
            skills: skills.into(),
            projects: projects.into(),
            social: social.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SkillColor, TagColor};

    #[test]
    fn test_builtin_skill_table() {
        let content = Content::builtin();
        let titles = content
            .skills
            .iter()
            .map(|g| g.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["ML/DL", "NLP & LLMs", "MLOps", "Data & Cloud"]);
        for group in content.skills.iter() {
            assert!(!group.skills.is_empty(), "{} has no skills", group.title);
            assert!(
                group.color.parse::<SkillColor>().is_ok(),
                "{} uses a color skill cards can't show",
                group.title
            );
        }
    }

    #[test]
    fn test_builtin_project_table() {
        let content = Content::builtin();
        assert_eq!(content.projects.len(), 3);
        for project in content.projects.iter() {
            assert_eq!(project.tags.len(), 3);
            for tag in &project.tags {
                assert!(tag.color.parse::<TagColor>().is_ok());
            }
            assert!(project.gradient.starts_with("bg-gradient-to-br"));
        }
    }

    #[test]
    fn test_missing_links_use_placeholder() {
        let project = Project {
            title: "X".to_string(),
            description: String::new(),
            tags: vec![],
            gradient: String::new(),
            demo_link: None,
            github_link: Some("https://github.com/example/x".to_string()),
        };
        assert_eq!(project.demo_href(), PLACEHOLDER_HREF);
        assert_eq!(project.github_href(), "https://github.com/example/x");
        assert_eq!(link_or_placeholder(None), "#");
    }

    #[test]
    fn test_content_is_shared() {
        let a = content();
        let b = content();
        assert!(Arc::ptr_eq(&a.skills, &b.skills));
        assert!(Arc::ptr_eq(&a.projects, &b.projects));
        assert_eq!(a.meta.title, "Tuan Quang - AI Engineer Portfolio");
    }
}
