use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed key of the one-and-only content document.
pub const DOCUMENT_KEY: &str = "portfolio/data";

/// Sentinel value in `Project::demo` meaning "no live demo link".
pub const NO_DEMO_SENTINEL: &str = "#";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
    // Field names on the wire match the stored document, which predates
    // this service and uses camelCase for these two.
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
    #[serde(rename = "socialLinks")]
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct About {
    pub title: String,
    pub description: String,
    /// Display order is list order.
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub name: String,
    /// Rendered as a progress-bar percentage. Values outside 0-100 are
    /// stored as-is; the document has never clamped them.
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Unique among projects; identity for delete, never the array index.
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub category: String,
}

impl Project {
    /// `"#"` in `demo` suppresses the live-demo affordance.
    pub fn has_live_demo(&self) -> bool {
        self.demo != NO_DEMO_SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Navbar {
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Footer {
    pub copyright: String,
}

/// The whole portfolio content document. Exactly one instance exists per
/// deployment, stored under [`DOCUMENT_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentDocument {
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub navbar: Navbar,
    pub footer: Footer,
}

/// Partial update of the content document.
///
/// Merge granularity is deliberately coarse: a present section replaces the
/// stored section wholesale, an absent section is left untouched. The store
/// never deep-merges, so callers must send complete subtrees for any
/// section they touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navbar: Option<Navbar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.hero.is_none()
            && self.about.is_none()
            && self.skills.is_none()
            && self.projects.is_none()
            && self.contact.is_none()
            && self.navbar.is_none()
            && self.footer.is_none()
    }

    /// Full-document overwrite at top-level-section granularity.
    pub fn full(document: &ContentDocument) -> Self {
        Self {
            hero: Some(document.hero.clone()),
            about: Some(document.about.clone()),
            skills: Some(document.skills.clone()),
            projects: Some(document.projects.clone()),
            contact: Some(document.contact.clone()),
            navbar: Some(document.navbar.clone()),
            footer: Some(document.footer.clone()),
        }
    }
}

impl ContentDocument {
    /// Apply a patch locally with the same semantics the store uses:
    /// shallow replacement of the listed top-level sections.
    pub fn apply(&mut self, patch: ContentPatch) {
        if let Some(hero) = patch.hero {
            self.hero = hero;
        }
        if let Some(about) = patch.about {
            self.about = about;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(projects) = patch.projects {
            self.projects = projects;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(navbar) = patch.navbar {
            self.navbar = navbar;
        }
        if let Some(footer) = patch.footer {
            self.footer = footer;
        }
    }

    /// Built-in default document, persisted on first load when the store
    /// holds no record and served as fallback content when the store is
    /// unreachable.
    pub fn default_document() -> Self {
        Self {
            hero: Hero {
                name: "Mohamed Wageh".to_string(),
                title: "Software Engineer | Full Stack Mobile Developer".to_string(),
                description: "Passionate about building scalable mobile applications | Enterprise solutions | Specializing in React Native & Mobile Development".to_string(),
                resume_url: "https://drive.google.com/file/d/1xVq561f1CzcPB9bHWTyoPKAjh2tVscA6/view?usp=share_link".to_string(),
                social_links: SocialLinks {
                    github: "https://github.com/mohamed-wageh".to_string(),
                    linkedin: "https://www.linkedin.com/in/mohamed-wageh-ibrahim-ba1920210/".to_string(),
                    email: "#contact".to_string(),
                },
            },
            about: About {
                title: "About Me".to_string(),
                description: "I'm Mohamed Wageh, a Software Engineer and Full Stack Mobile Developer specializing in React Native. With a passion for building scalable mobile applications and enterprise solutions, I bring expertise in mobile development, Firebase, and modern JavaScript technologies.".to_string(),
                features: vec![
                    Feature {
                        title: "Clean Code".to_string(),
                        description: "Writing maintainable, well-documented code that stands the test of time.".to_string(),
                    },
                    Feature {
                        title: "Problem Solver".to_string(),
                        description: "Turning complex problems into elegant, scalable solutions.".to_string(),
                    },
                    Feature {
                        title: "Continuous Learning".to_string(),
                        description: "Always exploring new technologies and best practices in the industry.".to_string(),
                    },
                ],
            },
            skills: vec![
                SkillCategory {
                    category: "Mobile Development".to_string(),
                    skills: vec![
                        Skill { name: "React Native".to_string(), level: 95 },
                        Skill { name: "Expo".to_string(), level: 90 },
                        Skill { name: "JavaScript".to_string(), level: 98 },
                        Skill { name: "TypeScript".to_string(), level: 85 },
                        Skill { name: "Mobile UI/UX".to_string(), level: 92 },
                        Skill { name: "Redux".to_string(), level: 88 },
                    ],
                },
                SkillCategory {
                    category: "Backend & Database".to_string(),
                    skills: vec![
                        Skill { name: "Node.js".to_string(), level: 90 },
                        Skill { name: "Firebase".to_string(), level: 95 },
                        Skill { name: "MongoDB".to_string(), level: 88 },
                        Skill { name: "REST APIs".to_string(), level: 93 },
                        Skill { name: "Express.js".to_string(), level: 85 },
                        Skill { name: "Cloud Services".to_string(), level: 87 },
                    ],
                },
                SkillCategory {
                    category: "Tools & Others".to_string(),
                    skills: vec![
                        Skill { name: "Git".to_string(), level: 95 },
                        Skill { name: "GitHub".to_string(), level: 93 },
                        Skill { name: "VS Code".to_string(), level: 98 },
                        Skill { name: "HTML5/CSS3".to_string(), level: 95 },
                        Skill { name: "Agile/CI/CD".to_string(), level: 88 },
                        Skill { name: "API Integration".to_string(), level: 92 },
                    ],
                },
            ],
            projects: vec![
                Project {
                    id: "1".to_string(),
                    title: "Restaurant Chain Management App".to_string(),
                    description: "Enterprise mobile application for restaurant chain management with real-time order tracking and inventory management.".to_string(),
                    image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800".to_string(),
                    tags: vec!["React Native".to_string(), "Firebase".to_string(), "Node.js".to_string(), "MongoDB".to_string()],
                    github: "https://github.com/mohamed-wageh".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Mobile Apps".to_string(),
                },
                Project {
                    id: "2".to_string(),
                    title: "E-Commerce Mobile App".to_string(),
                    description: "Full-featured e-commerce mobile application with user authentication, payment integration, and product management.".to_string(),
                    image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800".to_string(),
                    tags: vec!["React Native".to_string(), "Redux".to_string(), "Stripe".to_string(), "Firebase".to_string()],
                    github: "https://github.com/mohamed-wageh/The-project".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Mobile Apps".to_string(),
                },
                Project {
                    id: "3".to_string(),
                    title: "Social Media App".to_string(),
                    description: "Modern social media mobile app with real-time chat, media sharing, and push notifications.".to_string(),
                    image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=800".to_string(),
                    tags: vec!["React Native".to_string(), "Firebase".to_string(), "WebSocket".to_string(), "Cloud Storage".to_string()],
                    github: "https://github.com/mohamed-wageh".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Mobile Apps".to_string(),
                },
                Project {
                    id: "4".to_string(),
                    title: "Task Management Platform".to_string(),
                    description: "Collaborative task management application with team features, offline support, and real-time sync.".to_string(),
                    image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800".to_string(),
                    tags: vec!["React Native".to_string(), "Expo".to_string(), "Firebase".to_string(), "Redux".to_string()],
                    github: "https://github.com/mohamed-wageh".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Mobile Apps".to_string(),
                },
                Project {
                    id: "5".to_string(),
                    title: "Analytics Dashboard".to_string(),
                    description: "Business analytics dashboard with data visualization, reporting, and real-time metrics for mobile and web.".to_string(),
                    image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800".to_string(),
                    tags: vec!["React".to_string(), "React Native".to_string(), "Chart.js".to_string(), "Node.js".to_string()],
                    github: "https://github.com/mohamed-wageh".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Full Stack".to_string(),
                },
                Project {
                    id: "6".to_string(),
                    title: "Food Delivery App".to_string(),
                    description: "Complete food delivery solution with live tracking, order management, and multiple payment options.".to_string(),
                    image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800".to_string(),
                    tags: vec!["React Native".to_string(), "Firebase".to_string(), "MongoDB".to_string(), "REST APIs".to_string()],
                    github: "https://github.com/mohamed-wageh".to_string(),
                    demo: NO_DEMO_SENTINEL.to_string(),
                    category: "Full Stack".to_string(),
                },
            ],
            contact: Contact {
                title: "Get In Touch".to_string(),
                description: "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.".to_string(),
                email: "mido41239937@gmail.com".to_string(),
                phone: "+201124495919".to_string(),
                location: "Giza, Egypt".to_string(),
            },
            navbar: Navbar {
                logo: "Mohamed Wageh".to_string(),
            },
            footer: Footer {
                copyright: "© 2025 Mohamed Wageh. All rights reserved.".to_string(),
            },
        }
    }
}

/// Free-function form of [`ContentDocument::default_document`], handy as a
/// fallback closure in `unwrap_or_else`.
pub fn default_document() -> ContentDocument {
    ContentDocument::default_document()
}
