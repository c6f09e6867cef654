use serde::{Deserialize, Serialize};

/// Fields of the hero section that take a plain string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HeroField {
    Name,
    Title,
    Description,
    ResumeUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SocialLink {
    Github,
    Linkedin,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AboutField {
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Title,
    Description,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    Description,
    Image,
    Category,
    Github,
    Demo,
    /// Value is a comma separated list, parsed with [`parse_tags`]
    Tags,
}

/// A single edit against the working copy.
///
/// Every command names its target structurally, so a typo cannot silently
/// create a new field the way a free-form path string could.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    SetHero {
        field: HeroField,
        value: String,
    },
    SetSocialLink {
        link: SocialLink,
        value: String,
    },
    SetAbout {
        field: AboutField,
        value: String,
    },
    SetAboutFeature {
        index: usize,
        field: FeatureField,
        value: String,
    },
    SetSkillCategory {
        category: usize,
        name: String,
    },
    SetSkillName {
        category: usize,
        skill: usize,
        value: String,
    },
    SetSkillLevel {
        category: usize,
        skill: usize,
        value: i32,
    },
    AddSkill {
        category: usize,
    },
    DeleteSkill {
        category: usize,
        skill: usize,
    },
    SetProject {
        index: usize,
        field: ProjectField,
        value: String,
    },
    AddProject,
    DeleteProject {
        id: String,
    },
    SetContact {
        field: ContactField,
        value: String,
    },
    SetNavbarLogo {
        value: String,
    },
    SetFooterCopyright {
        value: String,
    },
}

/// Splits a comma separated tag string into trimmed tags.
///
/// Empty segments are kept, so `"A,,B"` yields `["A", "", "B"]` and the
/// dashboard shows the stray comma instead of hiding it.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
