use uuid::Uuid;

use crate::content::application::domain::document::{
    ContentDocument, ContentPatch, Project, Skill, NO_DEMO_SENTINEL,
};

use super::commands::{
    AboutField, ContactField, EditCommand, FeatureField, HeroField, ProjectField, SocialLink,
    parse_tags,
};

/// A server-held working copy of the content document.
///
/// Edits accumulate here and only reach the store when the session is saved,
/// mirroring a dashboard form that is filled in and then submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub working_copy: ContentDocument,
    pub dirty: bool,
}

impl EditorSession {
    pub fn open(document: ContentDocument) -> Self {
        Self {
            working_copy: document,
            dirty: false,
        }
    }

    /// Applies a single command to the working copy.
    ///
    /// Returns `false` without touching the document when the command targets
    /// an index or id that does not exist. Out-of-range edits are expected
    /// when two dashboard tabs race each other, so they are skipped, not
    /// treated as errors.
    pub fn apply(&mut self, command: &EditCommand) -> bool {
        let applied = match command {
            EditCommand::SetHero { field, value } => {
                let hero = &mut self.working_copy.hero;
                match field {
                    HeroField::Name => hero.name = value.clone(),
                    HeroField::Title => hero.title = value.clone(),
                    HeroField::Description => hero.description = value.clone(),
                    HeroField::ResumeUrl => hero.resume_url = value.clone(),
                }
                true
            }

            EditCommand::SetSocialLink { link, value } => {
                let links = &mut self.working_copy.hero.social_links;
                match link {
                    SocialLink::Github => links.github = value.clone(),
                    SocialLink::Linkedin => links.linkedin = value.clone(),
                    SocialLink::Email => links.email = value.clone(),
                }
                true
            }

            EditCommand::SetAbout { field, value } => {
                let about = &mut self.working_copy.about;
                match field {
                    AboutField::Title => about.title = value.clone(),
                    AboutField::Description => about.description = value.clone(),
                }
                true
            }

            EditCommand::SetAboutFeature {
                index,
                field,
                value,
            } => match self.working_copy.about.features.get_mut(*index) {
                Some(feature) => {
                    match field {
                        FeatureField::Title => feature.title = value.clone(),
                        FeatureField::Description => feature.description = value.clone(),
                    }
                    true
                }
                None => false,
            },

            EditCommand::SetSkillCategory { category, name } => {
                match self.working_copy.skills.get_mut(*category) {
                    Some(group) => {
                        group.category = name.clone();
                        true
                    }
                    None => false,
                }
            }

            EditCommand::SetSkillName {
                category,
                skill,
                value,
            } => match self
                .working_copy
                .skills
                .get_mut(*category)
                .and_then(|group| group.skills.get_mut(*skill))
            {
                Some(entry) => {
                    entry.name = value.clone();
                    true
                }
                None => false,
            },

            EditCommand::SetSkillLevel {
                category,
                skill,
                value,
            } => match self
                .working_copy
                .skills
                .get_mut(*category)
                .and_then(|group| group.skills.get_mut(*skill))
            {
                Some(entry) => {
                    // Levels are stored as given, the frontend decides how to
                    // render values outside 0..=100
                    entry.level = *value;
                    true
                }
                None => false,
            },

            EditCommand::AddSkill { category } => {
                match self.working_copy.skills.get_mut(*category) {
                    Some(group) => {
                        group.skills.push(placeholder_skill());
                        true
                    }
                    None => false,
                }
            }

            EditCommand::DeleteSkill { category, skill } => {
                match self.working_copy.skills.get_mut(*category) {
                    Some(group) if *skill < group.skills.len() => {
                        group.skills.remove(*skill);
                        true
                    }
                    _ => false,
                }
            }

            EditCommand::SetProject {
                index,
                field,
                value,
            } => match self.working_copy.projects.get_mut(*index) {
                Some(project) => {
                    match field {
                        ProjectField::Title => project.title = value.clone(),
                        ProjectField::Description => project.description = value.clone(),
                        ProjectField::Image => project.image = value.clone(),
                        ProjectField::Category => project.category = value.clone(),
                        ProjectField::Github => project.github = value.clone(),
                        ProjectField::Demo => project.demo = value.clone(),
                        ProjectField::Tags => project.tags = parse_tags(value),
                    }
                    true
                }
                None => false,
            },

            EditCommand::AddProject => {
                self.working_copy.projects.push(placeholder_project());
                true
            }

            EditCommand::DeleteProject { id } => {
                let before = self.working_copy.projects.len();
                self.working_copy.projects.retain(|p| p.id != *id);
                self.working_copy.projects.len() != before
            }

            EditCommand::SetContact { field, value } => {
                let contact = &mut self.working_copy.contact;
                match field {
                    ContactField::Title => contact.title = value.clone(),
                    ContactField::Description => contact.description = value.clone(),
                    ContactField::Email => contact.email = value.clone(),
                    ContactField::Phone => contact.phone = value.clone(),
                    ContactField::Location => contact.location = value.clone(),
                }
                true
            }

            EditCommand::SetNavbarLogo { value } => {
                self.working_copy.navbar.logo = value.clone();
                true
            }

            EditCommand::SetFooterCopyright { value } => {
                self.working_copy.footer.copyright = value.clone();
                true
            }
        };

        if applied {
            self.dirty = true;
        }
        applied
    }

    /// Applies commands in order, returning how many actually took effect.
    pub fn apply_all(&mut self, commands: &[EditCommand]) -> usize {
        commands.iter().filter(|cmd| self.apply(cmd)).count()
    }

    /// Snapshot of the whole working copy for saving.
    pub fn to_patch(&self) -> ContentPatch {
        ContentPatch::full(&self.working_copy)
    }

    /// Replaces the working copy with a fresh document and clears the dirty flag.
    pub fn reset(&mut self, document: ContentDocument) {
        self.working_copy = document;
        self.dirty = false;
    }
}

fn placeholder_skill() -> Skill {
    Skill {
        name: "New Skill".to_string(),
        level: 50,
    }
}

fn placeholder_project() -> Project {
    Project {
        id: Uuid::new_v4().to_string(),
        title: "New Project".to_string(),
        description: "Project description".to_string(),
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800".to_string(),
        tags: Vec::new(),
        github: "#".to_string(),
        demo: NO_DEMO_SENTINEL.to_string(),
        category: "Mobile Apps".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::document::default_document;

    fn open_default() -> EditorSession {
        EditorSession::open(default_document())
    }

    #[test]
    fn test_open_session_is_clean() {
        let session = open_default();
        assert!(!session.dirty);
        assert_eq!(session.working_copy, default_document());
    }

    #[test]
    fn test_set_hero_field() {
        let mut session = open_default();

        assert!(session.apply(&EditCommand::SetHero {
            field: HeroField::Name,
            value: "Jane Doe".to_string(),
        }));

        assert_eq!(session.working_copy.hero.name, "Jane Doe");
        assert!(session.dirty);
    }

    #[test]
    fn test_set_social_link() {
        let mut session = open_default();

        session.apply(&EditCommand::SetSocialLink {
            link: SocialLink::Github,
            value: "https://github.com/janedoe".to_string(),
        });

        assert_eq!(
            session.working_copy.hero.social_links.github,
            "https://github.com/janedoe"
        );
    }

    #[test]
    fn test_out_of_range_project_edit_is_skipped() {
        let mut session = open_default();
        let before = session.working_copy.clone();

        let applied = session.apply(&EditCommand::SetProject {
            index: 999,
            field: ProjectField::Title,
            value: "ghost".to_string(),
        });

        assert!(!applied);
        assert!(!session.dirty);
        assert_eq!(session.working_copy, before);
    }

    #[test]
    fn test_out_of_range_skill_edit_is_skipped() {
        let mut session = open_default();

        assert!(!session.apply(&EditCommand::SetSkillLevel {
            category: 0,
            skill: 999,
            value: 80,
        }));
        assert!(!session.apply(&EditCommand::AddSkill { category: 999 }));
        assert!(!session.dirty);
    }

    #[test]
    fn test_add_project_appends_placeholder() {
        let mut session = open_default();
        let before = session.working_copy.projects.len();

        session.apply(&EditCommand::AddProject);

        let projects = &session.working_copy.projects;
        assert_eq!(projects.len(), before + 1);

        let added = projects.last().unwrap();
        assert_eq!(added.title, "New Project");
        assert_eq!(added.demo, NO_DEMO_SENTINEL);
        assert_eq!(added.category, "Mobile Apps");
        assert!(added.tags.is_empty());

        // Placeholder ids must not collide with existing ones
        let existing_ids: Vec<&String> = projects[..before].iter().map(|p| &p.id).collect();
        assert!(!existing_ids.contains(&&added.id));
    }

    #[test]
    fn test_delete_project_by_id_preserves_order() {
        let mut session = open_default();
        session.apply(&EditCommand::AddProject);

        let ids: Vec<String> = session
            .working_copy
            .projects
            .iter()
            .map(|p| p.id.clone())
            .collect();
        let victim = ids[1].clone();

        assert!(session.apply(&EditCommand::DeleteProject { id: victim.clone() }));

        let remaining: Vec<String> = session
            .working_copy
            .projects
            .iter()
            .map(|p| p.id.clone())
            .collect();
        let expected: Vec<String> = ids.into_iter().filter(|id| *id != victim).collect();
        assert_eq!(remaining, expected);
    }

    #[test]
    fn test_delete_project_unknown_id_is_skipped() {
        let mut session = open_default();
        let before = session.working_copy.projects.len();

        assert!(!session.apply(&EditCommand::DeleteProject {
            id: "no-such-id".to_string(),
        }));
        assert_eq!(session.working_copy.projects.len(), before);
        assert!(!session.dirty);
    }

    #[test]
    fn test_set_project_tags_parses_commas() {
        let mut session = open_default();

        session.apply(&EditCommand::SetProject {
            index: 0,
            field: ProjectField::Tags,
            value: "Rust, Actix ,PostgreSQL".to_string(),
        });

        assert_eq!(
            session.working_copy.projects[0].tags,
            vec!["Rust", "Actix", "PostgreSQL"]
        );
    }

    #[test]
    fn test_skill_level_is_not_clamped() {
        let mut session = open_default();

        session.apply(&EditCommand::SetSkillLevel {
            category: 0,
            skill: 0,
            value: 150,
        });

        assert_eq!(session.working_copy.skills[0].skills[0].level, 150);
    }

    #[test]
    fn test_add_and_delete_skill() {
        let mut session = open_default();
        let before = session.working_copy.skills[0].skills.len();

        session.apply(&EditCommand::AddSkill { category: 0 });
        assert_eq!(session.working_copy.skills[0].skills.len(), before + 1);

        let added = session.working_copy.skills[0].skills.last().unwrap();
        assert_eq!(added.name, "New Skill");
        assert_eq!(added.level, 50);

        session.apply(&EditCommand::DeleteSkill {
            category: 0,
            skill: before,
        });
        assert_eq!(session.working_copy.skills[0].skills.len(), before);
    }

    #[test]
    fn test_apply_all_counts_applied_commands() {
        let mut session = open_default();

        let applied = session.apply_all(&[
            EditCommand::SetHero {
                field: HeroField::Title,
                value: "Engineer".to_string(),
            },
            EditCommand::SetProject {
                index: 999,
                field: ProjectField::Title,
                value: "ghost".to_string(),
            },
            EditCommand::SetFooterCopyright {
                value: "© 2026".to_string(),
            },
        ]);

        assert_eq!(applied, 2);
        assert!(session.dirty);
        assert_eq!(session.working_copy.hero.title, "Engineer");
        assert_eq!(session.working_copy.footer.copyright, "© 2026");
    }

    #[test]
    fn test_to_patch_covers_every_section() {
        let mut session = open_default();
        session.apply(&EditCommand::SetNavbarLogo {
            value: "JD".to_string(),
        });

        let patch = session.to_patch();
        assert_eq!(patch.navbar.as_ref().unwrap().logo, "JD");
        assert!(patch.hero.is_some());
        assert!(patch.about.is_some());
        assert!(patch.skills.is_some());
        assert!(patch.projects.is_some());
        assert!(patch.contact.is_some());
        assert!(patch.footer.is_some());
    }

    #[test]
    fn test_reset_clears_dirty() {
        let mut session = open_default();
        session.apply(&EditCommand::SetHero {
            field: HeroField::Name,
            value: "Jane".to_string(),
        });
        assert!(session.dirty);

        session.reset(default_document());
        assert!(!session.dirty);
        assert_eq!(session.working_copy, default_document());
    }
}
