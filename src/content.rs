//! Static page content. Text that changes with the language is referenced by
//! locale key; names, links and technologies are the same everywhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const fn all() -> [Section; 6] {
        [
            Section::Home,
            Section::About,
            Section::Skills,
            Section::Experience,
            Section::Projects,
            Section::Contact,
        ]
    }

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::About => "nav.about",
            Section::Skills => "nav.skills",
            Section::Experience => "nav.experience",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title_key: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title_key: "skills.backend",
        skills: &[
            Skill {
                name: "Python",
                icon: "devicon-python-plain",
                color: "text-blue-400",
            },
            Skill {
                name: "Django",
                icon: "devicon-django-plain",
                color: "text-green-500",
            },
            Skill {
                name: "FastAPI",
                icon: "devicon-fastapi-plain",
                color: "text-teal-400",
            },
            Skill {
                name: "Celery",
                icon: "devicon-python-plain",
                color: "text-green-400",
            },
        ],
    },
    SkillCategory {
        title_key: "skills.frontend",
        skills: &[
            Skill {
                name: "React",
                icon: "devicon-react-original",
                color: "text-cyan-400",
            },
            Skill {
                name: "TypeScript",
                icon: "devicon-typescript-plain",
                color: "text-blue-500",
            },
            Skill {
                name: "Tailwind CSS",
                icon: "devicon-tailwindcss-original",
                color: "text-sky-400",
            },
            Skill {
                name: "Node.js",
                icon: "devicon-nodejs-plain",
                color: "text-green-500",
            },
        ],
    },
    SkillCategory {
        title_key: "skills.databases",
        skills: &[
            Skill {
                name: "PostgreSQL",
                icon: "devicon-postgresql-plain",
                color: "text-blue-400",
            },
            Skill {
                name: "Redis",
                icon: "devicon-redis-plain",
                color: "text-red-500",
            },
        ],
    },
    SkillCategory {
        title_key: "skills.devops",
        skills: &[
            Skill {
                name: "Docker",
                icon: "devicon-docker-plain",
                color: "text-blue-500",
            },
            Skill {
                name: "Git",
                icon: "devicon-git-plain",
                color: "text-orange-500",
            },
            Skill {
                name: "Linux",
                icon: "devicon-linux-plain",
                color: "text-yellow-400",
            },
            Skill {
                name: "Nginx",
                icon: "devicon-nginx-original",
                color: "text-green-500",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Education,
}

/// One stop on the experience timeline; its text lives under
/// `experience.items.<id>` in the locale catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub kind: EntryKind,
}

impl TimelineEntry {
    pub fn key(&self, field: &str) -> String {
        format!("experience.items.{}.{}", self.id, field)
    }

    /// Entries alternate sides of the timeline, starting on the left.
    pub fn on_left(index: usize) -> bool {
        index % 2 == 0
    }
}

pub static TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        id: "senior",
        kind: EntryKind::Work,
    },
    TimelineEntry {
        id: "fullstack",
        kind: EntryKind::Work,
    },
    TimelineEntry {
        id: "bachelor",
        kind: EntryKind::Education,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub icon: &'static str,
    /// Tailwind gradient stops for the card header.
    pub gradient: &'static str,
    pub technologies: &'static [&'static str],
    pub code_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("projects.items.{}.title", self.id)
    }

    pub fn description_key(&self) -> String {
        format!("projects.items.{}.description", self.id)
    }
}

const GITHUB_PROFILE: &str = "https://github.com/Rakhmatullo929";
const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/rakhmatullo-azizov/ru/";
pub const EMAIL: &str = "tillo3305@gmail.com";

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "ecommerce",
        icon: "🛒",
        gradient: "from-cyan-500 to-blue-600",
        technologies: &["Django", "React", "PostgreSQL", "Redis", "Stripe"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
    Project {
        id: "tasks",
        icon: "📋",
        gradient: "from-purple-500 to-pink-600",
        technologies: &["FastAPI", "TypeScript", "PostgreSQL", "WebSocket"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
    Project {
        id: "analytics",
        icon: "📊",
        gradient: "from-green-500 to-teal-600",
        technologies: &["Django", "React", "D3.js", "Celery"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
    Project {
        id: "api",
        icon: "🔌",
        gradient: "from-orange-500 to-red-600",
        technologies: &["Django REST", "Redis", "Docker", "Nginx"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
    Project {
        id: "social",
        icon: "💬",
        gradient: "from-blue-500 to-indigo-600",
        technologies: &["Django", "React", "PostgreSQL", "WebSocket"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
    Project {
        id: "booking",
        icon: "📅",
        gradient: "from-yellow-500 to-orange-600",
        technologies: &["FastAPI", "Vue.js", "PostgreSQL", "Celery"],
        code_url: Some(GITHUB_PROFILE),
        demo_url: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub label_key: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

pub static CONTACT_METHODS: [ContactMethod; 2] = [
    ContactMethod {
        label_key: "contact.email",
        value: EMAIL,
        href: "mailto:tillo3305@gmail.com",
        glyph: "✉",
        color: "text-red-400 group-hover:text-red-300",
    },
    ContactMethod {
        label_key: "contact.phone",
        value: "+998 90 511 33 05",
        href: "tel:+998905113305",
        glyph: "☎",
        color: "text-green-400 group-hover:text-green-300",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Icon font class, or a literal glyph when `glyph` is set.
    pub icon: &'static str,
    pub glyph: Option<&'static str>,
    pub hover: &'static str,
}

impl SocialLink {
    /// External links open in a new tab; `mailto:` and `tel:` do not.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: GITHUB_PROFILE,
        icon: "devicon-github-original",
        glyph: None,
        hover: "hover:text-gray-400 hover:bg-gray-400/20",
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_PROFILE,
        icon: "devicon-linkedin-plain",
        glyph: None,
        hover: "hover:text-blue-500 hover:bg-blue-500/20",
    },
    SocialLink {
        label: "Telegram",
        href: "https://t.me/",
        icon: "",
        glyph: Some("✈"),
        hover: "hover:text-blue-400 hover:bg-blue-400/20",
    },
];

pub static HERO_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: GITHUB_PROFILE,
        icon: "devicon-github-original",
        glyph: None,
        hover: "hover:text-cyan-400",
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_PROFILE,
        icon: "devicon-linkedin-plain",
        glyph: None,
        hover: "hover:text-cyan-400",
    },
    SocialLink {
        label: "Email",
        href: "mailto:tillo3305@gmail.com",
        icon: "",
        glyph: Some("✉"),
        hover: "hover:text-cyan-400",
    },
];

pub const PARTICLE_COUNT: usize = 12;

/// A floating dot in the hero background. Positions are percentages of the
/// hero box; timings are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Placement is a fixed scatter so server and client render the same markup.
    pub fn nth(index: usize) -> Self {
        Self {
            left: ((index * 37 + 11) % 97) as f64,
            top: ((index * 61 + 23) % 89) as f64,
            duration: 3.0 + (index % 4) as f64,
            delay: (index % 6) as f64 * 0.5,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "left: {}%;top: {}%;animation-duration: {}s;animation-delay: {}s;",
            self.left, self.top, self.duration, self.delay
        )
    }
}

pub fn hero_particles() -> impl Iterator<Item = Particle> {
    (0..PARTICLE_COUNT).map(Particle::nth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{catalog, Language};

    #[test]
    fn test_particles_are_stable_and_on_screen() {
        let first: Vec<Particle> = hero_particles().collect();
        let second: Vec<Particle> = hero_particles().collect();
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert_eq!(first, second);
        for p in &first {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!(p.duration >= 3.0);
        }
        assert_eq!(
            Particle::nth(1).to_css(),
            "left: 48%;top: 84%;animation-duration: 4s;animation-delay: 0.5s;"
        );
    }

    #[test]
    fn test_section_anchors_are_unique() {
        let mut ids: Vec<&str> = Section::all().iter().map(|s| s.id()).collect();
        for section in Section::all() {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::all().len());
    }

    #[test]
    fn test_every_text_key_is_translated() {
        let en = catalog(Language::En).expect("english catalog");
        let mut keys: Vec<String> = Section::all()
            .iter()
            .map(|s| s.label_key().to_string())
            .collect();
        keys.extend(SKILL_CATEGORIES.iter().map(|c| c.title_key.to_string()));
        keys.extend(CONTACT_METHODS.iter().map(|c| c.label_key.to_string()));
        for entry in &TIMELINE {
            keys.extend(["title", "company", "period"].map(|f| entry.key(f)));
            assert!(!en.list(&entry.key("points")).is_empty(), "{}", entry.id);
        }
        for project in &PROJECTS {
            keys.push(project.title_key());
            keys.push(project.description_key());
        }
        for key in keys {
            assert!(en.get(&key).is_some(), "missing `{key}`");
        }
    }

    #[test]
    fn test_timeline_alternates() {
        assert!(TimelineEntry::on_left(0));
        assert!(!TimelineEntry::on_left(1));
        assert!(TimelineEntry::on_left(2));
        assert_eq!(TIMELINE[2].kind, EntryKind::Education);
    }

    #[test]
    fn test_external_links() {
        assert!(SOCIAL_LINKS.iter().all(SocialLink::is_external));
        assert!(!HERO_LINKS[2].is_external());
    }
}
