//! Static content for every page section.
//!
//! The web crate turns these tables into markup; keeping them here means the
//! nav/section contract is checked by plain host-side tests.

pub struct NavItem {
    pub label: &'static str,
    /// Id of the section the link scrolls to.
    pub target: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        target: "hero",
    },
    NavItem {
        label: "About",
        target: "about",
    },
    NavItem {
        label: "Skills",
        target: "skills",
    },
    NavItem {
        label: "Projects",
        target: "projects",
    },
    NavItem {
        label: "Contact",
        target: "contact",
    },
];

// ---------------- Hero ----------------

pub const SITE_NAME: &str = "Alex Rivers";
pub const HERO_GREETING: &str = "What's Up 👋";
pub const HERO_TAGLINE: &str =
    "I create digital experiences that combine innovative design with powerful functionality.";

/// Role lines the hero cycles through.
pub const HERO_ROLES: [&str; 5] = [
    "Web Developer 💻",
    "App Developer 💻",
    "Web Designer 🎨",
    "Problem Solver 🚀",
    "UI/UX Enthusiast 🎯",
];

// ---------------- About ----------------

pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        title: "Professional Journey",
        blurb: "As a developer, I blend creativity with technical expertise to build \
                innovative solutions. My journey in tech started with a passion for \
                creating something that has the potential to make a difference.",
    },
    Highlight {
        title: "Education & Learning",
        blurb: "Continuous learning and staying updated with the latest technologies. \
                Learning is a lifelong journey, and I embrace every opportunity to grow.",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub blurb: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Years Experience",
        value: "3+",
        blurb: "Years of coding and creating",
    },
    Stat {
        label: "Projects Completed",
        value: "20+",
        blurb: "Successful project deliveries",
    },
    Stat {
        label: "Satisfied Clients",
        value: "15+",
        blurb: "Happy clients and counting",
    },
];

// ---------------- Skills ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proficiency {
    Basics,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Basics => "Basics",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub level: Proficiency,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub blurb: &'static str,
    pub groups: &'static [SkillGroup],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Web Development",
        blurb: "Building responsive and dynamic web applications with modern technologies",
        groups: &[
            SkillGroup {
                title: "Frontend",
                skills: &[
                    Skill {
                        name: "HTML5",
                        level: Proficiency::Advanced,
                    },
                    Skill {
                        name: "CSS3",
                        level: Proficiency::Advanced,
                    },
                    Skill {
                        name: "JavaScript",
                        level: Proficiency::Advanced,
                    },
                    Skill {
                        name: "React",
                        level: Proficiency::Intermediate,
                    },
                    Skill {
                        name: "Tailwind",
                        level: Proficiency::Intermediate,
                    },
                ],
            },
            SkillGroup {
                title: "Backend",
                skills: &[
                    Skill {
                        name: "Python (Flask)",
                        level: Proficiency::Intermediate,
                    },
                    Skill {
                        name: "Express",
                        level: Proficiency::Intermediate,
                    },
                ],
            },
            SkillGroup {
                title: "Database",
                skills: &[
                    Skill {
                        name: "MySQL",
                        level: Proficiency::Intermediate,
                    },
                    Skill {
                        name: "Supabase",
                        level: Proficiency::Intermediate,
                    },
                ],
            },
        ],
    },
    SkillCategory {
        title: "Mobile Development",
        blurb: "Creating cross-platform mobile applications with cutting-edge frameworks",
        groups: &[SkillGroup {
            title: "Cross-platform",
            skills: &[Skill {
                name: "Flutter",
                level: Proficiency::Basics,
            }],
        }],
    },
    SkillCategory {
        title: "DevOps",
        blurb: "Implementing CI/CD pipelines and managing cloud infrastructure",
        groups: &[SkillGroup {
            title: "Tooling",
            skills: &[Skill {
                name: "Git",
                level: Proficiency::Intermediate,
            }],
        }],
    },
];

// ---------------- Projects ----------------

pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Class 10 Science Guide App",
        blurb: "A mobile application that provides a guide for Class 10 Science students",
        tags: &["Flutter", "Dart"],
        live_url: "#",
        repo_url: "#",
    },
    Project {
        title: "Class 12 English Guide App",
        blurb: "A mobile application that provides a guide for Class 12 English students",
        tags: &["Flutter", "Dart"],
        live_url: "#",
        repo_url: "#",
    },
];

// ---------------- Contact ----------------

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: "hello@alexrivers.dev",
        href: Some("mailto:hello@alexrivers.dev"),
    },
    ContactChannel {
        label: "Phone",
        value: "+1 (555) 014-2330",
        href: None,
    },
    ContactChannel {
        label: "Location",
        value: "Portland, OR",
        href: None,
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/alexrivers",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/alexrivers",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/alex.rivers",
    },
];
