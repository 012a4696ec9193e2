use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceCategory {
    Professional,
    Organizational,
    Competitive,
}

impl ExperienceCategory {
    pub const ALL: [Self; 3] = [Self::Professional, Self::Organizational, Self::Competitive];

    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Organizational => "Organizational",
            Self::Competitive => "Competitive",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Professional => Self::Organizational,
            Self::Organizational => Self::Competitive,
            Self::Competitive => Self::Professional,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub category: ExperienceCategory,
    pub period: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Captions standing in for the screenshot carousel of the original.
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Personal,
    Commissioned,
    Hackathon,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Commissioned => "Commissioned",
            Self::Hackathon => "Hackathon",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Beta,
    Shipped,
    Discontinued,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Beta => "beta",
            Self::Shipped => "shipped",
            Self::Discontinued => "discontinued",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Certification {
    pub issuer: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// Project-type filter cycled from the keyboard, mirroring the filter row
/// of the projects section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl ProjectFilter {
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => project.project_type == kind,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(ProjectType::Personal),
            Self::Only(ProjectType::Personal) => Self::Only(ProjectType::Commissioned),
            Self::Only(ProjectType::Commissioned) => Self::Only(ProjectType::Hackathon),
            Self::Only(ProjectType::Hackathon) => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Show All",
            Self::Only(kind) => kind.label(),
        }
    }
}
