mod loader;
mod model;

pub use loader::load_profile;
pub use model::{
    Certification, ContactLink, Education, Experience, ExperienceCategory, Profile, Project,
    ProjectFilter, ProjectLink, ProjectStatus, ProjectType,
};
