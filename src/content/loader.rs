use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

use super::model::Profile;

/// Fixture compiled into the binary so the viewer runs without arguments.
const DEFAULT_PROFILE_JSON: &str = include_str!("../../content/profile.json");

/// Loads the portfolio content: an explicit path wins, otherwise the
/// embedded default profile is used.
pub fn load_profile(path: Option<&Path>) -> AppResult<Profile> {
    match path {
        Some(path) => load_from_path(path),
        None => parse_profile(DEFAULT_PROFILE_JSON, "<embedded profile>"),
    }
}

fn load_from_path(path: &Path) -> AppResult<Profile> {
    let raw = fs::read_to_string(path).map_err(|source| {
        AppError::io_with_context(source, format!("failed to read content: {}", path.display()))
    })?;
    parse_profile(&raw, &path.display().to_string())
}

fn parse_profile(raw: &str, origin: &str) -> AppResult<Profile> {
    serde_json::from_str(raw).map_err(|source| AppError::content(origin, source))
}
