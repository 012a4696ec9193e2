use url::Url;

/// Base origin used to resolve relative nav targets. The origin itself is
/// never displayed; only the resolved path and fragment survive.
const RESOLVE_BASE: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A nav target reduced to the two pieces that matter for matching.
///
/// The fragment keeps its leading `#` so an empty string means "no
/// fragment declared" without a separate flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    pub path: String,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: String,
}

impl Location {
    pub fn new(path: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fragment: fragment.into(),
        }
    }

    pub fn at_path(path: impl Into<String>) -> Self {
        Self::new(path, "")
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::at_path("/")
    }
}

/// Splits a target string into path and fragment. Never fails: inputs the
/// URL parser rejects are treated as a bare path split on the first `#`,
/// with an empty path defaulting to `/`.
pub fn parse_target(raw: &str) -> ParsedTarget {
    if let Ok(base) = Url::parse(RESOLVE_BASE)
        && let Ok(resolved) = base.join(raw)
    {
        let fragment = match resolved.fragment() {
            Some(frag) if !frag.is_empty() => format!("#{frag}"),
            _ => String::new(),
        };
        return ParsedTarget {
            path: resolved.path().to_string(),
            fragment,
        };
    }

    let (path_part, fragment_part) = match raw.split_once('#') {
        Some((path, frag)) => (path, frag),
        None => (raw, ""),
    };
    let path = if path_part.is_empty() {
        "/".to_string()
    } else {
        path_part.to_string()
    };
    let fragment = if fragment_part.is_empty() {
        String::new()
    } else {
        format!("#{fragment_part}")
    };
    ParsedTarget { path, fragment }
}

impl ParsedTarget {
    /// Exact-match activity test: the path must equal the current path, and
    /// a declared fragment must equal the current fragment. A target
    /// without a fragment only matches when no fragment is present at all.
    pub fn is_active(&self, location: &Location) -> bool {
        if self.path != location.path {
            return false;
        }
        if self.fragment.is_empty() {
            location.fragment.is_empty()
        } else {
            self.fragment == location.fragment
        }
    }
}

/// Index of the first item active for `location`, if any.
pub fn active_index(parsed: &[ParsedTarget], location: &Location) -> Option<usize> {
    parsed.iter().position(|target| target.is_active(location))
}

#[cfg(test)]
mod tests {
    use super::{Location, NavItem, active_index, parse_target};

    #[test]
    fn parse_target_handles_path_fragment_and_combined_forms() {
        let path_only = parse_target("/about");
        assert_eq!(path_only.path, "/about");
        assert_eq!(path_only.fragment, "");

        let fragment_only = parse_target("#projects");
        assert_eq!(fragment_only.path, "/");
        assert_eq!(fragment_only.fragment, "#projects");

        let combined = parse_target("/#projects");
        assert_eq!(combined.path, "/");
        assert_eq!(combined.fragment, "#projects");
    }

    #[test]
    fn parse_target_resolves_bare_relative_paths() {
        let parsed = parse_target("about");
        assert_eq!(parsed.path, "/about");
        assert_eq!(parsed.fragment, "");
    }

    #[test]
    fn parse_target_never_fails_on_empty_input() {
        let parsed = parse_target("");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.fragment, "");
    }

    #[test]
    fn bare_path_item_is_inactive_when_a_fragment_is_present() {
        let parsed = parse_target("/about");
        assert!(parsed.is_active(&Location::at_path("/about")));
        assert!(!parsed.is_active(&Location::new("/about", "#team")));
    }

    #[test]
    fn fragment_item_requires_exact_path_and_fragment() {
        let parsed = parse_target("/#projects");
        assert!(parsed.is_active(&Location::new("/", "#projects")));
        assert!(!parsed.is_active(&Location::at_path("/")));
        assert!(!parsed.is_active(&Location::new("/about", "#projects")));
    }

    #[test]
    fn path_matching_is_exact_not_prefix() {
        let parsed = parse_target("/");
        assert!(!parsed.is_active(&Location::at_path("/about")));
    }

    #[test]
    fn active_index_returns_first_match_only() {
        let items = vec![
            NavItem::new("Home", "/"),
            NavItem::new("Projects", "/#projects"),
            NavItem::new("Projects again", "/#projects"),
        ];
        let parsed: Vec<_> = items.iter().map(|item| parse_target(&item.target)).collect();

        assert_eq!(
            active_index(&parsed, &Location::new("/", "#projects")),
            Some(1)
        );
        assert_eq!(active_index(&parsed, &Location::at_path("/")), Some(0));
        assert_eq!(active_index(&parsed, &Location::at_path("/missing")), None);
    }
}
