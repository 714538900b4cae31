/// Allow-list of routes reachable without a session
///
/// A pattern is either an exact path (`/health`) or a prefix, written with a
/// trailing `(.*)` or `*` (`/sign-in(.*)` matches `/sign-in` and
/// `/sign-in/factor-one`).
///
/// # Example
/// ```
/// use planner_api::auth::PublicRoutes;
///
/// let routes = PublicRoutes::default();
/// assert!(routes.is_public("/sign-in/sso-callback"));
/// assert!(!routes.is_public("/api/teams"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicRoutes {
    patterns: Vec<RoutePattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RoutePattern {
    Exact(String),
    Prefix(String),
}

impl RoutePattern {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let prefix = raw
            .strip_suffix("(.*)")
            .or_else(|| raw.strip_suffix('*'));

        Some(match prefix {
            Some(prefix) => RoutePattern::Prefix(prefix.to_string()),
            None => RoutePattern::Exact(raw.to_string()),
        })
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(exact) => path == exact,
            RoutePattern::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

impl PublicRoutes {
    /// Builds an allow-list from individual patterns, skipping blanks
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .filter_map(|p| RoutePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// Parses a comma separated pattern list
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Returns true if `path` needs no session
    pub fn is_public(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::new(["/", "/health", "/sign-in(.*)", "/sign-up(.*)", "/api/webhooks(.*)"])
    }
}
