//! Route definitions.
//!
//! Pure domain layer: no DOM or web_sys in here, so location parsing and
//! the guard predicates are covered by plain unit tests.

use std::fmt::Display;

/// Pages of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Listing grid (entry page).
    #[default]
    Home,
    /// Login form.
    Login,
    /// Listing detail; the id comes from the `id` query parameter.
    Place { id: Option<String> },
    /// Standalone review submission page.
    AddReview { id: Option<String> },
    /// Page not found.
    NotFound,
}

impl AppRoute {
    /// Parses a location (path plus raw query string) into a route.
    pub fn from_location(path: &str, query: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/place" => Self::Place {
                id: query_param(query, "id"),
            },
            "/add-review" => Self::AddReview {
                id: query_param(query, "id"),
            },
            _ => Self::NotFound,
        }
    }

    /// Path (with query where applicable) representing this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Place { id: Some(id) } => format!("/place?id={id}"),
            Self::Place { id: None } => "/place".to_string(),
            Self::AddReview { id: Some(id) } => format!("/add-review?id={id}"),
            Self::AddReview { id: None } => "/add-review".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Whether two routes are the same page, ignoring parameters. Used for
    /// highlighting the active nav link.
    pub fn is_same_page(&self, other: &AppRoute) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Authenticated visitors have no business on this route.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Where an authenticated visitor of the login page lands instead.
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Extracts a query parameter from a raw query string, with or without the
/// leading `?`. Empty values count as absent.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_home() {
        assert_eq!(AppRoute::from_location("/", ""), AppRoute::Home);
    }

    #[test]
    fn login_path_parses() {
        assert_eq!(AppRoute::from_location("/login", ""), AppRoute::Login);
    }

    #[test]
    fn place_path_extracts_the_id() {
        assert_eq!(
            AppRoute::from_location("/place", "?id=2"),
            AppRoute::Place {
                id: Some("2".to_string())
            }
        );
    }

    #[test]
    fn place_path_without_id_keeps_none() {
        assert_eq!(
            AppRoute::from_location("/place", ""),
            AppRoute::Place { id: None }
        );
        assert_eq!(
            AppRoute::from_location("/place", "?id="),
            AppRoute::Place { id: None }
        );
    }

    #[test]
    fn add_review_path_extracts_the_id() {
        assert_eq!(
            AppRoute::from_location("/add-review", "?id=3"),
            AppRoute::AddReview {
                id: Some("3".to_string())
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_location("/nope", ""), AppRoute::NotFound);
    }

    #[test]
    fn to_path_round_trips_through_parsing() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Place {
                id: Some("2".to_string()),
            },
            AppRoute::AddReview { id: None },
        ];
        for route in routes {
            let path = route.to_path();
            let (path, query) = path.split_once('?').unwrap_or((&path, ""));
            assert_eq!(AppRoute::from_location(path, query), route);
        }
    }

    #[test]
    fn query_param_scans_multiple_pairs() {
        assert_eq!(
            query_param("?sort=asc&id=7&page=2", "id").as_deref(),
            Some("7")
        );
        assert!(query_param("?sort=asc&page=2", "id").is_none());
    }

    #[test]
    fn only_login_redirects_when_authenticated() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
        assert!(
            !AppRoute::Place { id: None }.should_redirect_when_authenticated()
        );
        assert!(
            !AppRoute::AddReview { id: None }.should_redirect_when_authenticated()
        );
    }

    #[test]
    fn same_page_ignores_parameters() {
        let a = AppRoute::Place {
            id: Some("1".to_string()),
        };
        let b = AppRoute::Place { id: None };
        assert!(a.is_same_page(&b));
        assert!(!a.is_same_page(&AppRoute::Home));
    }
}
