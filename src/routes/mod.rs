//! Named routes of the dashboard and path resolution. Admin screens live under
//! `/dashboard`; `/auth` forwards to the login form and anything unknown
//! forwards to the dashboard home.

use serde::Serialize;

pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Query parameter carrying the originally requested path to the login form.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    Welcome,
    Pengurus,
    Pendaftaran,
    Dashboard,
    Settings,
    Preferences,
    Users,
    Roles,
    Permissions,
    Menus,
    News,
    Activities,
    Benefits,
    Departments,
    Prokers,
    Faqs,
    Enumerations,
    Registrations,
    Login,
    NotFound,
}

const ROUTES: &[(RouteName, &str)] = &[
    (RouteName::Welcome, "/"),
    (RouteName::Pengurus, "/pengurus"),
    (RouteName::Pendaftaran, "/pendaftaran"),
    (RouteName::Dashboard, DASHBOARD_PATH),
    (RouteName::Settings, "/dashboard/settings"),
    (RouteName::Preferences, "/dashboard/preferences"),
    (RouteName::Users, "/dashboard/users"),
    (RouteName::Roles, "/dashboard/roles"),
    (RouteName::Permissions, "/dashboard/permissions"),
    (RouteName::Menus, "/dashboard/menus"),
    (RouteName::News, "/dashboard/news"),
    (RouteName::Activities, "/dashboard/activities"),
    (RouteName::Benefits, "/dashboard/benefits"),
    (RouteName::Departments, "/dashboard/departments"),
    (RouteName::Prokers, "/dashboard/prokers"),
    (RouteName::Faqs, "/dashboard/faqs"),
    (RouteName::Enumerations, "/dashboard/enumerations"),
    (RouteName::Registrations, "/dashboard/registrations"),
    (RouteName::Login, LOGIN_PATH),
    (RouteName::NotFound, "/404"),
];

const REDIRECTS: &[(&str, &str)] = &[("/auth", LOGIN_PATH)];
const MAX_REDIRECTS: usize = 4;

impl RouteName {
    #[must_use]
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|(name, _)| *name == self)
            .map_or("/", |(_, path)| path)
    }
}

/// A navigation target after resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteTarget {
    /// Requested path including query and fragment.
    pub full_path: String,
    /// Normalized path used for matching.
    pub path: String,
    pub name: Option<RouteName>,
}

impl RouteTarget {
    /// Target for a named route.
    #[must_use]
    pub fn named(name: RouteName) -> Self {
        Self {
            full_path: name.path().to_string(),
            path: name.path().to_string(),
            name: Some(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Route(RouteTarget),
    Redirect(String),
}

/// Normalizes a requested path: drops query and fragment, ensures a leading
/// slash and strips trailing slashes.
#[must_use]
pub fn normalize_path(full_path: &str) -> String {
    let path = full_path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Resolves a requested path against the route table.
#[must_use]
pub fn resolve(full_path: &str) -> Resolution {
    let path = normalize_path(full_path);

    if let Some((_, to)) = REDIRECTS.iter().find(|(from, _)| *from == path) {
        return Resolution::Redirect((*to).to_string());
    }

    match ROUTES.iter().find(|(_, route)| *route == path) {
        Some((name, _)) => Resolution::Route(RouteTarget {
            full_path: full_path.trim().to_string(),
            path,
            name: Some(*name),
        }),
        None => Resolution::Redirect(DASHBOARD_PATH.to_string()),
    }
}

/// Resolves `full_path` and follows redirects to the route that renders.
#[must_use]
pub fn follow(full_path: &str) -> RouteTarget {
    let mut current = full_path.to_string();
    for _ in 0..MAX_REDIRECTS {
        match resolve(&current) {
            Resolution::Route(target) => return target,
            Resolution::Redirect(to) => current = to,
        }
    }
    RouteTarget::named(RouteName::Dashboard)
}

/// True for `/dashboard` and anything below it.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Login location carrying `return_path` as the redirect parameter.
#[must_use]
pub fn login_location(return_path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(return_path.as_bytes()).collect();
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_strips_query_fragment_and_trailing_slash() {
        assert_eq!(normalize_path("/dashboard/users/?page=2#top"), "/dashboard/users");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("pengurus"), "/pengurus");
    }

    #[test]
    fn resolve_matches_named_routes_and_keeps_full_path() {
        let Resolution::Route(target) = resolve("/dashboard/news?page=3") else {
            panic!("expected a route");
        };
        assert_eq!(target.name, Some(RouteName::News));
        assert_eq!(target.path, "/dashboard/news");
        assert_eq!(target.full_path, "/dashboard/news?page=3");
    }

    #[test]
    fn resolve_redirects_auth_and_unknown_paths() {
        assert_eq!(resolve("/auth"), Resolution::Redirect(LOGIN_PATH.to_string()));
        assert_eq!(
            resolve("/no/such/page"),
            Resolution::Redirect(DASHBOARD_PATH.to_string())
        );
    }

    #[test]
    fn follow_lands_on_the_redirect_target() {
        assert_eq!(follow("/auth"), RouteTarget::named(RouteName::Login));
        assert_eq!(follow("/nowhere"), RouteTarget::named(RouteName::Dashboard));
        assert_eq!(follow("/pengurus").name, Some(RouteName::Pengurus));
    }

    #[test]
    fn protected_prefix_requires_segment_boundary() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/users"));
        assert!(!is_protected("/dashboards"));
        assert!(!is_protected("/auth/login"));
        assert!(!is_protected("/"));
    }

    #[test]
    fn every_route_path_round_trips_through_resolve() {
        for (name, path) in ROUTES {
            assert_eq!(name.path(), *path);
            assert_eq!(resolve(path), Resolution::Route(RouteTarget::named(*name)));
        }
    }

    #[test]
    fn login_location_encodes_return_path() {
        assert_eq!(
            login_location("/dashboard/users?page=2"),
            "/auth/login?redirect=%2Fdashboard%2Fusers%3Fpage%3D2"
        );
    }
}
