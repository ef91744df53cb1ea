use serde::Serialize;

use super::Identity;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of gating a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum RouteAccess {
    Granted,
    /// Not signed in. `from` is where to return after login.
    RedirectToLogin { from: String },
    /// Signed in without any of the required roles.
    RedirectToDashboard,
}

impl RouteAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, RouteAccess::Granted)
    }

    /// Target of the redirect, if any.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            RouteAccess::Granted => None,
            RouteAccess::RedirectToLogin { .. } => Some(LOGIN_PATH),
            RouteAccess::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// Gate `path`. An empty `required_roles` only requires being signed in;
/// otherwise any one of the roles grants access.
pub fn guard_route(
    identity: Option<&Identity>,
    path: &str,
    required_roles: &[&str],
) -> RouteAccess {
    let Some(identity) = identity else {
        return RouteAccess::RedirectToLogin {
            from: path.to_string(),
        };
    };

    if !required_roles.is_empty() && !required_roles.iter().any(|r| identity.has_role(r)) {
        return RouteAccess::RedirectToDashboard;
    }

    RouteAccess::Granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ROLE_ADMIN;

    #[test]
    fn test_anonymous_goes_to_login() {
        let access = guard_route(None, "/dashboard/admin", &[ROLE_ADMIN]);
        assert_eq!(
            access,
            RouteAccess::RedirectToLogin {
                from: "/dashboard/admin".to_string()
            }
        );
        assert_eq!(access.redirect_path(), Some("/login"));
    }

    #[test]
    fn test_missing_role_goes_to_dashboard() {
        let user = Identity::from_claim("7", "ROLE_USER");
        let access = guard_route(Some(&user), "/dashboard/admin", &[ROLE_ADMIN]);
        assert_eq!(access, RouteAccess::RedirectToDashboard);
    }

    #[test]
    fn test_granted() {
        let admin = Identity::from_claim("1", "ROLE_USER ROLE_ADMIN");
        assert!(guard_route(Some(&admin), "/dashboard/admin", &[ROLE_ADMIN]).is_granted());

        let user = Identity::from_claim("7", "");
        assert!(guard_route(Some(&user), "/dashboard", &[]).is_granted());
    }
}
