//! Route table: path -> admin flag, consumed by the route guard

/// Fallback path the guard redirects to when access is denied.
pub const GUARD_FALLBACK_PATH: &str = "/books";

/// A navigable route and whether it is restricted to admin users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub requires_admin: bool,
}

/// Static route table, mirroring the application's navigation structure.
/// Only `/add-book` and `/reports` carry the admin flag.
pub const ROUTE_TABLE: &[RouteRule] = &[
    RouteRule { path: "/", requires_admin: false },
    RouteRule { path: "/books", requires_admin: false },
    RouteRule { path: "/add-book", requires_admin: true },
    RouteRule { path: "/login", requires_admin: false },
    RouteRule { path: "/register", requires_admin: false },
    RouteRule { path: "/user", requires_admin: false },
    RouteRule { path: "/reports", requires_admin: true },
];

/// Look up a route rule by exact path. Unknown paths have no rule and are
/// never gated.
pub fn find_rule(path: &str) -> Option<&'static RouteRule> {
    ROUTE_TABLE.iter().find(|rule| rule.path == path)
}
