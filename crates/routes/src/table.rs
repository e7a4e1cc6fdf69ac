//! The control-panel route set and first-match resolution.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::pattern::{HandlerId, ParamValue, RoutePattern, Segment};

/// One binding of a URL pattern to a handler action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub handler: HandlerId,
}

impl Route {
    fn new(segments: impl Into<Vec<Segment>>, handler: HandlerId) -> Self {
        Self { pattern: RoutePattern::new(segments), handler }
    }
}

/// Enumerate the control-panel routes, in registration order.
///
/// Pure function of static configuration. Order matters: resolution picks the
/// first structurally matching pattern, and new routes are appended.
pub fn build_routes() -> Vec<Route> {
    use HandlerId::*;
    use Segment as S;

    vec![
        Route::new([S::lit("producttypes"), S::lit("new")], ProductTypeEdit),
        Route::new([S::lit("producttypes"), S::id("productTypeId")], ProductTypeEdit),
        Route::new([S::lit("products"), S::handle("productTypeHandle")], ProductIndex),
        Route::new(
            [S::lit("products"), S::handle("productTypeHandle"), S::lit("new")],
            ProductEdit,
        ),
        Route::new(
            [
                S::lit("products"),
                S::handle("productTypeHandle"),
                S::lit("new"),
                S::site("siteHandle"),
            ],
            ProductEdit,
        ),
        Route::new(
            [S::lit("products"), S::handle("productTypeHandle"), S::id("productId")],
            ProductEdit,
        ),
        Route::new(
            [
                S::lit("products"),
                S::handle("productTypeHandle"),
                S::id("productId"),
                S::site("siteHandle"),
            ],
            ProductEdit,
        ),
        Route::new([S::lit("licenses"), S::lit("new")], LicenseEdit),
        Route::new([S::lit("licenses"), S::id("licenseId")], LicenseEdit),
    ]
}

/// A resolved request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<&'static str, ParamValue>,
}

/// Serializable view of a resolution, as returned by the admin server.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRoute {
    pub route: String,
    pub handler: String,
    pub params: BTreeMap<&'static str, ParamValue>,
}

/// Immutable route table installed under a plugin prefix.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct RouteTable {
    plugin_handle: String,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Install `build_routes()` under `plugin_handle`.
    pub fn install(plugin_handle: impl Into<String>) -> Self {
        let table = Self { plugin_handle: plugin_handle.into(), routes: build_routes() };
        info!(plugin = %table.plugin_handle, routes = table.routes.len(), "route table installed");
        table
    }

    pub fn plugin_handle(&self) -> &str {
        &self.plugin_handle
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// `(rule, qualified action)` pairs in registration order, as the host's
    /// URL manager would receive them.
    pub fn rules(&self) -> Vec<(String, String)> {
        self.routes
            .iter()
            .map(|r| {
                (
                    format!("{}/{}", self.plugin_handle, r.pattern),
                    r.handler.qualified(&self.plugin_handle),
                )
            })
            .collect()
    }

    /// Strip the plugin prefix from a control-panel path.
    ///
    /// Accepts paths with or without a leading `/` and ignores one trailing `/`.
    fn relative<'p>(&self, path: &'p str) -> Option<&'p str> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        path.strip_prefix(self.plugin_handle.as_str())?.strip_prefix('/')
    }

    /// Resolve a control-panel path (`{plugin}/...`) to the first matching route.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let Some(relative) = self.relative(path) else {
            debug!(path, "path outside plugin prefix");
            return None;
        };
        let found = self.routes.iter().find_map(|route| {
            route.pattern.match_path(relative).map(|params| RouteMatch { route, params })
        });
        if found.is_none() {
            debug!(path, "no route matched");
        }
        found
    }

    /// Every route matching `path`, in registration order.
    pub fn matching(&self, path: &str) -> Vec<&Route> {
        let Some(relative) = self.relative(path) else {
            return Vec::new();
        };
        self.routes.iter().filter(|r| r.pattern.match_path(relative).is_some()).collect()
    }

    /// Resolve and render for transport.
    pub fn resolve_view(&self, path: &str) -> Option<ResolvedRoute> {
        self.resolve(path).map(|m| ResolvedRoute {
            route: m.route.pattern.to_string(),
            handler: m.route.handler.qualified(&self.plugin_handle),
            params: m.params,
        })
    }
}
