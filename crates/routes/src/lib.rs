//! Control-panel routing for the digital products catalog.
//!
//! - `pattern`: typed URL patterns and the handler actions they bind to
//! - `table`: the ordered route set (`build_routes`) and first-match resolution
//! - `urls`: control-panel URL builder shared with the admin panel

pub mod pattern;
pub mod table;
pub mod urls;

pub use pattern::{HandlerId, ParamValue, Placeholder, PlaceholderKind, RoutePattern, Segment};
pub use table::{ResolvedRoute, Route, RouteMatch, RouteTable, build_routes};
pub use urls::CpUrls;
