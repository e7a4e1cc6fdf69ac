//! URL patterns with typed placeholders.
//!
//! A pattern is a sequence of `/`-separated segments. Literal segments match
//! exactly; placeholder segments match when the path segment satisfies the
//! placeholder's kind. Patterns render back to the host rule syntax
//! (`products/<productTypeHandle:{handle}>/<productId:\d+>`).

use std::collections::BTreeMap;

use serde::Serialize;

use digitalproducts_core::id::parse_digits;
use digitalproducts_core::{Handle, SiteHandle};

/// Constraint a placeholder segment must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderKind {
    /// One or more ASCII digits fitting in a `u64`.
    Integer,
    /// A product-type (or other element group) handle.
    Handle,
    /// A site/locale handle.
    SiteHandle,
}

impl PlaceholderKind {
    /// Check a raw path segment against this kind, producing the typed value.
    pub fn accept(self, raw: &str) -> Option<ParamValue> {
        match self {
            PlaceholderKind::Integer => parse_digits(raw).map(ParamValue::Id),
            PlaceholderKind::Handle if Handle::is_valid(raw) => Some(ParamValue::Handle(raw.to_string())),
            PlaceholderKind::SiteHandle if SiteHandle::is_valid(raw) => {
                Some(ParamValue::Handle(raw.to_string()))
            }
            _ => None,
        }
    }

    fn rule_syntax(self) -> &'static str {
        match self {
            PlaceholderKind::Integer => r"\d+",
            PlaceholderKind::Handle | PlaceholderKind::SiteHandle => "{handle}",
        }
    }
}

/// A named, typed placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub name: &'static str,
    pub kind: PlaceholderKind,
}

/// One segment of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(Placeholder),
}

impl Segment {
    pub const fn lit(text: &'static str) -> Self {
        Segment::Literal(text)
    }

    pub const fn id(name: &'static str) -> Self {
        Segment::Param(Placeholder { name, kind: PlaceholderKind::Integer })
    }

    pub const fn handle(name: &'static str) -> Self {
        Segment::Param(Placeholder { name, kind: PlaceholderKind::Handle })
    }

    pub const fn site(name: &'static str) -> Self {
        Segment::Param(Placeholder { name, kind: PlaceholderKind::SiteHandle })
    }
}

/// Typed value captured by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Id(u64),
    Handle(String),
}

impl ParamValue {
    pub fn as_id(&self) -> Option<u64> {
        match self {
            ParamValue::Id(id) => Some(*id),
            ParamValue::Handle(_) => None,
        }
    }

    pub fn as_handle(&self) -> Option<&str> {
        match self {
            ParamValue::Handle(h) => Some(h),
            ParamValue::Id(_) => None,
        }
    }
}

/// URL template: literal segments plus typed placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn new(segments: impl Into<Vec<Segment>>) -> Self {
        Self { segments: segments.into() }
    }

    /// Match a relative path (no leading/trailing `/`) against this pattern.
    ///
    /// Returns the captured parameters on a structural match.
    pub fn match_path(&self, path: &str) -> Option<BTreeMap<&'static str, ParamValue>> {
        let mut parts = path.split('/');
        let mut params = BTreeMap::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(text) => {
                    if part != *text {
                        return None;
                    }
                }
                Segment::Param(p) => {
                    params.insert(p.name, p.kind.accept(part)?);
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

impl core::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Param(p) => write!(f, "<{}:{}>", p.name, p.kind.rule_syntax())?,
            }
        }
        Ok(())
    }
}

/// Controller action a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandlerId {
    #[serde(rename = "product-types/edit")]
    ProductTypeEdit,
    #[serde(rename = "products/index")]
    ProductIndex,
    #[serde(rename = "products/edit")]
    ProductEdit,
    #[serde(rename = "licenses/edit")]
    LicenseEdit,
}

impl HandlerId {
    pub fn action(&self) -> &'static str {
        match self {
            HandlerId::ProductTypeEdit => "product-types/edit",
            HandlerId::ProductIndex => "products/index",
            HandlerId::ProductEdit => "products/edit",
            HandlerId::LicenseEdit => "licenses/edit",
        }
    }

    /// Fully qualified action id (`{plugin}/{action}`).
    pub fn qualified(&self, plugin_handle: &str) -> String {
        format!("{}/{}", plugin_handle, self.action())
    }
}

impl core::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.action())
    }
}
