//! Address routing
//!
//! Two pages exist: the directory at `/` and a tool detail page at
//! `/tool/{id}`. Addresses may come from a hash router (`#/tool/x`) or a
//! plain path; both forms are accepted.

use std::fmt;

use crate::debug_log;

/// Path prefix of the detail page
pub const TOOL_PREFIX: &str = "/tool/";

/// A page in the directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// The searchable listing
    #[default]
    Directory,
    /// Detail page for a tool id
    Tool(String),
}

impl Route {
    /// Parse an address, `None` when it names no page
    pub fn parse(address: &str) -> Option<Self> {
        let path = address.strip_prefix('#').unwrap_or(address);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };

        if path.is_empty() || path == "/" {
            return Some(Route::Directory);
        }

        match path.strip_prefix(TOOL_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Route::Tool(id.to_string())),
            _ => None,
        }
    }

    /// Parse an address; anything unrecognized redirects to the directory
    pub fn resolve(address: &str) -> Self {
        Self::parse(address).unwrap_or_else(|| {
            debug_log!("Unknown route '{}', redirecting to directory", address);
            Route::Directory
        })
    }

    /// Route to a tool's detail page
    pub fn tool(id: impl Into<String>) -> Self {
        Route::Tool(id.into())
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Directory => "/".to_string(),
            Route::Tool(id) => format!("{}{}", TOOL_PREFIX, id),
        }
    }

    pub fn tool_id(&self) -> Option<&str> {
        match self {
            Route::Tool(id) => Some(id),
            Route::Directory => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
