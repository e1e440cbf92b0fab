//! Minimal method and path-pattern router.
//!
//! Routes a method and path to a registered handler:
//!
//! ```text
//! /               -> static
//! /product/:id    -> one captured segment
//! /blog/*slug     -> captures the rest of the path
//! ```
//!
//! The router is transport-agnostic: handlers are any type the caller
//! chooses (typically something producing a response body), and the router
//! only performs the match and parameter capture.

use std::collections::HashMap;

/// HTTP method a route responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern like `/product/:id` or `/blog/*slug`.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(name) = s.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else if let Some(name) = s.strip_prefix('*') {
                    Segment::Wildcard(name.to_string())
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Match `path` against this pattern, capturing named parameters.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        let mut parts = path.split('/').filter(|s| !s.is_empty());

        let mut segments = self.segments.iter();
        loop {
            match segments.next() {
                Some(Segment::Wildcard(name)) => {
                    let rest: Vec<&str> = parts.collect();
                    params.insert(name.clone(), rest.join("/"));
                    return Some(params);
                }
                Some(segment) => {
                    let part = parts.next()?;
                    match segment {
                        Segment::Literal(literal) => {
                            if literal != part {
                                return None;
                            }
                        }
                        Segment::Param(name) => {
                            params.insert(name.clone(), part.to_string());
                        }
                        Segment::Wildcard(_) => unreachable!("handled above"),
                    }
                }
                None => {
                    return if parts.next().is_none() {
                        Some(params)
                    } else {
                        None
                    };
                }
            }
        }
    }
}

#[derive(Debug)]
struct Route<H> {
    method: Method,
    pattern: PathPattern,
    handler: H,
}

/// A successful route lookup.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    /// The registered handler.
    pub handler: &'r H,
    /// Parameters captured from the path.
    pub params: HashMap<String, String>,
}

/// Orders routes by registration; the first match wins.
#[derive(Debug, Default)]
pub struct Router<H> {
    routes: Vec<Route<H>>,
}

impl<H> Router<H> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for `GET` requests matching `pattern`.
    pub fn get(&mut self, pattern: &str, handler: H) {
        self.route(Method::Get, pattern, handler);
    }

    /// Register a handler for `POST` requests matching `pattern`.
    pub fn post(&mut self, pattern: &str, handler: H) {
        self.route(Method::Post, pattern, handler);
    }

    /// Register a handler for an arbitrary method and pattern.
    pub fn route(&mut self, method: Method, pattern: &str, handler: H) {
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler,
        });
    }

    /// Look up the first route matching `method` and `path`.
    pub fn handle(&self, method: Method, path: &str) -> Option<RouteMatch<'_, H>> {
        self.routes
            .iter()
            .filter(|route| route.method == method)
            .find_map(|route| {
                route.pattern.matches(path).map(|params| RouteMatch {
                    handler: &route.handler,
                    params,
                })
            })
    }
}
