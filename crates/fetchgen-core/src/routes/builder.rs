//! Route descriptors built from a Swagger document.

use crate::config::RouteOrdering;
use crate::openapi::{PathItem, SwaggerDocument};
use crate::routes::path::parse_path;
use crate::utils::first_letter_upper;

/// Normalized, output-ready description of one (path, method) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Raw path template as written in the document (e.g. "/pet/{petId}")
    pub path: String,
    /// Upper-cased HTTP verb
    pub method: String,
    /// URL template joined with the base path, parameters marked for interpolation
    pub url: String,
    /// Separator-free identifier derived from the path
    pub readable_route: String,
    /// Whether a parameter is located in the body
    pub has_body: bool,
    /// Path parameter names in template order
    pub url_params: Vec<String>,
}

impl RouteDescriptor {
    /// Build the descriptor for `method` under `path`
    pub fn new(base_path: &str, path: &str, method: &str, item: &PathItem) -> Self {
        let parsed = parse_path(base_path, path);
        Self {
            path: path.to_string(),
            method: method.to_uppercase(),
            url: parsed.url,
            readable_route: parsed.readable_route,
            has_body: item.has_body(),
            url_params: parsed.params,
        }
    }

    /// Name of the generated function, e.g. `BlogIdGET`
    pub fn function_name(&self) -> String {
        format!("{}{}", self.readable_route, self.method)
    }

    /// Argument names for the path parameters, e.g. `paramId`
    pub fn param_args(&self) -> Vec<String> {
        self.url_params
            .iter()
            .map(|p| format!("param{}", first_letter_upper(p)))
            .collect()
    }
}

/// Build one descriptor per (path, method) pair of `doc`
pub fn build_routes(doc: &SwaggerDocument, ordering: RouteOrdering) -> Vec<RouteDescriptor> {
    let mut routes: Vec<RouteDescriptor> = doc
        .operations()
        .map(|(path, method, item)| {
            let route = RouteDescriptor::new(&doc.base_path, path, method, item);
            log::debug!(
                "Built route {} {} -> {}",
                route.method,
                route.path,
                route.function_name()
            );
            route
        })
        .collect();

    if ordering == RouteOrdering::Sorted {
        // Stable, so duplicate keys differing only by method case keep document order
        routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    }

    routes
}
