//! JavaScript rendering of route descriptors.
//!
//! The generated module imports one helper and exports one arrow function
//! per route:
//!
//! ```text
//! import { apiFetcher } from "./apiUtil.js";
//!
//!
//! export const BlogIdPUT = (paramId, body) => apiFetcher({
//!   params: [paramId],
//!   method: "PUT",
//!   url: "/blog/${id}",
//!   body,
//! })
//! ```
//!
//! Identifiers and URLs are written as-is; nothing is escaped.

// Internal imports (std, crate)
use std::fmt;

use crate::config::HelperImport;
use crate::routes::RouteDescriptor;

/// A renderable JavaScript module; use `to_string()` or `{}` to render
pub struct JsModule<'a> {
    helper: &'a HelperImport,
    routes: &'a [RouteDescriptor],
}

impl<'a> JsModule<'a> {
    pub fn new(helper: &'a HelperImport, routes: &'a [RouteDescriptor]) -> Self {
        Self { helper, routes }
    }

    fn write_route(&self, f: &mut fmt::Formatter<'_>, route: &RouteDescriptor) -> fmt::Result {
        let params = route.param_args().join(", ");
        let args = if route.has_body {
            if params.is_empty() {
                "body".to_string()
            } else {
                format!("{params}, body")
            }
        } else {
            params.clone()
        };

        writeln!(f)?;
        writeln!(
            f,
            "export const {} = ({}) => {}({{",
            route.function_name(),
            args,
            self.helper.name
        )?;
        writeln!(f, "  params: [{params}],")?;
        writeln!(f, "  method: \"{}\",", route.method)?;
        writeln!(f, "  url: \"{}\",", route.url)?;
        if route.has_body {
            writeln!(f, "  body,")?;
        }
        writeln!(f, "}})")
    }
}

impl fmt::Display for JsModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "import {{ {} }} from \"{}\";",
            self.helper.name, self.helper.module
        )?;
        writeln!(f)?;
        for route in self.routes {
            self.write_route(f, route)?;
        }
        Ok(())
    }
}
