//! Generation driver: read → decode → build routes → render.

use crate::config::Config;
use crate::emitter::JsModule;
use crate::openapi::SwaggerDocument;
use crate::routes::build_routes;

/// Generate the JavaScript module for the document at `config.input`.
///
/// The whole module is rendered in memory; on error nothing is produced.
pub fn generate(config: &Config) -> crate::Result<String> {
    log::info!("Loading Swagger document from {}", config.input.display());
    let doc = SwaggerDocument::from_file(&config.input)?;
    Ok(render_document(&doc, config))
}

/// Generate the JavaScript module from Swagger JSON text
pub fn render(input: &str, config: &Config) -> crate::Result<String> {
    let doc = SwaggerDocument::parse(input)?;
    Ok(render_document(&doc, config))
}

/// Render an already decoded document
pub fn render_document(doc: &SwaggerDocument, config: &Config) -> String {
    let routes = build_routes(doc, config.ordering);
    log::info!("Generated {} routes", routes.len());
    JsModule::new(&config.helper, &routes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteOrdering;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const USERS: &str = r#"{"basePath":"/api","paths":{"/users/{userId}":{"get":{"parameters":[{"name":"userId","in":"path"}]}}}}"#;

    #[test]
    fn test_render_end_to_end() -> crate::Result<()> {
        let out = render(USERS, &Config::default())?;
        assert_eq!(
            out,
            r#"import { apiFetcher } from "./apiUtil.js";


export const UsersUserIdGET = (paramUserId) => apiFetcher({
  params: [paramUserId],
  method: "GET",
  url: "/api/users/${userId}",
})
"#
        );
        Ok(())
    }

    #[test]
    fn test_render_is_reproducible_when_sorted() -> crate::Result<()> {
        let a = r#"{"paths":{"/b":{"post":{},"get":{}},"/a":{"delete":{}}}}"#;
        let b = r#"{"paths":{"/a":{"delete":{}},"/b":{"get":{},"post":{}}}}"#;
        let config = Config::default();
        assert_eq!(render(a, &config)?, render(b, &config)?);

        let document = config.with_ordering(RouteOrdering::Document);
        assert_ne!(render(a, &document)?, render(b, &document)?);
        Ok(())
    }

    #[test]
    fn test_render_decode_error() {
        let err = render("{\"paths\": 3}", &Config::default()).unwrap_err();
        assert!(matches!(err, Error::SchemaDecode(_)));
        let err = render("not json", &Config::default()).unwrap_err();
        assert!(matches!(err, Error::SchemaDecode(_)));
    }

    #[test]
    fn test_generate_from_file() -> crate::Result<()> {
        let dir = tempdir().map_err(|e| Error::input_read("tempdir", e))?;
        let input = dir.path().join("swagger.json");
        std::fs::write(&input, USERS).map_err(|e| Error::input_read(&input, e))?;

        let out = generate(&Config::new(&input))?;
        assert!(out.contains("export const UsersUserIdGET = (paramUserId) => apiFetcher({"));
        Ok(())
    }

    #[test]
    fn test_generate_missing_file() {
        let dir = tempdir().unwrap();
        let err = generate(&Config::new(dir.path().join("swagger.json"))).unwrap_err();
        assert!(matches!(err, Error::InputRead { .. }));
    }
}
