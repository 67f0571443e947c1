//! fetchgen Core Library
//!
//! This library turns a Swagger v2 JSON document into a JavaScript module
//! with one stub per route, each wrapping a shared HTTP helper.

pub mod config;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod openapi;
pub mod routes;
pub mod utils;

pub use crate::{
    config::{Config, HelperImport, RouteOrdering},
    emitter::JsModule,
    error::{Error, Result},
    generate::{generate, render},
    openapi::SwaggerDocument,
    routes::{build_routes, RouteDescriptor},
};
