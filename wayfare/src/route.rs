//! A registered route: template, compiled matcher, handler.

use crate::template::{CompiledTemplate, TemplateError};
use std::sync::Arc;
use wayfare_core::{DynRouteHandler, Params, RouteHandler};

/// One entry in the router's route table.
///
/// Owns the declared template, its compiled matcher, and the handler. Routes
/// live in registration order inside a router instance and are never removed;
/// at dispatch time the first route whose matcher accepts the pathname wins,
/// so registration order encodes priority.
pub struct Route {
    template: String,
    compiled: CompiledTemplate,
    handler: Arc<dyn DynRouteHandler>,
}

impl Route {
    /// Compile a template and pair it with a handler.
    pub fn new<H>(template: &str, handler: H) -> Result<Self, TemplateError>
    where
        H: RouteHandler + 'static,
    {
        Ok(Self {
            template: template.to_owned(),
            compiled: CompiledTemplate::compile(template)?,
            handler: Arc::new(handler),
        })
    }

    /// The declared template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Match a pathname against the compiled template.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        self.compiled.match_path(path)
    }

    pub(crate) fn handler(&self) -> Arc<dyn DynRouteHandler> {
        Arc::clone(&self.handler)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
