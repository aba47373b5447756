//! Compiled Component
//!
//! What the template compiler hands over for one component: its render
//! logic and its static builder table. Shared by every mounted instance.

use std::fmt;

use fos_vdom::Node;

use crate::{RenderConfig, RenderLogic, RenderScope, Result, StaticBuilderTable, Template};

/// Render logic given as a closure over the render scope
pub struct FnLogic<F>(pub F);

impl<F> RenderLogic for FnLogic<F>
where
    F: Fn(&mut RenderScope<'_>) -> Result<Node> + Send + Sync,
{
    fn render(&self, scope: &mut RenderScope<'_>) -> Result<Node> {
        (self.0)(scope)
    }
}

/// A compiled component
pub struct CompiledComponent {
    name: String,
    statics: StaticBuilderTable,
    logic: Box<dyn RenderLogic>,
    config: RenderConfig,
}

impl CompiledComponent {
    /// Create from any render logic
    pub fn new(
        name: impl Into<String>,
        statics: StaticBuilderTable,
        logic: impl RenderLogic + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            statics,
            logic: Box::new(logic),
            config: RenderConfig::default(),
        }
    }

    /// Create from a render closure
    pub fn from_fn<F>(name: impl Into<String>, statics: StaticBuilderTable, render: F) -> Self
    where
        F: Fn(&mut RenderScope<'_>) -> Result<Node> + Send + Sync + 'static,
    {
        Self::new(name, statics, FnLogic(render))
    }

    /// Create from a declarative template
    pub fn from_template(
        name: impl Into<String>,
        statics: StaticBuilderTable,
        template: impl Into<Template>,
    ) -> Self {
        Self::new(name, statics, template.into())
    }

    /// Replace the render configuration
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statics(&self) -> &StaticBuilderTable {
        &self.statics
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub(crate) fn logic(&self) -> &dyn RenderLogic {
        self.logic.as_ref()
    }
}

impl fmt::Debug for CompiledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledComponent")
            .field("name", &self.name)
            .field("statics", &self.statics)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
