//! The rendering pipeline: scope the properties, load the template, substitute.

mod settings;

use std::path::Path;
use std::sync::Arc;

use crate::logging::{default_logger, Logger};
use crate::properties::{flatten, Extraction, Prefix, PropertySet};
use crate::template::{Markers, Substitutor, TemplateLoader};
use crate::Error;

pub use settings::RenderSettings;

/// Output of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The template with its placeholders substituted.
    pub text: String,
    /// Properties outside the configured scope, untouched by the render.
    pub remaining: PropertySet,
}

/// Renders templates with properties according to [`RenderSettings`].
///
/// ## Example
///
/// ```no_run
/// use dragon_render::{Config, RenderSettings, Renderer};
///
/// let settings = RenderSettings::from_config(
///     Config::builder().with_file("config/render.toml", true),
/// )?;
/// let properties = Config::builder()
///     .with_file("config/notification.properties", true)
///     .build()?;
///
/// let renderer = Renderer::builder().with_settings(settings).build()?;
/// let rendered = renderer.render_configured(properties)?;
/// println!("{}", rendered.text);
/// # Ok::<(), dragon_render::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    settings: RenderSettings,
    scope: Option<Prefix>,
    loader: TemplateLoader,
    substitutor: Substitutor,
}

impl Renderer {
    /// Creates a new builder for constructing a `Renderer`.
    pub fn builder() -> RendererBuilder {
        RendererBuilder {
            settings: RenderSettings::default(),
            logger: default_logger(),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Substitutes `properties` into `template`.
    ///
    /// With a scope configured, only the properties under it take part,
    /// flattened to their last key segment; the rest come back in
    /// [`Rendered::remaining`]. Without one, every property is used.
    pub fn render(&self, template: &str, properties: PropertySet) -> Rendered {
        let Extraction { matched, remaining } = match &self.scope {
            Some(scope) => flatten(scope, properties),
            None => Extraction {
                matched: properties,
                remaining: PropertySet::new(),
            },
        };

        Rendered {
            text: self.substitutor.substitute(template, &matched),
            remaining,
        }
    }

    /// Loads the template at `path` and renders it.
    ///
    /// A template that cannot be read is an error here, never an empty render.
    pub fn render_file(&self, path: impl AsRef<Path>, properties: PropertySet) -> Result<Rendered, Error> {
        let template = self.loader.load(path)?;
        Ok(self.render(&template, properties))
    }

    /// Renders the template named by [`RenderSettings::template`].
    pub fn render_configured(&self, properties: PropertySet) -> Result<Rendered, Error> {
        let path = self.settings.template.as_ref().ok_or(Error::MissingTemplate)?;
        self.render_file(path, properties)
    }
}

/// Builder for constructing a [`Renderer`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct RendererBuilder {
    settings: RenderSettings,
    logger: Arc<dyn Logger>,
}

impl RendererBuilder {
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Routes the renderer's diagnostics to `logger` instead of the `log` crate.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Builds the `Renderer`.
    ///
    /// Returns an error if a marker or the scope is empty.
    pub fn build(self) -> Result<Renderer, Error> {
        let markers = Markers::new(&self.settings.start_marker, &self.settings.end_marker)?;
        let scope = self.settings.scope.as_deref().map(Prefix::new).transpose()?;

        Ok(Renderer {
            scope,
            loader: TemplateLoader::new(self.logger.clone()),
            substitutor: Substitutor::new(markers).with_logger(self.logger),
            settings: self.settings,
        })
    }
}
