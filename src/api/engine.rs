use tracing::debug;

use crate::core::{Catalog, TimeAxis, ViewTransform, Viewport};
use crate::error::TimelineResult;
use crate::interaction::{GestureMode, InteractionState};
use crate::render::Renderer;

use super::{SceneContext, TimelineConfig, TimelineStyle, TimelineSurface};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the view transform and gesture sessions, draws the
/// canvas through `R` and pushes markers, tooltip and readouts to `S`. All
/// mutation happens on the caller's thread; frame pacing is driven by the
/// host calling [`TimelineEngine::on_frame`] once per display refresh.
pub struct TimelineEngine<R: Renderer, S: TimelineSurface> {
    pub(super) renderer: R,
    pub(super) surface: S,
    pub(super) catalog: Catalog,
    pub(super) config: TimelineConfig,
    pub(super) style: TimelineStyle,
    pub(super) axis: TimeAxis,
    pub(super) transform: ViewTransform,
    pub(super) interaction: InteractionState,
    pub(super) render_pending: bool,
    pub(super) draw_count: u64,
}

impl<R: Renderer, S: TimelineSurface> TimelineEngine<R, S> {
    pub fn new(
        renderer: R,
        surface: S,
        catalog: Catalog,
        config: TimelineConfig,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        catalog.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            periods = catalog.periods().len(),
            events = catalog.events().len(),
            "timeline engine created"
        );

        Ok(Self {
            renderer,
            surface,
            catalog,
            config,
            style: TimelineStyle::default(),
            axis: TimeAxis::new(),
            transform: ViewTransform::identity(),
            interaction: InteractionState::default(),
            render_pending: false,
            draw_count: 0,
        })
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.transform.offset_x
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn axis(&self) -> TimeAxis {
        self.axis
    }

    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        self.style = style.validate()?;
        self.render();
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn visible_years(&self) -> f64 {
        self.axis.visible_years(self.transform.scale)
    }

    #[must_use]
    pub fn year_to_x(&self, year: f64) -> f64 {
        self.axis.year_to_x(year, self.transform, self.config.viewport)
    }

    #[must_use]
    pub fn x_to_year(&self, x: f64) -> f64 {
        self.axis.x_to_year(x, self.transform, self.config.viewport)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.surface)
    }

    pub(super) fn scene_context(&self) -> SceneContext<'_> {
        SceneContext {
            catalog: &self.catalog,
            config: &self.config,
            style: &self.style,
            axis: self.axis,
            transform: self.transform,
            viewport: self.config.viewport,
        }
    }

    /// Paints the current transform into an external cairo context, for
    /// toolkit draw callbacks that own the context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = super::build_render_frame(&self.scene_context());
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
