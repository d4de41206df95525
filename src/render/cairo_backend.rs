use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also paint into a Cairo context owned by the host
/// (for example a drawing-area callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango canvas backend.
///
/// Offscreen rendering goes through `Renderer::render` into an owned image
/// surface; `resize` replaces that surface, which clears its raster.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> TimelineResult<Self> {
        let surface = create_surface(viewport)?;
        Ok(Self {
            surface,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;

        // Transparent clear so the host background shows through.
        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.set_operator(cairo::Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            self.draw_text(context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = pangocairo::functions::create_layout(context);
        let weight = if text.bold { " Bold" } else { "" };
        let font_description = FontDescription::from_string(&format!(
            "{}{weight} {}px",
            self.font_family, text.font_size_px
        ));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _) = layout.pixel_size();
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        self.surface = create_surface(viewport)?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(viewport: Viewport) -> TimelineResult<ImageSurface> {
    let viewport = viewport.validate()?;
    let width = i32::try_from(viewport.width)
        .map_err(|_| TimelineError::InvalidData("surface width exceeds i32".to_owned()))?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| TimelineError::InvalidData("surface height exceeds i32".to_owned()))?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::Backend(format!("{prefix}: {err}"))
}
