use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op canvas used by tests and headless hosts.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect exactly what would have been drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
    pub last_resize: Option<Viewport>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_line_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.lines.len())
    }

    #[must_use]
    pub fn last_text_count(&self) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.texts.len())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        viewport.validate()?;
        self.last_resize = Some(viewport);
        self.last_frame = None;
        Ok(())
    }
}
