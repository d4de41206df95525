use crate::core::{MAX_YEAR, TickWindow, YearTicks, format_year, year_ticks};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SceneContext;

#[must_use]
pub(super) fn select_year_ticks(ctx: &SceneContext<'_>) -> YearTicks {
    let (left_year, right_year) = ctx.visible_range(ctx.config.tick_cull_margin_px);
    let window = TickWindow {
        left_year,
        right_year,
        max_year: MAX_YEAR,
        visible_years: ctx.visible_years(),
        canvas_width: ctx.viewport.width_px(),
        max_ticks: ctx.config.max_ticks,
    };
    year_ticks(window, |year| ctx.year_to_x(year))
}

pub(super) fn append_year_ticks(frame: &mut RenderFrame, ctx: &SceneContext<'_>) {
    let style = ctx.style;
    let center_y = ctx.viewport.center_y();

    for tick in select_year_ticks(ctx) {
        frame.lines.push(LinePrimitive::new(
            tick.x,
            center_y - style.tick_half_length_px,
            tick.x,
            center_y + style.tick_half_length_px,
            style.tick_width,
            style.tick_color,
        ));
        if tick.labeled {
            frame.texts.push(TextPrimitive::new(
                format_year(tick.year),
                tick.x,
                center_y + style.tick_label_offset_px,
                style.tick_label_font_px,
                style.tick_label_color,
                TextHAlign::Center,
            ));
        }
    }
}
