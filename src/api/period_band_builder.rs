use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SceneContext;

/// Appends translucent period bands, their labels and the main axis line.
///
/// Periods are culled against the canvas widened by the configured margin so
/// bands do not pop in at the edges while panning. Bands are clipped to the
/// canvas; label decisions use the unclipped width.
pub(super) fn append_period_bands(frame: &mut RenderFrame, ctx: &SceneContext<'_>) {
    let style = ctx.style;
    let width = ctx.viewport.width_px();
    let center_y = ctx.viewport.center_y();
    let band_top = center_y - style.period_band_height_px / 2.0;
    let (left_year, right_year) = ctx.visible_range(ctx.config.period_cull_margin_px);

    for period in ctx.catalog.periods() {
        if !period.intersects(left_year, right_year) {
            continue;
        }

        let start_x = ctx.year_to_x(period.start);
        let end_x = ctx.year_to_x(period.end);
        let clipped_start = start_x.max(0.0);
        let clipped_width = end_x.min(width) - clipped_start;
        if !(clipped_width > 0.0) {
            continue;
        }

        frame.rects.push(RectPrimitive::new(
            clipped_start,
            band_top,
            clipped_width,
            style.period_band_height_px,
            Color::from(period.color).with_alpha(style.period_band_alpha),
        ));

        let band_width = end_x - start_x;
        if band_width <= style.period_label_min_width_px {
            continue;
        }
        let label_x = start_x + band_width / 2.0;
        if label_x <= 0.0 || label_x >= width {
            continue;
        }

        let (text, font_px) = if band_width > style.period_label_full_width_px {
            (period.caption(), style.period_label_full_font_px)
        } else {
            (period.icon.clone(), style.period_label_icon_font_px)
        };
        if text.is_empty() {
            continue;
        }
        frame.texts.push(
            TextPrimitive::new(
                text,
                label_x,
                band_top - style.period_label_gap_px,
                font_px,
                style.period_label_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }

    frame.lines.push(LinePrimitive::new(
        0.0,
        center_y,
        width,
        center_y,
        style.axis_line_width,
        style.axis_line_color,
    ));
}
