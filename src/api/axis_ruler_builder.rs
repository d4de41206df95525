use crate::core::ruler_interval;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SceneContext;

/// Appends the floating scale legend in the lower-left corner: a backing box,
/// a bar one ruler interval long with end caps, and the interval caption.
pub(super) fn append_scale_ruler(frame: &mut RenderFrame, ctx: &SceneContext<'_>) {
    let style = ctx.style;
    let center_y = ctx.viewport.center_y();
    let ruler = ruler_interval(ctx.visible_years());
    let ruler_width = ctx
        .axis
        .span_to_px(ruler.interval_years, ctx.transform.scale, ctx.viewport);
    if !ruler_width.is_finite() {
        return;
    }

    frame.rects.push(RectPrimitive::new(
        style.ruler_box_left_px,
        center_y + style.ruler_box_top_offset_px,
        ruler_width + style.ruler_box_extra_width_px,
        style.ruler_box_height_px,
        style.ruler_background,
    ));

    let left = style.ruler_line_left_px;
    let right = left + ruler_width;
    let line_y = center_y + style.ruler_line_offset_px;
    let cap_top = line_y - style.ruler_cap_half_height_px;
    let cap_bottom = line_y + style.ruler_cap_half_height_px;

    for (x1, y1, x2, y2) in [
        (left, line_y, right, line_y),
        (left, cap_top, left, cap_bottom),
        (right, cap_top, right, cap_bottom),
    ] {
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            style.ruler_line_width,
            style.ruler_color,
        ));
    }

    frame.texts.push(
        TextPrimitive::new(
            ruler.label,
            left + ruler_width / 2.0,
            center_y + style.ruler_text_offset_px,
            style.ruler_font_px,
            style.ruler_color,
            TextHAlign::Center,
        )
        .bold(),
    );
}
