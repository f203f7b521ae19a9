use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2,
};

use crate::chart::options::ChartConfig;
use crate::chart::series::{pie_slices, slice_label, PieSlice};
use crate::color::{shade, Palette};
use crate::data::model::{Dataset, Value};

const LEGEND_WIDTH: f32 = 160.0;
const LABEL_MARGIN: f32 = 48.0;
const ARC_STEP: f64 = 0.05;

// ---------------------------------------------------------------------------
// Geometry helpers (angles clockwise from 12 o'clock, screen y down)
// ---------------------------------------------------------------------------

fn direction(angle: f64) -> Vec2 {
    vec2(angle.sin() as f32, -angle.cos() as f32)
}

/// Inverse of [`direction`], normalised to `[0, TAU)`.
fn angle_of(offset: Vec2) -> f64 {
    let a = (offset.x as f64).atan2(-offset.y as f64);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Split a slice into convex sectors of at most a quarter turn each.
fn sector_polygons(center: Pos2, radius: f32, slice: &PieSlice) -> Vec<Vec<Pos2>> {
    let chunks = (slice.sweep / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
    let chunk_sweep = slice.sweep / chunks as f64;

    (0..chunks)
        .map(|c| {
            let start = slice.start_angle + c as f64 * chunk_sweep;
            let steps = (chunk_sweep / ARC_STEP).ceil().max(1.0) as usize;
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for s in 0..=steps {
                let a = start + chunk_sweep * s as f64 / steps as f64;
                points.push(center + direction(a) * radius);
            }
            points
        })
        .collect()
}

/// Index of the slice under `pos`, if inside the pie.
fn slice_at(slices: &[PieSlice], center: Pos2, radius: f32, pos: Pos2) -> Option<usize> {
    let offset = pos - center;
    if offset.length() > radius {
        return None;
    }
    let angle = angle_of(offset);
    slices.iter().position(|s| s.contains_angle(angle))
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Paint a pie of the positive `value`s, one slice per record.
pub fn pie_chart(ui: &mut Ui, dataset: &Dataset, config: &ChartConfig, palette: &Palette) {
    let slices = pie_slices(dataset);
    if slices.is_empty() {
        ui.label("No positive numeric 'value' entries to chart.");
        return;
    }

    let width = config.width.unwrap_or_else(|| ui.available_width());
    let (rect, response) = ui.allocate_exact_size(vec2(width, config.height), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();

    let legend_width = if config.show_legend {
        LEGEND_WIDTH.min(rect.width() * 0.3)
    } else {
        0.0
    };
    let pie_area = Rect::from_min_max(rect.min, pos2(rect.max.x - legend_width, rect.max.y));
    let center = pie_area.center();
    let fit = pie_area.width().min(pie_area.height()) / 2.0 - LABEL_MARGIN;
    let radius = (config.height / 3.0).min(fit).max(10.0);

    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(&slices, center, radius, pos));

    for (i, slice) in slices.iter().enumerate() {
        let base = palette.color_at(i);
        let fill = if hovered == Some(i) { shade(base, 0.12) } else { base };
        for polygon in sector_polygons(center, radius, slice) {
            painter.add(Shape::convex_polygon(polygon, fill, Stroke::NONE));
        }
    }

    // Separators and outside labels on top of all fills.
    for (i, slice) in slices.iter().enumerate() {
        if slices.len() > 1 {
            painter.line_segment(
                [center, center + direction(slice.start_angle) * radius],
                Stroke::new(1.5, Color32::WHITE),
            );
        }

        let dir = direction(slice.mid_angle());
        let edge = center + dir * radius;
        let elbow = center + dir * (radius + 14.0);
        painter.line_segment([edge, elbow], Stroke::new(1.0, palette.color_at(i)));

        let (anchor, nudge) = if dir.x >= 0.0 {
            (Align2::LEFT_CENTER, 4.0)
        } else {
            (Align2::RIGHT_CENTER, -4.0)
        };
        painter.text(
            elbow + vec2(nudge, 0.0),
            anchor,
            slice_label(&slice.label, slice.fraction),
            FontId::proportional(12.0),
            text_color,
        );
    }

    if config.show_legend {
        let legend_rect = Rect::from_min_max(pos2(pie_area.max.x, rect.min.y), rect.max);
        draw_legend(&painter, legend_rect, &slices, palette, text_color);
    }

    if config.show_tooltip {
        if let Some(slice) = hovered.map(|i| &slices[i]) {
            response.on_hover_text_at_pointer(format!(
                "{}: {}",
                slice.label,
                Value::Number(slice.value)
            ));
        }
    }
}

fn draw_legend(
    painter: &Painter,
    area: Rect,
    slices: &[PieSlice],
    palette: &Palette,
    text_color: Color32,
) {
    let row_height = 18.0;
    let total = row_height * slices.len() as f32;
    let mut y = area.center().y - total / 2.0;
    for (i, slice) in slices.iter().enumerate() {
        let swatch = Rect::from_min_size(pos2(area.min.x + 8.0, y + 4.0), vec2(10.0, 10.0));
        painter.rect_filled(swatch, 2.0, palette.color_at(i));
        painter.text(
            pos2(swatch.max.x + 6.0, swatch.center().y),
            Align2::LEFT_CENTER,
            &slice.label,
            FontId::proportional(12.0),
            text_color,
        );
        y += row_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    #[test]
    fn angles_run_clockwise_from_top() {
        assert!((angle_of(vec2(0.0, -1.0)) - 0.0).abs() < 1e-6);
        assert!((angle_of(vec2(1.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_of(vec2(-1.0, 0.0)) - 3.0 * FRAC_PI_2).abs() < 1e-6);
        let d = direction(FRAC_PI_2);
        assert!((d.x - 1.0).abs() < 1e-6 && d.y.abs() < 1e-6);
    }

    #[test]
    fn large_slices_split_into_convex_sectors() {
        let ds = parse_csv("name,value\nbig,3\nsmall,1").unwrap();
        let slices = pie_slices(&ds);
        let center = pos2(100.0, 100.0);
        assert_eq!(sector_polygons(center, 50.0, &slices[0]).len(), 3);
        assert_eq!(sector_polygons(center, 50.0, &slices[1]).len(), 1);
    }

    #[test]
    fn hit_testing_finds_slice() {
        let ds = parse_csv("name,value\nA,1\nB,1").unwrap();
        let slices = pie_slices(&ds);
        let center = pos2(0.0, 0.0);
        // A covers the right half, B the left half.
        assert_eq!(slice_at(&slices, center, 10.0, pos2(5.0, 0.0)), Some(0));
        assert_eq!(slice_at(&slices, center, 10.0, pos2(-5.0, 0.0)), Some(1));
        assert_eq!(slice_at(&slices, center, 10.0, pos2(50.0, 0.0)), None);
    }
}
