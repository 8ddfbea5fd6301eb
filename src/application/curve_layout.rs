// Curve layout engine - maps a temperature series to renderable geometry
use crate::domain::forecast::ForecastSeries;
use crate::domain::geometry::{CurveLayout, CurvePath, PathSegment, Point, Size};

/// Horizontal spacing the display layer asks for between plotted samples,
/// in drawing-area units.
pub const DEFAULT_POINT_SPACING: f32 = 50.0;

/// Rescale each temperature to [0, 1] against the series' own min/max.
/// An empty or flat series returns an empty vector, which tells the
/// caller to fall back to the flat midline instead of dividing by zero.
pub fn normalized_values(series: &ForecastSeries) -> Vec<f32> {
    let temperatures: Vec<i32> = series.temperatures().collect();
    let (Some(min), Some(max)) = (
        temperatures.iter().copied().min(),
        temperatures.iter().copied().max(),
    ) else {
        return Vec::new();
    };
    if min == max {
        return Vec::new();
    }

    let span = (max - min) as f32;
    temperatures
        .iter()
        .map(|&temperature| (temperature - min) as f32 / span)
        .collect()
}

/// Compute the screen-space point grid for a series in the given area.
/// The grid keeps `min(len - 1, floor(width / spacing))` cells and takes
/// the first `cells + 1` samples; y is inverted so warmer renders higher.
pub fn layout(series: &ForecastSeries, area: Size, desired_spacing: f32) -> CurveLayout {
    let normalized = normalized_values(series);

    if series.is_empty() || (normalized.is_empty() && series.len() > 1) {
        // Nothing to plot: no samples at all, or a flat series whose
        // curve degrades to the midline.
        return CurveLayout {
            points: Vec::new(),
            normalized,
        };
    }

    let cells = (series.len() - 1).min((area.width / desired_spacing) as usize);
    if cells == 0 {
        // Single-sample series, or an area too narrow for one cell: one
        // point pinned to the left edge.
        let y = normalized
            .first()
            .map_or(area.height * 0.5, |value| area.height - value * area.height);
        return CurveLayout {
            points: vec![Point::new(0.0, y)],
            normalized,
        };
    }

    let cell_width = area.width / cells as f32;
    let points = (0..=cells)
        .map(|i| {
            Point::new(
                i as f32 * cell_width,
                area.height - normalized[i] * area.height,
            )
        })
        .collect();

    CurveLayout { points, normalized }
}

/// Interpolate a smooth cubic path through the laid-out points. Fewer
/// than two points yields a flat horizontal line through the vertical
/// midpoint of the area.
///
/// Each consecutive pair becomes one cubic segment whose control points
/// come from the Hermite tangents at its knots, giving a Catmull-Rom
/// equivalent curve with a continuous first derivative everywhere.
pub fn interpolate_curve(points: &[Point], area: Size) -> CurvePath {
    if points.len() < 2 {
        let y = area.height * 0.5;
        return CurvePath {
            start: Point::new(0.0, y),
            segments: vec![PathSegment::Line(Point::new(area.width, y))],
        };
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let current = points[i];
        let next = points[i + 1];
        let (out_dx, out_dy) = tangent_at(points, i);
        let (in_dx, in_dy) = tangent_at(points, i + 1);

        segments.push(PathSegment::Cubic {
            ctrl1: Point::new(current.x + out_dx / 3.0, current.y + out_dy / 3.0),
            ctrl2: Point::new(next.x - in_dx / 3.0, next.y - in_dy / 3.0),
            to: next,
        });
    }

    CurvePath {
        start: points[0],
        segments,
    }
}

/// Halved central difference at interior knots; the endpoints use the
/// halved one-sided difference to their single neighbor.
fn tangent_at(points: &[Point], index: usize) -> (f32, f32) {
    let current = points[index];
    let previous = index.checked_sub(1).map(|i| points[i]);
    let next = points.get(index + 1).copied();

    match (previous, next) {
        (Some(previous), Some(next)) => (
            (next.x - current.x) * 0.5 + (current.x - previous.x) * 0.5,
            (next.y - current.y) * 0.5 + (current.y - previous.y) * 0.5,
        ),
        (None, Some(next)) => ((next.x - current.x) * 0.5, (next.y - current.y) * 0.5),
        (Some(previous), None) => ((current.x - previous.x) * 0.5, (current.y - previous.y) * 0.5),
        (None, None) => (0.0, 0.0),
    }
}
