//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - progression curves: `-` (further curves in a comparison: `*`, `+`, `#`)
//! - target / starting mileage guides: `=` / `.`
//! - milestones: `o`

use crate::report::{Milestone, ProgressionSeries};

const CURVE_GLYPHS: [char; 4] = ['-', '*', '+', '#'];

struct Curve<'a> {
    points: &'a [(f64, f64)],
    glyph: char,
}

/// Horizontal reference line at a fixed y value.
struct Guide {
    y: f64,
    glyph: char,
}

/// Render the mileage progression with target/start guides and milestone markers.
pub fn render_progression_plot(
    series: &ProgressionSeries,
    milestones: &[Milestone],
    width: usize,
    height: usize,
) -> String {
    let points = series.mileage_points();
    let guides = [
        Guide {
            y: series.parameters.target_mileage(),
            glyph: '=',
        },
        Guide {
            y: series.parameters.starting_mileage(),
            glyph: '.',
        },
    ];
    let markers: Vec<(f64, f64)> = milestones.iter().map(|m| (m.week, m.mileage)).collect();

    let mut out = render_plot(
        &format!("{} progression", series.equation_type.display_name()),
        &[Curve {
            points: &points,
            glyph: CURVE_GLYPHS[0],
        }],
        &guides,
        &markers,
        width,
        height,
    );
    out.push_str("Legend: - mileage | = target | . start | o milestone\n");
    out
}

/// Render the rate of change, if the series carries rates.
pub fn render_rate_plot(series: &ProgressionSeries, width: usize, height: usize) -> Option<String> {
    let points = series.rate_points()?;
    Some(render_plot(
        "Rate of change (miles/week)",
        &[Curve {
            points: &points,
            glyph: CURVE_GLYPHS[1],
        }],
        &[],
        &[],
        width,
        height,
    ))
}

/// Overlay several progressions on one grid.
pub fn render_comparison_plot(series: &[ProgressionSeries], width: usize, height: usize) -> String {
    let points: Vec<Vec<(f64, f64)>> = series.iter().map(|s| s.mileage_points()).collect();
    let curves: Vec<Curve<'_>> = points
        .iter()
        .enumerate()
        .map(|(i, p)| Curve {
            points: p,
            glyph: CURVE_GLYPHS[i % CURVE_GLYPHS.len()],
        })
        .collect();

    let mut out = render_plot("Model comparison", &curves, &[], &[], width, height);
    for (i, s) in series.iter().enumerate() {
        out.push_str(&format!(
            "  {} {} (a={:.2}, b={:.2})\n",
            CURVE_GLYPHS[i % CURVE_GLYPHS.len()],
            s.equation_type.display_name(),
            s.parameters.a_parameter(),
            s.parameters.b_parameter()
        ));
    }
    out
}

fn render_plot(
    title: &str,
    curves: &[Curve<'_>],
    guides: &[Guide],
    markers: &[(f64, f64)],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(curves).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(curves, guides).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curves first so guides only fill the gaps.
    for curve in curves {
        draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);
    }
    for guide in guides {
        let row = map_y(guide.y, y_min, y_max, height);
        for cell in grid[row].iter_mut().filter(|c| **c == ' ') {
            *cell = guide.glyph;
        }
    }
    for &(x, y) in markers {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{title}: week=[{x_min:.1}, {x_max:.1}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn x_range(curves: &[Curve<'_>]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in curves.iter().flat_map(|c| c.points.iter()) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(curves: &[Curve<'_>], guides: &[Guide]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in curves.iter().flat_map(|c| c.points.iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    for g in guides {
        min_y = min_y.min(g.y);
        max_y = max_y.max(g.y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &Curve<'_>, x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve.points {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, curve.glyph),
            None => {
                if grid[row][col] == ' ' {
                    grid[row][col] = curve.glyph;
                }
            }
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
