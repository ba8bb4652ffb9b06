//! Prep-time histogram.

#![allow(clippy::cast_precision_loss)]

use compass_core::{DEFAULT_HISTOGRAM_BINS, PrepTimeHistogram, Recipe};

use super::ChartKind;
use super::svg::{Anchor, SvgCanvas, placeholder};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const LEFT: f64 = 60.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 60.0;
const BAR_COLOR: &str = "#00f2ff";
const AXIS_COLOR: &str = "#333333";

/// Format a bin edge without a trailing `.0`.
fn edge_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Tick spacing giving at most about five labels on the count axis.
const fn tick_step(max_count: usize) -> usize {
    if max_count <= 5 { 1 } else { max_count.div_ceil(5) }
}

pub fn render<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let hist = PrepTimeHistogram::from_recipes(recipes, DEFAULT_HISTOGRAM_BINS);
    if hist.is_empty() {
        return placeholder(WIDTH, HEIGHT, "No recipes to chart yet");
    }

    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT, "white");
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let bottom = TOP + plot_h;
    let max_count = hist.max_count().max(1);
    let step = tick_step(max_count);
    let y_max = max_count.div_ceil(step) * step;
    let y_of = |count: usize| (count as f64 / y_max as f64).mul_add(-plot_h, bottom);

    canvas.text(
        WIDTH / 2.0,
        TOP / 2.0 + 6.0,
        18.0,
        Anchor::Middle,
        AXIS_COLOR,
        ChartKind::PrepTimeHistogram.title(),
    );

    // Count axis with light grid lines.
    for tick in (0..=y_max).step_by(step) {
        let y = y_of(tick);
        canvas.line(LEFT, y, LEFT + plot_w, y, "#e6e6e6");
        canvas.text(LEFT - 8.0, y + 4.0, 12.0, Anchor::End, AXIS_COLOR, &tick.to_string());
    }
    canvas.vertical_text(18.0, TOP + plot_h / 2.0, 13.0, AXIS_COLOR, "Frequency");

    let bins = hist.bins();
    let bar_w = plot_w / bins.len() as f64;
    for (i, bin) in bins.iter().enumerate() {
        let x = (i as f64).mul_add(bar_w, LEFT);
        if bin.count > 0 {
            let top = y_of(bin.count);
            canvas.rect(x + 1.0, top, bar_w - 2.0, bottom - top, BAR_COLOR);
        }
        canvas.text(x, bottom + 18.0, 11.0, Anchor::Middle, AXIS_COLOR, &edge_label(bin.start));
    }
    if let Some(last) = bins.last() {
        canvas.text(
            LEFT + plot_w,
            bottom + 18.0,
            11.0,
            Anchor::Middle,
            AXIS_COLOR,
            &edge_label(last.end),
        );
    }

    canvas.line(LEFT, bottom, LEFT + plot_w, bottom, AXIS_COLOR);
    canvas.line(LEFT, TOP, LEFT, bottom, AXIS_COLOR);
    canvas.text(
        LEFT + plot_w / 2.0,
        HEIGHT - 14.0,
        13.0,
        Anchor::Middle,
        AXIS_COLOR,
        "Prep Time (mins)",
    );
    canvas.finish()
}
