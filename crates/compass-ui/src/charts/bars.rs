//! Recipes-per-cuisine bar chart.

#![allow(clippy::cast_precision_loss)]

use compass_core::{Recipe, cuisine_counts};

use super::ChartKind;
use super::svg::{Anchor, SvgCanvas, placeholder};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const LEFT: f64 = 40.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 60.0;
const BOTTOM: f64 = 60.0;
const BAR_COLOR: &str = "#ff6b6b";
const AXIS_COLOR: &str = "#333333";

pub fn render<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let counts = cuisine_counts(recipes);
    if counts.is_empty() {
        return placeholder(WIDTH, HEIGHT, "No cuisines to chart yet");
    }

    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT, "white");
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let bottom = TOP + plot_h;
    let max_count = counts.iter().map(|c| c.count).max().unwrap_or(1) as f64;
    let slot = plot_w / counts.len() as f64;
    let bar_w = (slot * 0.7).min(120.0);

    canvas.text(
        WIDTH / 2.0,
        TOP / 2.0 + 6.0,
        18.0,
        Anchor::Middle,
        AXIS_COLOR,
        ChartKind::CuisineBars.title(),
    );

    for (i, entry) in counts.iter().enumerate() {
        let centre = (i as f64 + 0.5).mul_add(slot, LEFT);
        let h = entry.count as f64 / max_count * plot_h;
        canvas.rect(centre - bar_w / 2.0, bottom - h, bar_w, h, BAR_COLOR);
        canvas.text(
            centre,
            bottom - h - 6.0,
            12.0,
            Anchor::Middle,
            AXIS_COLOR,
            &entry.count.to_string(),
        );
        canvas.text(centre, bottom + 18.0, 12.0, Anchor::Middle, AXIS_COLOR, &entry.cuisine);
    }

    canvas.line(LEFT, bottom, LEFT + plot_w, bottom, AXIS_COLOR);
    canvas.finish()
}
