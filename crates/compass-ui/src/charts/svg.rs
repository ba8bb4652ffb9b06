//! Minimal SVG document builder shared by the chart renderers.

use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Accumulates SVG elements on a fixed-size canvas.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    /// Start a canvas filled with `background`.
    pub fn new(width: f64, height: f64, background: &str) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.rect(0.0, 0.0, width, height, background);
        canvas
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{}"/>"#,
            encode_double_quoted_attribute(fill)
        ));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.body.push_str(&format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{}" stroke-width="1"/>"#,
            encode_double_quoted_attribute(stroke)
        ));
    }

    /// Draw `content` with its baseline at `y`.
    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, fill: &str, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-size="{size:.1}" text-anchor="{}" fill="{}">{}</text>"#,
            anchor.as_str(),
            encode_double_quoted_attribute(fill),
            encode_text(content)
        ));
    }

    /// Draw text rotated 90° counter-clockwise around its anchor point.
    pub fn vertical_text(&mut self, x: f64, y: f64, size: f64, fill: &str, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-size="{size:.1}" text-anchor="middle" fill="{}" transform="rotate(-90 {x:.1} {y:.1})">{}</text>"#,
            encode_double_quoted_attribute(fill),
            encode_text(content)
        ));
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="Helvetica, Arial, sans-serif">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// An empty canvas carrying a centred message.
pub fn placeholder(width: f64, height: f64, message: &str) -> String {
    let mut canvas = SvgCanvas::new(width, height, "white");
    canvas.body.push_str(&format!(
        r##"<text class="placeholder" x="{x:.1}" y="{y:.1}" font-size="20.0" text-anchor="middle" fill="#999999">{}</text>"##,
        encode_text(message),
        x = width / 2.0,
        y = height / 2.0,
    ));
    canvas.finish()
}
