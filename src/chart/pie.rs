//! Donut pie chart with a drawn depth edge, rendered as standalone SVG

use std::f64::consts::PI;

use crate::analytics::CategoryShare;
use crate::models::{EntryType, Money};

/// Slice colors, reused in order when there are more slices
pub const PALETTE: [&str; 8] = [
    "#14b8a6", "#f97316", "#8b5cf6", "#ec4899", "#10b981", "#f59e0b", "#3b82f6", "#ef4444",
];

pub const CENTER: f64 = 200.0;
pub const OUTER_RADIUS: f64 = 120.0;
pub const INNER_RADIUS: f64 = 50.0;
pub const DEPTH: f64 = 15.0;

const CHART_WIDTH: f64 = 400.0;
const CHART_HEIGHT: f64 = 420.0;
const LEGEND_WIDTH: f64 = 260.0;
const LEGEND_ROW: f64 = 24.0;

/// Slices below this share get no percentage label
const LABEL_MIN_PERCENT: f64 = 5.0;

/// One category's slice; angles in degrees, 0 pointing right, clockwise
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub category: String,
    pub value: Money,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

/// SVG path data for a slice
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePaths {
    /// Donut segment
    pub top: String,
    /// Outer-edge band drawn under the top to suggest depth
    pub sides: Vec<String>,
}

fn point(radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    fn is_full_circle(&self) -> bool {
        self.end_angle - self.start_angle >= 360.0 - 1e-9
    }

    pub fn paths(&self) -> SlicePaths {
        if self.is_full_circle() {
            return self.ring_paths();
        }

        let (x1, y1) = point(OUTER_RADIUS, self.start_angle);
        let (x2, y2) = point(OUTER_RADIUS, self.end_angle);
        let (x3, y3) = point(INNER_RADIUS, self.end_angle);
        let (x4, y4) = point(INNER_RADIUS, self.start_angle);
        let large_arc = u8::from(self.end_angle - self.start_angle > 180.0);

        let top = format!(
            "M {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} L {x3:.2} {y3:.2} A {ri} {ri} 0 {large_arc} 0 {x4:.2} {y4:.2} Z",
            r = OUTER_RADIUS,
            ri = INNER_RADIUS,
        );

        let mut sides = Vec::new();
        if self.start_angle < 90.0 || self.end_angle > 90.0 {
            sides.push(format!(
                "M {x1:.2} {y1:.2} L {x1:.2} {y1d:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2d:.2} L {x2:.2} {y2:.2} A {r} {r} 0 {large_arc} 0 {x1:.2} {y1:.2} Z",
                y1d = y1 + DEPTH,
                y2d = y2 + DEPTH,
                r = OUTER_RADIUS,
            ));
        }

        SlicePaths { top, sides }
    }

    /// A lone slice covering the whole ring. An arc whose end point equals
    /// its start point is not drawn, so each circle is split into two
    /// half arcs, and the inner circle winds the other way to cut the hole.
    fn ring_paths(&self) -> SlicePaths {
        let half = self.start_angle + 180.0;
        let (ox1, oy1) = point(OUTER_RADIUS, self.start_angle);
        let (ox2, oy2) = point(OUTER_RADIUS, half);
        let (ix1, iy1) = point(INNER_RADIUS, self.start_angle);
        let (ix2, iy2) = point(INNER_RADIUS, half);

        let top = format!(
            "M {ox1:.2} {oy1:.2} A {r} {r} 0 1 1 {ox2:.2} {oy2:.2} A {r} {r} 0 1 1 {ox1:.2} {oy1:.2} Z \
M {ix1:.2} {iy1:.2} A {ri} {ri} 0 1 0 {ix2:.2} {iy2:.2} A {ri} {ri} 0 1 0 {ix1:.2} {iy1:.2} Z",
            r = OUTER_RADIUS,
            ri = INNER_RADIUS,
        );

        let sides = [(self.start_angle, half), (half, self.end_angle)]
            .into_iter()
            .flat_map(|(start_angle, end_angle)| {
                Slice {
                    start_angle,
                    end_angle,
                    ..self.clone()
                }
                .paths()
                .sides
            })
            .collect();

        SlicePaths { top, sides }
    }

    /// Where the percentage label sits, halfway across the ring
    pub fn label_position(&self) -> (f64, f64) {
        point((OUTER_RADIUS + INNER_RADIUS) / 2.0, self.mid_angle())
    }

    pub fn has_label(&self) -> bool {
        self.percentage > LABEL_MIN_PERCENT
    }
}

/// A category breakdown laid out as slices
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    entry_type: EntryType,
    slices: Vec<Slice>,
}

impl PieChart {
    /// Lay out slices clockwise from the top, in the order given
    ///
    /// Shares with a zero grand total produce no slices.
    pub fn new(shares: &[CategoryShare], entry_type: EntryType) -> Self {
        let total: Money = shares.iter().map(|s| s.value).sum();
        let mut slices = Vec::with_capacity(shares.len());

        if total.is_positive() {
            let mut angle = -90.0;
            for (index, share) in shares.iter().enumerate() {
                let percentage = share.value.cents() as f64 / total.cents() as f64 * 100.0;
                let sweep = percentage / 100.0 * 360.0;
                slices.push(Slice {
                    category: share.category.clone(),
                    value: share.value,
                    percentage,
                    start_angle: angle,
                    end_angle: angle + sweep,
                    color: PALETTE[index % PALETTE.len()],
                });
                angle += sweep;
            }
        }

        Self { entry_type, slices }
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Placeholder shown when there is nothing to draw
    pub fn empty_message(&self) -> String {
        format!("No {} categories for this period", self.entry_type.as_str())
    }

    /// Render the chart and its legend as an SVG document
    pub fn render_svg(&self, currency_symbol: &str) -> String {
        let mut svg = String::new();

        if self.is_empty() {
            svg.push_str(&format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
                w = CHART_WIDTH,
                h = CHART_HEIGHT
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\" fill=\"#6b7280\">{}</text>\n",
                CENTER,
                CENTER,
                escape_xml(&self.empty_message())
            ));
            svg.push_str("</svg>\n");
            return svg;
        }

        let width = CHART_WIDTH + LEGEND_WIDTH;
        let height = CHART_HEIGHT.max(40.0 + LEGEND_ROW * self.slices.len() as f64);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
            w = width,
            h = height
        ));

        svg.push_str("  <defs>\n");
        for (index, slice) in self.slices.iter().enumerate() {
            svg.push_str(&format!(
                "    <linearGradient id=\"gradient-{index}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"{c}\" stop-opacity=\"1\"/>\
<stop offset=\"100%\" stop-color=\"{c}\" stop-opacity=\"0.7\"/></linearGradient>\n",
                c = slice.color
            ));
        }
        svg.push_str("  </defs>\n");

        // Depth bands first so the tops are drawn over them
        let paths: Vec<SlicePaths> = self.slices.iter().map(Slice::paths).collect();
        for (slice, slice_paths) in self.slices.iter().zip(&paths) {
            for side in &slice_paths.sides {
                svg.push_str(&format!(
                    "  <path d=\"{}\" fill=\"{}\" opacity=\"0.5\"/>\n",
                    side, slice.color
                ));
            }
        }

        for (index, (slice, slice_paths)) in self.slices.iter().zip(&paths).enumerate() {
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"url(#gradient-{})\" stroke=\"white\" stroke-width=\"2\" opacity=\"0.95\"/>\n",
                slice_paths.top, index
            ));
            if slice.has_label() {
                let (x, y) = slice.label_position();
                svg.push_str(&format!(
                    "  <text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"12\" font-weight=\"600\" fill=\"white\">{:.0}%</text>\n",
                    slice.percentage
                ));
            }
        }

        for (index, slice) in self.slices.iter().enumerate() {
            let y = 40.0 + LEGEND_ROW * index as f64;
            svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"6\" fill=\"{}\"/>\n",
                CHART_WIDTH + 10.0,
                y - 4.0,
                slice.color
            ));
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\">{} {} ({:.1}%)</text>\n",
                CHART_WIDTH + 24.0,
                y,
                escape_xml(&slice.category),
                escape_xml(&slice.value.format_with_symbol(currency_symbol)),
                slice.percentage
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
