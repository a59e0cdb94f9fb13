//! Server-side SVG charts.
//!
//! Each chart follows the same lifecycle: build it from a config, axis
//! labels and data, `render` it to an SVG string, then `update` it with a
//! different dataset and render again.

pub mod axis;
pub mod bar;
pub mod config;
pub mod format;
pub mod heatmap;
pub mod scale;
pub mod scatter;

pub use bar::BarChart;
pub use config::{ChartColors, ChartConfig, Margin};
pub use heatmap::HeatMap;
pub use scatter::ScatterPlot;

use format::coord;

/// Opens the root `<svg>` and the translated plot group.
fn open_svg(config: &ChartConfig, class: &str, style: &str) -> String {
    let width = coord(config.outer_width());
    let height = coord(config.outer_height());
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart {class}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img">"#,
            "<style>{style}</style>",
            r#"<g transform="translate({left},{top})">"#,
        ),
        class = class,
        width = width,
        height = height,
        style = style,
        left = coord(config.margin.left),
        top = coord(config.margin.top),
    )
}

fn close_svg(mut svg: String) -> String {
    svg.push_str("</g></svg>");
    svg
}

fn empty_svg(config: &ChartConfig, class: &str) -> String {
    let mut svg = open_svg(config, class, "");
    svg.push_str(&format!(
        r#"<text class="empty" x="{}" y="{}" text-anchor="middle">No data</text>"#,
        coord(config.width / 2.0),
        coord(config.height / 2.0),
    ));
    close_svg(svg)
}
