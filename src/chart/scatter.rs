use crate::chart::axis::{render_titles, Axis, Orient};
use crate::chart::config::ChartConfig;
use crate::chart::format::{coord, escape, format_value, tooltip_attr};
use crate::chart::scale::{extent_with_zero, LinearScale};
use crate::chart::{close_svg, empty_svg, open_svg};
use crate::models::{AxisLabels, ScatterPoint};
use tracing::debug;

const POINT_RADIUS: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct ScatterPlot {
    config: ChartConfig,
    labels: AxisLabels,
    data: Vec<ScatterPoint>,
}

impl ScatterPlot {
    pub fn new(config: ChartConfig, labels: AxisLabels, data: Vec<ScatterPoint>) -> Self {
        Self {
            config,
            labels,
            data,
        }
    }

    pub fn update(&mut self, data: Vec<ScatterPoint>, labels: Option<AxisLabels>) {
        self.data = data;
        if let Some(labels) = labels {
            self.labels = labels;
        }
    }

    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    pub fn render(&self) -> String {
        if self.data.is_empty() {
            return empty_svg(&self.config, "scatter-plot");
        }

        let (width, height) = (self.config.width, self.config.height);
        let colors = &self.config.colors;

        let x = LinearScale::new(
            extent_with_zero(self.data.iter().map(|p| p.x)),
            (0.0, width),
        );
        let y = LinearScale::new(
            extent_with_zero(self.data.iter().map(|p| p.y)),
            (height, 0.0),
        );
        debug!(
            points = self.data.len(),
            x = ?x.domain(),
            y = ?y.domain(),
            "rendering scatter plot"
        );

        let style = format!(".point:hover{{fill:{}}}", colors.highlight);
        let mut svg = open_svg(&self.config, "scatter-plot", &style);
        svg.push_str(
            &Axis::linear(Orient::Bottom, &x, (0.0, width)).render("x-axis", (0.0, height)),
        );
        svg.push_str(&Axis::linear(Orient::Left, &y, (height, 0.0)).render("y-axis", (0.0, 0.0)));

        for point in &self.data {
            let lines = vec![
                format!("{}: {}", self.labels.x, format_value(point.x)),
                format!("{}: {}", self.labels.y, format_value(point.y)),
            ];
            svg.push_str(&format!(
                r#"<circle class="point" cx="{}" cy="{}" r="{POINT_RADIUS}" fill="{}" data-tooltip="{}"><title>{}</title></circle>"#,
                coord(x.scale(point.x)),
                coord(y.scale(point.y)),
                escape(&colors.point),
                tooltip_attr(&lines),
                escape(&lines.join("\n")),
            ));
        }

        svg.push_str(&render_titles(&self.config, &self.labels));
        close_svg(svg)
    }
}
