use crate::chart::axis::{render_titles, Axis, Orient};
use crate::chart::config::ChartConfig;
use crate::chart::format::{coord, escape, format_value, tooltip_attr};
use crate::chart::scale::{extent_with_zero, BandScale, LinearScale};
use crate::chart::{close_svg, empty_svg, open_svg};
use crate::models::{AxisLabels, BarDatum};
use tracing::debug;

const BAND_PADDING: f64 = 0.2;

/// One bar per datum on a band x axis; the linear y axis always includes zero.
#[derive(Debug, Clone)]
pub struct BarChart {
    config: ChartConfig,
    labels: AxisLabels,
    data: Vec<BarDatum>,
}

impl BarChart {
    pub fn new(config: ChartConfig, labels: AxisLabels, data: Vec<BarDatum>) -> Self {
        Self {
            config,
            labels,
            data,
        }
    }

    /// Swaps the bound data. Labels are kept when `labels` is `None`.
    pub fn update(&mut self, data: Vec<BarDatum>, labels: Option<AxisLabels>) {
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
            return empty_svg(&self.config, "bar-chart");
        }

        let (width, height) = (self.config.width, self.config.height);
        let colors = &self.config.colors;

        let x = BandScale::new(
            self.data.iter().map(|d| d.label.clone()).collect(),
            (0.0, width),
            BAND_PADDING,
        );
        let y = LinearScale::new(
            extent_with_zero(self.data.iter().map(|d| d.value)),
            (height, 0.0),
        );
        debug!(bars = self.data.len(), domain = ?y.domain(), "rendering bar chart");

        let style = format!(".bar:hover{{fill:{}}}", colors.highlight);
        let mut svg = open_svg(&self.config, "bar-chart", &style);

        svg.push_str(
            &Axis::band(Orient::Bottom, &x, (0.0, width))
                .rotate_labels_if_crowded(x.step())
                .render("x-axis", (0.0, height)),
        );
        svg.push_str(&Axis::linear(Orient::Left, &y, (height, 0.0)).render("y-axis", (0.0, 0.0)));

        let baseline = y.scale(0.0);
        for datum in &self.data {
            let Some(left) = x.position(&datum.label) else {
                continue;
            };
            let top = y.scale(datum.value);
            let lines = vec![
                format!("{}: {}", self.labels.x, datum.label),
                format!("{}: {}", self.labels.y, format_value(datum.value)),
            ];
            svg.push_str(&format!(
                r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" fill="{}" data-tooltip="{}"><title>{}</title></rect>"#,
                coord(left),
                coord(top.min(baseline)),
                coord(x.bandwidth()),
                coord((baseline - top).abs()),
                escape(&colors.bar),
                tooltip_attr(&lines),
                escape(&lines.join("\n")),
            ));
        }

        svg.push_str(&render_titles(&self.config, &self.labels));
        close_svg(svg)
    }
}
