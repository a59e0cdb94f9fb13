use crate::chart::axis::{render_titles, Axis, Orient};
use crate::chart::config::ChartConfig;
use crate::chart::format::{coord, escape, format_value, tooltip_attr};
use crate::chart::scale::{unique, BandScale, SequentialScale};
use crate::chart::{close_svg, empty_svg, open_svg};
use crate::models::{AxisLabels, HeatCell};
use tracing::debug;

const CELL_PADDING: f64 = 0.05;

/// Grid of coloured cells; rows and columns follow first appearance in the data.
#[derive(Debug, Clone)]
pub struct HeatMap {
    config: ChartConfig,
    labels: AxisLabels,
    data: Vec<HeatCell>,
}

impl HeatMap {
    pub fn new(config: ChartConfig, labels: AxisLabels, data: Vec<HeatCell>) -> Self {
        Self {
            config,
            labels,
            data,
        }
    }

    pub fn update(&mut self, data: Vec<HeatCell>, labels: Option<AxisLabels>) {
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
            return empty_svg(&self.config, "heat-map");
        }

        let (width, height) = (self.config.width, self.config.height);
        let x = BandScale::new(
            unique(self.data.iter().map(|c| c.x.as_str())),
            (0.0, width),
            CELL_PADDING,
        );
        let y = BandScale::new(
            unique(self.data.iter().map(|c| c.y.as_str())),
            (0.0, height),
            CELL_PADDING,
        );
        let max = self.data.iter().map(|c| c.value).fold(0.0, f64::max);
        let color = SequentialScale::new((0.0, max));
        debug!(
            columns = x.domain().len(),
            rows = y.domain().len(),
            max,
            "rendering heat map"
        );

        let mut svg = open_svg(
            &self.config,
            "heat-map",
            ".cell:hover{stroke:black;stroke-width:2}",
        );
        svg.push_str(
            &Axis::band(Orient::Bottom, &x, (0.0, width))
                .thin_labels(x.step())
                .render("x-axis", (0.0, height)),
        );
        svg.push_str(
            &Axis::band(Orient::Left, &y, (0.0, height))
                .thin_labels(y.step())
                .render("y-axis", (0.0, 0.0)),
        );

        for cell in &self.data {
            let (Some(left), Some(top)) = (x.position(&cell.x), y.position(&cell.y)) else {
                continue;
            };
            let lines = vec![
                format!("{}: {}", self.labels.x, cell.x),
                format!("{}: {}", self.labels.y, cell.y),
                format!("Value: {}", format_value(cell.value)),
            ];
            svg.push_str(&format!(
                r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-tooltip="{}"><title>{}</title></rect>"#,
                coord(left),
                coord(top),
                coord(x.bandwidth()),
                coord(y.bandwidth()),
                color.color(cell.value),
                tooltip_attr(&lines),
                escape(&lines.join("\n")),
            ));
        }

        svg.push_str(&render_titles(&self.config, &self.labels));
        close_svg(svg)
    }
}
