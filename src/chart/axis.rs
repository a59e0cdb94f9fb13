use crate::chart::config::ChartConfig;
use crate::chart::format::{coord, escape, format_number, precision_for_step, truncate_label};
use crate::chart::scale::{BandScale, LinearScale};
use crate::models::AxisLabels;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LINEAR_TICKS: usize = 10;
/// Horizontal room one tick label needs before labels start to collide.
const LABEL_SLOT: f64 = 22.0;
const MAX_LABEL_CHARS: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Debug, Clone)]
struct Tick {
    offset: f64,
    label: String,
}

/// Domain line, tick marks and tick labels for one side of the plot.
#[derive(Debug, Clone)]
pub struct Axis {
    orient: Orient,
    range: (f64, f64),
    ticks: Vec<Tick>,
    label_every: usize,
    rotate: Option<f64>,
}

impl Axis {
    pub fn linear(orient: Orient, scale: &LinearScale, range: (f64, f64)) -> Self {
        let decimals = precision_for_step(scale.tick_step(LINEAR_TICKS));
        let ticks = scale
            .ticks(LINEAR_TICKS)
            .into_iter()
            .map(|value| Tick {
                offset: scale.scale(value),
                label: format_number(value, decimals),
            })
            .collect();
        Self {
            orient,
            range,
            ticks,
            label_every: 1,
            rotate: None,
        }
    }

    pub fn band(orient: Orient, scale: &BandScale, range: (f64, f64)) -> Self {
        let half = scale.bandwidth() / 2.0;
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|key| {
                scale.position(key).map(|start| Tick {
                    offset: start + half,
                    label: truncate_label(key, MAX_LABEL_CHARS),
                })
            })
            .collect();
        Self {
            orient,
            range,
            ticks,
            label_every: 1,
            rotate: None,
        }
    }

    /// Labels every n-th tick when the bands are too narrow for all of them.
    pub fn thin_labels(mut self, band_step: f64) -> Self {
        if band_step > 0.0 && band_step < LABEL_SLOT {
            self.label_every = (LABEL_SLOT / band_step).ceil() as usize;
        }
        self
    }

    /// Tilts bottom labels that would overlap at their natural width.
    pub fn rotate_labels_if_crowded(mut self, band_step: f64) -> Self {
        let widest = self
            .ticks
            .iter()
            .map(|tick| tick.label.chars().count())
            .max()
            .unwrap_or(0);
        // About 6px per character at the axis font size.
        if self.orient == Orient::Bottom && widest as f64 * 6.0 > band_step {
            self.rotate = Some(-30.0);
        }
        self
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.len()
    }

    pub fn render(&self, class: &str, translate: (f64, f64)) -> String {
        let (r0, r1) = self.range;
        let anchor = match self.orient {
            Orient::Bottom if self.rotate.is_some() => "end",
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let mut out = format!(
            r#"<g class="{class}" transform="translate({},{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#,
            coord(translate.0),
            coord(translate.1),
        );

        let domain_path = match self.orient {
            Orient::Bottom => format!(
                "M{},{}V0H{}V{}",
                coord(r0),
                TICK_SIZE,
                coord(r1),
                TICK_SIZE
            ),
            Orient::Left => format!(
                "M{},{}H0V{}H{}",
                -TICK_SIZE,
                coord(r0),
                coord(r1),
                -TICK_SIZE
            ),
        };
        out.push_str(&format!(
            r#"<path class="domain" stroke="currentColor" d="{domain_path}"></path>"#
        ));

        for (index, tick) in self.ticks.iter().enumerate() {
            let show_label = index % self.label_every == 0;
            match self.orient {
                Orient::Bottom => {
                    out.push_str(&format!(
                        r#"<g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{TICK_SIZE}"></line>"#,
                        coord(tick.offset)
                    ));
                    if show_label {
                        match self.rotate {
                            Some(angle) => out.push_str(&format!(
                                r#"<text fill="currentColor" y="{}" dy="0.71em" transform="rotate({angle})">{}</text>"#,
                                TICK_SIZE + TICK_PADDING,
                                escape(&tick.label)
                            )),
                            None => out.push_str(&format!(
                                r#"<text fill="currentColor" y="{}" dy="0.71em">{}</text>"#,
                                TICK_SIZE + TICK_PADDING,
                                escape(&tick.label)
                            )),
                        }
                    }
                }
                Orient::Left => {
                    out.push_str(&format!(
                        r#"<g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="{}"></line>"#,
                        coord(tick.offset),
                        -TICK_SIZE
                    ));
                    if show_label {
                        out.push_str(&format!(
                            r#"<text fill="currentColor" x="{}" dy="0.32em">{}</text>"#,
                            -(TICK_SIZE + TICK_PADDING),
                            escape(&tick.label)
                        ));
                    }
                }
            }
            out.push_str("</g>");
        }

        out.push_str("</g>");
        out
    }
}

/// Axis titles: x centred under the plot, y rotated along the left edge.
pub fn render_titles(config: &ChartConfig, labels: &AxisLabels) -> String {
    format!(
        concat!(
            r#"<text class="axis-label x-label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            r#"<text class="axis-label y-label" x="{}" y="{}" transform="rotate(-90)" text-anchor="middle">{}</text>"#,
        ),
        coord(config.width / 2.0),
        coord(config.height + config.margin.bottom - 10.0),
        escape(&labels.x),
        coord(-config.height / 2.0),
        coord(-(config.margin.left - 25.0)),
        escape(&labels.y),
    )
}
