use crate::catalog::{BarDataset, HeatDataset, ScatterDataset};
use crate::chart::format::{escape, format_number};
use crate::models::{DatasetCatalog, DatasetOption};

/// Everything the landing page shows on first load.
pub struct IndexPage {
    pub catalog: DatasetCatalog,
    pub bar: BarDataset,
    pub scatter: ScatterDataset,
    pub heat: HeatDataset,
    pub record_count: usize,
    pub bar_svg: String,
    pub scatter_svg: String,
    pub heat_svg: String,
}

pub fn render_index(page: &IndexPage) -> String {
    let records = format_number(page.record_count as f64, 0);
    let bar_options = render_options(&page.catalog.bar, page.bar.key());
    let scatter_options = render_options(&page.catalog.scatter, page.scatter.key());
    let heat_options = render_options(&page.catalog.heat, page.heat.key());
    fill_template(INDEX_HTML, |name| match name {
        "RECORDS" => Some(records.as_str()),
        "BAR_OPTIONS" => Some(bar_options.as_str()),
        "SCATTER_OPTIONS" => Some(scatter_options.as_str()),
        "HEAT_OPTIONS" => Some(heat_options.as_str()),
        "BAR_SVG" => Some(page.bar_svg.as_str()),
        "SCATTER_SVG" => Some(page.scatter_svg.as_str()),
        "HEAT_SVG" => Some(page.heat_svg.as_str()),
        _ => None,
    })
}

/// Replaces `{{NAME}}` placeholders in a single pass; substituted text is
/// never scanned again. Unknown names are left as they are.
fn fill_template<'a>(template: &str, value: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let found = after
            .find("}}")
            .and_then(|close| value(&after[..close]).map(|text| (close, text)));
        match found {
            Some((close, text)) => {
                out.push_str(text);
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn render_options(options: &[DatasetOption], selected: &str) -> String {
    options
        .iter()
        .map(|option| {
            let marker = if option.value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                escape(&option.value),
                escape(&option.label)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Superstore Sales Charts</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #c9dcef;
      --ink: #1f2a36;
      --muted: #5d6b7a;
      --accent: #4682b4;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(31, 42, 54, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f7fbff 60%, #eef3f8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .chart-area {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    select {
      appearance: none;
      border: 1px solid rgba(31, 42, 54, 0.15);
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 500;
      color: var(--ink);
      background: white;
      cursor: pointer;
    }

    .chart-card {
      background: white;
      border-radius: 18px;
      padding: 12px;
      overflow-x: auto;
    }

    .chart-card svg {
      display: block;
      max-width: 100%;
      height: auto;
    }

    .axis-label {
      font-size: 13px;
      fill: var(--muted);
    }

    .empty {
      fill: var(--muted);
      font-size: 16px;
    }

    #tooltip {
      position: absolute;
      pointer-events: none;
      opacity: 0;
      background: var(--ink);
      color: white;
      border-radius: 10px;
      padding: 8px 12px;
      font-size: 0.85rem;
      white-space: pre-line;
      transition: opacity 120ms ease;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    button.no-js {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Superstore Sales</h1>
      <p class="subtitle">{{RECORDS}} order lines. Pick a dataset under each chart; hover a mark for its values.</p>
      <form id="selectors" method="get" action="/">
        <button class="no-js" type="submit">Apply selection</button>
      </form>
    </header>

    <section class="chart-area" data-chart="bar">
      <div class="chart-header">
        <h2>Bar chart</h2>
        <div class="bar-selector">
          <select id="bar-selector" name="bar" form="selectors">{{BAR_OPTIONS}}</select>
        </div>
      </div>
      <div class="chart-card bar">{{BAR_SVG}}</div>
    </section>

    <section class="chart-area" data-chart="scatter">
      <div class="chart-header">
        <h2>Scatter plot</h2>
        <div class="scatter-selector">
          <select id="scatter-selector" name="scatter" form="selectors">{{SCATTER_OPTIONS}}</select>
        </div>
      </div>
      <div class="chart-card scatter">{{SCATTER_SVG}}</div>
    </section>

    <section class="chart-area" data-chart="heat">
      <div class="chart-header">
        <h2>Heat map</h2>
        <div class="heat-selector">
          <select id="heat-selector" name="heat" form="selectors">{{HEAT_OPTIONS}}</select>
        </div>
      </div>
      <div class="chart-card heat">{{HEAT_SVG}}</div>
    </section>

    <div class="status" id="status"></div>
  </main>
  <div id="tooltip" role="tooltip"></div>

  <script>
    const tooltip = document.getElementById('tooltip');
    const statusEl = document.getElementById('status');
    const sections = Array.from(document.querySelectorAll('[data-chart]'));

    document.querySelectorAll('.no-js').forEach((el) => {
      el.hidden = true;
    });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const syncUrl = () => {
      const params = new URLSearchParams();
      sections.forEach((section) => {
        params.set(section.dataset.chart, section.querySelector('select').value);
      });
      history.replaceState(null, '', `/?${params}`);
    };

    const loadChart = async (kind, dataset, target) => {
      const res = await fetch(`/chart/${kind}?dataset=${encodeURIComponent(dataset)}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load chart');
      }
      target.innerHTML = await res.text();
    };

    sections.forEach((section) => {
      const kind = section.dataset.chart;
      const select = section.querySelector('select');
      const target = section.querySelector('.chart-card');
      select.addEventListener('change', () => {
        loadChart(kind, select.value, target)
          .then(() => {
            syncUrl();
            setStatus('', '');
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    const moveTooltip = (event) => {
      tooltip.style.left = `${event.pageX + 10}px`;
      tooltip.style.top = `${event.pageY - 20}px`;
    };

    document.addEventListener('mouseover', (event) => {
      const mark = event.target.closest('[data-tooltip]');
      if (!mark) {
        return;
      }
      tooltip.textContent = mark.dataset.tooltip;
      tooltip.style.opacity = 1;
      moveTooltip(event);
    });

    document.addEventListener('mousemove', (event) => {
      if (tooltip.style.opacity === '1') {
        moveTooltip(event);
      }
    });

    document.addEventListener('mouseout', (event) => {
      if (event.target.closest('[data-tooltip]')) {
        tooltip.style.opacity = 0;
      }
    });
  </script>
</body>
</html>
"#;
