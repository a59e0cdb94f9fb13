use crate::aggregate::{descending, group_by, sum_by, top_n};
use crate::catalog::{BarDataset, HeatDataset, ScatterDataset};
use crate::models::{BarDatum, HeatCell, SalesRecord, ScatterPoint};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use tracing::{debug, warn};

const TOP_N: usize = 10;
const SCATTER_LIMIT: usize = 300;
const HIGH_PROFIT_THRESHOLD: f64 = 50.0;
const ISO_WEEKS: u32 = 53;

#[derive(Debug, Clone, Default)]
pub struct BarDatasets {
    pub sales_by_category: Vec<BarDatum>,
    pub profit_by_country: Vec<BarDatum>,
    pub top_10_products: Vec<BarDatum>,
}

#[derive(Debug, Clone, Default)]
pub struct ScatterDatasets {
    pub profit_by_sale: Vec<ScatterPoint>,
    pub sales_profit_margin: Vec<ScatterPoint>,
    pub high_profit_shipping_cost: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Default)]
pub struct HeatDatasets {
    pub sum_sales_region_category: Vec<HeatCell>,
    pub daily_sales: Vec<HeatCell>,
    pub monthly_sales: Vec<HeatCell>,
    pub weekly_sales: Vec<HeatCell>,
}

/// Every chart-ready shape derived from one load of the dataset.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub record_count: usize,
    pub bar: BarDatasets,
    pub scatter: ScatterDatasets,
    pub heat: HeatDatasets,
}

impl Datasets {
    pub fn bar(&self, dataset: BarDataset) -> &[BarDatum] {
        match dataset {
            BarDataset::SalesByCategory => &self.bar.sales_by_category,
            BarDataset::ProfitByCountry => &self.bar.profit_by_country,
            BarDataset::Top10Products => &self.bar.top_10_products,
        }
    }

    pub fn scatter(&self, dataset: ScatterDataset) -> &[ScatterPoint] {
        match dataset {
            ScatterDataset::ProfitBySale => &self.scatter.profit_by_sale,
            ScatterDataset::SalesProfitMargin => &self.scatter.sales_profit_margin,
            ScatterDataset::HighProfitShippingCost => &self.scatter.high_profit_shipping_cost,
        }
    }

    pub fn heat(&self, dataset: HeatDataset) -> &[HeatCell] {
        match dataset {
            HeatDataset::SumSalesRegionCategory => &self.heat.sum_sales_region_category,
            HeatDataset::DailySales => &self.heat.daily_sales,
            HeatDataset::MonthlySales => &self.heat.monthly_sales,
            HeatDataset::WeeklySales => &self.heat.weekly_sales,
        }
    }
}

pub fn prepare(records: &[SalesRecord]) -> Datasets {
    let datasets = Datasets {
        record_count: records.len(),
        bar: prepare_bar(records),
        scatter: prepare_scatter(records),
        heat: prepare_heat(records),
    };
    debug!(
        records = datasets.record_count,
        categories = datasets.bar.sales_by_category.len(),
        "datasets prepared"
    );
    datasets
}

pub fn prepare_bar(records: &[SalesRecord]) -> BarDatasets {
    let to_bars = |pairs: Vec<(String, f64)>| -> Vec<BarDatum> {
        pairs
            .into_iter()
            .map(|(label, value)| BarDatum { label, value })
            .collect()
    };
    let by_value = |a: &BarDatum, b: &BarDatum| descending(a.value, b.value);

    let sales_by_category = to_bars(sum_by(records, |r| r.category.clone(), |r| r.sales));
    let profit_by_country = top_n(
        to_bars(sum_by(records, |r| r.country.clone(), |r| r.profit)),
        TOP_N,
        by_value,
    );
    let top_10_products = top_n(
        to_bars(sum_by(records, |r| r.product_name.clone(), |r| r.sales)),
        TOP_N,
        by_value,
    );

    BarDatasets {
        sales_by_category,
        profit_by_country,
        top_10_products,
    }
}

pub fn prepare_scatter(records: &[SalesRecord]) -> ScatterDatasets {
    let by_y = |a: &ScatterPoint, b: &ScatterPoint| descending(a.y, b.y);

    let profit_by_sale = top_n(
        records
            .iter()
            .map(|r| ScatterPoint {
                x: r.sales,
                y: r.profit,
            })
            .collect(),
        SCATTER_LIMIT,
        by_y,
    );

    let sales_profit_margin = top_n(
        records
            .iter()
            .filter(|r| r.sales > 0.0 && r.profit > 0.0)
            .map(|r| ScatterPoint {
                x: r.profit / r.sales,
                y: r.sales,
            })
            .collect(),
        SCATTER_LIMIT,
        by_y,
    );

    let high_profit_shipping_cost = top_n(
        records
            .iter()
            .filter(|r| r.profit > HIGH_PROFIT_THRESHOLD && r.shipping_cost > 0.0)
            .map(|r| ScatterPoint {
                x: r.shipping_cost,
                y: r.profit,
            })
            .collect(),
        SCATTER_LIMIT,
        by_y,
    );

    ScatterDatasets {
        profit_by_sale,
        sales_profit_margin,
        high_profit_shipping_cost,
    }
}

pub fn prepare_heat(records: &[SalesRecord]) -> HeatDatasets {
    let mut dated = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match parse_order_date(&record.order_date) {
            Some(date) => dated.push((date, record.sales)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "records with unparseable order dates left out of date grids");
    }

    HeatDatasets {
        sum_sales_region_category: region_category_sales(records),
        daily_sales: daily_sales(&dated),
        monthly_sales: monthly_sales(&dated),
        weekly_sales: weekly_sales(&dated),
    }
}

/// Regions in first-seen order, then categories in first-seen order within
/// each region.
fn region_category_sales(records: &[SalesRecord]) -> Vec<HeatCell> {
    group_by(records, |r| r.region.clone())
        .into_iter()
        .flat_map(|(region, members)| {
            sum_by(&members, |r| r.category.clone(), |r| r.sales)
                .into_iter()
                .map(move |(category, sales)| HeatCell {
                    x: region.clone(),
                    y: category,
                    value: sales,
                })
        })
        .collect()
}

/// 12 x 31 grid, month-major. Impossible dates stay at zero.
fn daily_sales(dated: &[(NaiveDate, f64)]) -> Vec<HeatCell> {
    let mut totals: HashMap<(u32, u32), f64> = HashMap::new();
    for (date, sales) in dated {
        *totals.entry((date.month(), date.day())).or_default() += sales;
    }

    let totals = &totals;
    (1..=12u32)
        .flat_map(|month| {
            (1..=31u32).map(move |day| HeatCell {
                x: day.to_string(),
                y: month.to_string(),
                value: totals.get(&(month, day)).copied().unwrap_or(0.0),
            })
        })
        .collect()
}

/// 4 x 3 grid of quarter by month-within-quarter, both 1-based.
fn monthly_sales(dated: &[(NaiveDate, f64)]) -> Vec<HeatCell> {
    let mut totals: HashMap<(u32, u32), f64> = HashMap::new();
    for (date, sales) in dated {
        *totals.entry(quarter_and_month(*date)).or_default() += sales;
    }

    let totals = &totals;
    (1..=4u32)
        .flat_map(|quarter| {
            (1..=3u32).map(move |month| HeatCell {
                x: month.to_string(),
                y: quarter.to_string(),
                value: totals.get(&(quarter, month)).copied().unwrap_or(0.0),
            })
        })
        .collect()
}

/// 7 x 53 grid of weekday by ISO week number.
fn weekly_sales(dated: &[(NaiveDate, f64)]) -> Vec<HeatCell> {
    let mut totals: HashMap<(Weekday, u32), f64> = HashMap::new();
    for (date, sales) in dated {
        *totals
            .entry((date.weekday(), iso_week_number(*date)))
            .or_default() += sales;
    }

    let totals = &totals;
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .flat_map(|weekday| {
        (1..=ISO_WEEKS).map(move |week| HeatCell {
            x: week.to_string(),
            y: weekday.to_string(),
            value: totals.get(&(weekday, week)).copied().unwrap_or(0.0),
        })
    })
    .collect()
}

/// Order dates are exported as `dd-mm-yyyy`.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d-%m-%Y").ok()
}

pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

pub fn quarter_and_month(date: NaiveDate) -> (u32, u32) {
    let month0 = date.month0();
    (month0 / 3 + 1, month0 % 3 + 1)
}
