use serde::{Deserialize, Serialize};

/// One order line from the Superstore export.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SalesRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Shipping Cost")]
    pub shipping_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatCell {
    pub x: String,
    pub y: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetCatalog {
    pub bar: Vec<DatasetOption>,
    pub scatter: Vec<DatasetOption>,
    pub heat: Vec<DatasetOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BarSeries {
    pub dataset: String,
    pub labels: AxisLabels,
    pub data: Vec<BarDatum>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub dataset: String,
    pub labels: AxisLabels,
    pub data: Vec<ScatterPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HeatSeries {
    pub dataset: String,
    pub labels: AxisLabels,
    pub data: Vec<HeatCell>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub records: usize,
}
