use crate::errors::AppError;
use crate::models::{AxisLabels, DatasetCatalog, DatasetOption};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarDataset {
    #[default]
    SalesByCategory,
    ProfitByCountry,
    Top10Products,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScatterDataset {
    #[default]
    ProfitBySale,
    SalesProfitMargin,
    HighProfitShippingCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeatDataset {
    #[default]
    SumSalesRegionCategory,
    DailySales,
    MonthlySales,
    WeeklySales,
}

impl BarDataset {
    pub const ALL: [BarDataset; 3] = [
        BarDataset::SalesByCategory,
        BarDataset::ProfitByCountry,
        BarDataset::Top10Products,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BarDataset::SalesByCategory => "salesByCategory",
            BarDataset::ProfitByCountry => "profitByCountry",
            BarDataset::Top10Products => "top10Products",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BarDataset::SalesByCategory => "Sales by Category",
            BarDataset::ProfitByCountry => "Profit by Country",
            BarDataset::Top10Products => "Top 10 Products by Sales",
        }
    }

    pub fn axis_labels(self) -> AxisLabels {
        match self {
            BarDataset::SalesByCategory => AxisLabels::new("Categories", "Sales"),
            BarDataset::ProfitByCountry => AxisLabels::new("Country", "Profit"),
            BarDataset::Top10Products => AxisLabels::new("Product", "Sales"),
        }
    }
}

impl ScatterDataset {
    pub const ALL: [ScatterDataset; 3] = [
        ScatterDataset::ProfitBySale,
        ScatterDataset::SalesProfitMargin,
        ScatterDataset::HighProfitShippingCost,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScatterDataset::ProfitBySale => "profitBySale",
            ScatterDataset::SalesProfitMargin => "salesProfitMargin",
            ScatterDataset::HighProfitShippingCost => "highProfitShippingCost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScatterDataset::ProfitBySale => "Profit by Sale",
            ScatterDataset::SalesProfitMargin => "Sales by Profit Margin",
            ScatterDataset::HighProfitShippingCost => "(High) Profit by Shipping Cost",
        }
    }

    pub fn axis_labels(self) -> AxisLabels {
        match self {
            ScatterDataset::ProfitBySale => AxisLabels::new("Sales", "Profit"),
            ScatterDataset::SalesProfitMargin => AxisLabels::new("Profit Margin", "Sales"),
            ScatterDataset::HighProfitShippingCost => AxisLabels::new("Shipping Cost", "Profit"),
        }
    }
}

impl HeatDataset {
    pub const ALL: [HeatDataset; 4] = [
        HeatDataset::SumSalesRegionCategory,
        HeatDataset::DailySales,
        HeatDataset::MonthlySales,
        HeatDataset::WeeklySales,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HeatDataset::SumSalesRegionCategory => "sumSalesRegionCategory",
            HeatDataset::DailySales => "dailySales",
            HeatDataset::MonthlySales => "monthlySales",
            HeatDataset::WeeklySales => "weeklySales",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatDataset::SumSalesRegionCategory => "Sales sum by Category/Region",
            HeatDataset::DailySales => "Daily Sales",
            HeatDataset::MonthlySales => "Monthly Sales",
            HeatDataset::WeeklySales => "Weekly Sales",
        }
    }

    pub fn axis_labels(self) -> AxisLabels {
        match self {
            HeatDataset::SumSalesRegionCategory => AxisLabels::new("Region", "Category"),
            HeatDataset::DailySales => AxisLabels::new("Day of Month", "Month of Year"),
            HeatDataset::MonthlySales => AxisLabels::new("Month of Quarter", "Quarter of Year"),
            HeatDataset::WeeklySales => AxisLabels::new("Week of Year", "Day of Week"),
        }
    }
}

macro_rules! parse_by_key {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|dataset| dataset.key() == value)
                    .ok_or_else(|| {
                        AppError::not_found(format!("unknown {} dataset '{}'", $kind, value))
                    })
            }
        }
    };
}

parse_by_key!(BarDataset, "bar");
parse_by_key!(ScatterDataset, "scatter");
parse_by_key!(HeatDataset, "heat");

fn options<T: Copy>(
    all: &[T],
    key: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<DatasetOption> {
    all.iter()
        .map(|&dataset| DatasetOption {
            label: label(dataset).to_string(),
            value: key(dataset).to_string(),
        })
        .collect()
}

pub fn catalog() -> DatasetCatalog {
    DatasetCatalog {
        bar: options(&BarDataset::ALL, BarDataset::key, BarDataset::label),
        scatter: options(&ScatterDataset::ALL, ScatterDataset::key, ScatterDataset::label),
        heat: options(&HeatDataset::ALL, HeatDataset::key, HeatDataset::label),
    }
}
