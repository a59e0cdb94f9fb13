use crate::catalog::{catalog, BarDataset, HeatDataset, ScatterDataset};
use crate::chart::{BarChart, HeatMap, ScatterPlot};
use crate::datasets::Datasets;
use crate::errors::AppError;
use crate::models::{BarSeries, DatasetCatalog, HeatSeries, ReloadResponse, ScatterSeries};
use crate::state::AppState;
use crate::storage::load_records;
use crate::ui::{render_index, IndexPage};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub bar: Option<String>,
    pub scatter: Option<String>,
    pub heat: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub dataset: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let bar: BarDataset = selected(query.bar.as_deref())?;
    let scatter: ScatterDataset = selected(query.scatter.as_deref())?;
    let heat: HeatDataset = selected(query.heat.as_deref())?;

    let datasets = state.snapshot().await;
    let page = IndexPage {
        catalog: catalog(),
        bar,
        scatter,
        heat,
        record_count: datasets.record_count,
        bar_svg: render_bar(&state, &datasets, bar),
        scatter_svg: render_scatter(&state, &datasets, scatter),
        heat_svg: render_heat(&state, &datasets, heat),
    };
    Ok(Html(render_index(&page)))
}

pub async fn bar_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, AppError> {
    let dataset: BarDataset = selected(query.dataset.as_deref())?;
    let datasets = state.snapshot().await;
    Ok(svg_response(render_bar(&state, &datasets, dataset)))
}

pub async fn scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, AppError> {
    let dataset: ScatterDataset = selected(query.dataset.as_deref())?;
    let datasets = state.snapshot().await;
    Ok(svg_response(render_scatter(&state, &datasets, dataset)))
}

pub async fn heat_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, AppError> {
    let dataset: HeatDataset = selected(query.dataset.as_deref())?;
    let datasets = state.snapshot().await;
    Ok(svg_response(render_heat(&state, &datasets, dataset)))
}

pub async fn get_catalog() -> Json<DatasetCatalog> {
    Json(catalog())
}

pub async fn get_bar_series(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<BarSeries>, AppError> {
    let dataset: BarDataset = key.parse()?;
    let datasets = state.snapshot().await;
    Ok(Json(BarSeries {
        dataset: dataset.key().to_string(),
        labels: dataset.axis_labels(),
        data: datasets.bar(dataset).to_vec(),
    }))
}

pub async fn get_scatter_series(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ScatterSeries>, AppError> {
    let dataset: ScatterDataset = key.parse()?;
    let datasets = state.snapshot().await;
    Ok(Json(ScatterSeries {
        dataset: dataset.key().to_string(),
        labels: dataset.axis_labels(),
        data: datasets.scatter(dataset).to_vec(),
    }))
}

pub async fn get_heat_series(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<HeatSeries>, AppError> {
    let dataset: HeatDataset = key.parse()?;
    let datasets = state.snapshot().await;
    Ok(Json(HeatSeries {
        dataset: dataset.key().to_string(),
        labels: dataset.axis_labels(),
        data: datasets.heat(dataset).to_vec(),
    }))
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let records = load_records(&state.data_path).await?;
    let count = state.replace(&records).await;
    info!(records = count, "datasets reloaded");
    Ok(Json(ReloadResponse { records: count }))
}

/// Missing or empty selection means the first dataset of the menu.
fn selected<T>(value: Option<&str>) -> Result<T, AppError>
where
    T: FromStr<Err = AppError> + Default,
{
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(key) => key.parse(),
    }
}

fn render_bar(state: &AppState, datasets: &Datasets, dataset: BarDataset) -> String {
    debug!(dataset = dataset.key(), "bar chart requested");
    BarChart::new(
        state.chart.as_ref().clone(),
        dataset.axis_labels(),
        datasets.bar(dataset).to_vec(),
    )
    .render()
}

fn render_scatter(state: &AppState, datasets: &Datasets, dataset: ScatterDataset) -> String {
    debug!(dataset = dataset.key(), "scatter plot requested");
    ScatterPlot::new(
        state.chart.as_ref().clone(),
        dataset.axis_labels(),
        datasets.scatter(dataset).to_vec(),
    )
    .render()
}

fn render_heat(state: &AppState, datasets: &Datasets, dataset: HeatDataset) -> String {
    debug!(dataset = dataset.key(), "heat map requested");
    HeatMap::new(
        state.chart.as_ref().clone(),
        dataset.axis_labels(),
        datasets.heat(dataset).to_vec(),
    )
    .render()
}

fn svg_response(svg: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        svg,
    )
        .into_response()
}
