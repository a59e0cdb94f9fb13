use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct BarDatum {
    label: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct Labels {
    x: String,
    y: String,
}

#[derive(Debug, Deserialize)]
struct BarSeries {
    dataset: String,
    labels: Labels,
    data: Vec<BarDatum>,
}

#[derive(Debug, Deserialize)]
struct HeatCell {
    x: String,
    y: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct HeatSeries {
    labels: Labels,
    data: Vec<HeatCell>,
}

#[derive(Debug, Deserialize)]
struct DatasetOption {
    value: String,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    bar: Vec<DatasetOption>,
    scatter: Vec<DatasetOption>,
    heat: Vec<DatasetOption>,
}

#[derive(Debug, Deserialize)]
struct ReloadResponse {
    records: usize,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.data_path);
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

const FIXTURE: &str = r#"[
  {"Category": "Technology", "Country": "France", "Region": "Central", "Product Name": "Phone", "Order Date": "01-01-2014", "Sales": 200.0, "Profit": 60.0, "Shipping Cost": 10.0},
  {"Category": "Furniture", "Country": "Germany", "Region": "Central", "Product Name": "Chair", "Order Date": "15-02-2014", "Sales": 100.0, "Profit": -20.0, "Shipping Cost": 5.0},
  {"Category": "Technology", "Country": "France", "Region": "North", "Product Name": "Phone", "Order Date": "15-02-2013", "Sales": 300.0, "Profit": 90.0, "Shipping Cost": 0.0},
  {"Category": "Office Supplies", "Country": "Spain", "Region": "North", "Product Name": "Paper", "Order Date": "31-12-2014", "Sales": 50.0, "Profit": 5.0, "Shipping Cost": 2.0}
]"#;

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn write_fixture() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("sales_charts_http_{}_{}.json", std::process::id(), nanos));
    std::fs::write(&path, FIXTURE).expect("write fixture dataset");
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/datasets")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = write_fixture();
    let child = Command::new(env!("CARGO_BIN_EXE_sales_charts"))
        .env("PORT", port.to_string())
        .env("SALES_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_index_lists_every_selector() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();

    assert!(html.contains(r#"id="bar-selector""#));
    assert!(html.contains(r#"id="scatter-selector""#));
    assert!(html.contains(r#"id="heat-selector""#));
    assert!(html.contains(r#"<option value="top10Products">"#));
    assert_eq!(html.matches("<svg").count(), 3);
    assert_eq!(html.matches(r#"<rect class="bar""#).count(), 3);

    let response = client
        .get(format!("{}/?heat=monthlySales", server.base_url))
        .send()
        .await
        .unwrap();
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<option value="monthlySales" selected>"#));
    assert_eq!(html.matches(r#"<rect class="cell""#).count(), 12);
}

#[tokio::test]
async fn http_chart_switches_dataset() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/chart/bar?dataset=profitByCountry", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/svg+xml"
    );
    let svg = response.text().await.unwrap();
    assert_eq!(svg.matches(r#"<rect class="bar""#).count(), 3);
    assert!(svg.contains(">Country</text>"));
    assert!(svg.contains("Country: Germany&#10;Profit: -20"));

    let svg = client
        .get(format!("{}/chart/scatter?dataset=highProfitShippingCost", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(svg.matches("<circle").count(), 1);

    let svg = client
        .get(format!("{}/chart/heat", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(svg.matches(r#"<rect class="cell""#).count(), 4);
}

#[tokio::test]
async fn http_unknown_dataset_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/chart/bar?dataset=salesByPlanet", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("salesByPlanet"));

    let response = client
        .get(format!("{}/api/heat/yearlySales", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_series_api_returns_aggregates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let catalog: Catalog = client
        .get(format!("{}/api/datasets", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(catalog.bar.len(), 3);
    assert_eq!(catalog.scatter.len(), 3);
    assert_eq!(catalog.heat.len(), 4);
    assert_eq!(catalog.bar[0].value, "salesByCategory");

    let series: BarSeries = client
        .get(format!("{}/api/bar/salesByCategory", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(series.dataset, "salesByCategory");
    assert_eq!(series.labels.x, "Categories");
    assert_eq!(series.labels.y, "Sales");
    let labels: Vec<_> = series.data.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["Technology", "Furniture", "Office Supplies"]);
    let total: f64 = series.data.iter().map(|d| d.value).sum();
    assert_eq!(total, 650.0);

    let heat: HeatSeries = client
        .get(format!("{}/api/heat/dailySales", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(heat.labels.x, "Day of Month");
    assert_eq!(heat.data.len(), 12 * 31);
    let feb_15 = heat
        .data
        .iter()
        .find(|cell| cell.y == "2" && cell.x == "15")
        .unwrap();
    assert_eq!(feb_15.value, 400.0);
}

#[tokio::test]
async fn http_reload_picks_up_new_records() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let extended = FIXTURE.replacen(
        "[",
        r#"[{"Category": "Technology", "Country": "Italy", "Region": "South", "Product Name": "Tablet", "Order Date": "03-03-2014", "Sales": 10.0, "Profit": 1.0, "Shipping Cost": 1.0},"#,
        1,
    );
    std::fs::write(&server.data_path, extended).unwrap();

    let reloaded: ReloadResponse = client
        .post(format!("{}/api/reload", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reloaded.records, 5);

    let series: BarSeries = client
        .get(format!("{}/api/bar/salesByCategory", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(series.data[0].label, "Technology");
    assert_eq!(series.data[0].value, 510.0);

    // Put the original fixture back for the other tests.
    std::fs::write(&server.data_path, FIXTURE).unwrap();
    let response = client
        .post(format!("{}/api/reload", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_reload_of_broken_file_keeps_previous_data() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    std::fs::write(&server.data_path, "{ not json").unwrap();
    let response = client
        .post(format!("{}/api/reload", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().await.unwrap().contains("invalid dataset"));

    let series: BarSeries = client
        .get(format!("{}/api/bar/salesByCategory", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(series.data.len(), 3);
    assert_eq!(series.data[0].label, "Technology");
    assert_eq!(series.data[0].value, 500.0);

    std::fs::write(&server.data_path, FIXTURE).unwrap();
}
