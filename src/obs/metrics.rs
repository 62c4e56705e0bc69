//! Minimal metrics registry for the coffee service.
//!
//! Counter, gauge, and histogram types backed by atomics, with dynamic
//! labels stored in a `DashMap`. Labels are flattened into sorted key
//! vectors to keep rendering deterministic. Histogram buckets are fixed in
//! microseconds to avoid floating point math; metric names carry the unit.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

/// Escape a label value per the text exposition format.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Flatten a label slice into the sorted owned form used as a map key.
fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

/// Format a label key as `k1="v1",k2="v2"`.
fn format_labels(key: &[(String, String)]) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Write one sample line, omitting the brace block when there are no labels.
fn write_sample(out: &mut String, name: &str, labels: &str, value: impl std::fmt::Display) {
    if labels.is_empty() {
        let _ = writeln!(out, "{} {}", name, value);
    } else {
        let _ = writeln!(out, "{}{{{}}} {}", name, labels, value);
    }
}

/// Unlabeled monotonic counter.
#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        write_sample(out, name, "", self.get());
    }
}

/// Unlabeled gauge.
#[derive(Default)]
pub struct Gauge(AtomicI64);

impl Gauge {
    /// Increment by 1.
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }

    /// Replace the value.
    pub fn set(&self, v: i64) {
        self.0.store(v, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} gauge", name);
        write_sample(out, name, "", self.get());
    }
}

/// Counter with dynamic labels.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set, 0 if never incremented.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let labels = format_labels(r.key());
            write_sample(out, name, &labels, r.value().load(Ordering::Relaxed));
        }
    }
}

// Upper bounds in microseconds: 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const BUCKET_COUNT: usize = 9;
const BUCKETS_MICROS: [u64; BUCKET_COUNT] =
    [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000];

struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKET_COUNT],
}

impl Default for AtomicHistogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

/// Histogram with dynamic labels, observing durations at microsecond scale.
#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<Vec<(String, String)>, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);
        let micros = duration.as_micros() as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);

        // Buckets are cumulative: a sample lands in every bucket whose
        // upper bound it does not exceed.
        for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= le {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for r in self.map.iter() {
            let labels = format_labels(r.key());
            let hist = r.value();

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let bucket_labels = if labels.is_empty() {
                    format!("le=\"{}\"", le)
                } else {
                    format!("{},le=\"{}\"", labels, le)
                };
                let count = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{}_bucket{{{}}} {}", name, bucket_labels, count);
            }

            let count = hist.count.load(Ordering::Relaxed);
            let inf_labels = if labels.is_empty() {
                "le=\"+Inf\"".to_string()
            } else {
                format!("{},le=\"+Inf\"", labels)
            };
            let _ = writeln!(out, "{}_bucket{{{}}} {}", name, inf_labels, count);

            write_sample(
                out,
                &format!("{}_sum", name),
                &labels,
                hist.sum.load(Ordering::Relaxed),
            );
            write_sample(out, &format!("{}_count", name), &labels, count);
        }
    }
}

/// Registry of every metric the service exposes.
#[derive(Default)]
pub struct CafeMetrics {
    /// Requests served, labeled by method, matched path, and status.
    pub http_requests: CounterVec,
    /// Request latency in microseconds, labeled by method and matched path.
    pub request_duration: HistogramVec,
    /// Coffees added through POST /coffees.
    pub coffees_created: Counter,
    /// Coffees removed through DELETE /coffees/{id}.
    pub coffees_deleted: Counter,
    /// Orders accepted through POST /order.
    pub orders_placed: Counter,
    /// Current number of items on the menu.
    pub menu_size: Gauge,
}

impl CafeMetrics {
    /// Render all registered metrics plus any extra lines provided by the
    /// caller (values computed at scrape time, such as uptime).
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.http_requests
            .render("cafe_http_requests_total", &mut out);
        self.request_duration
            .render("cafe_http_request_duration_micros", &mut out);
        self.coffees_created
            .render("cafe_coffees_created_total", &mut out);
        self.coffees_deleted
            .render("cafe_coffees_deleted_total", &mut out);
        self.orders_placed
            .render("cafe_orders_placed_total", &mut out);
        self.menu_size.render("cafe_menu_size", &mut out);

        for (k, v) in extra {
            let _ = writeln!(out, "{} {}", k, v);
        }
        out
    }
}
