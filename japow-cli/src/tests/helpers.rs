//! Test helpers for composing forecast files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

const DATES: [&str; 5] = [
    "2025-01-08",
    "2025-01-09",
    "2025-01-10",
    "2025-01-11",
    "2025-01-12",
];

/// A temporary directory holding forecast files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `entries` as a forecast file and return its path.
    pub(super) fn forecasts(&self, entries: &[Value]) -> Utf8PathBuf {
        let path = self.path("forecasts.json");
        let payload = serde_json::to_vec(entries).expect("serialise forecasts");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A forecast entry with calm, neutral weather and the given daily snowfall.
///
/// Visibility is moderate throughout so neither the bluebird bonus nor the
/// fog penalty applies.
pub(super) fn entry(resort_id: &str, snowfall: &[f64]) -> Value {
    let days = snowfall.len();
    let time: Vec<&str> = DATES.iter().copied().take(days).collect();
    assert_eq!(time.len(), days, "at most {} days supported", DATES.len());
    json!({
        "resort_id": resort_id,
        "daily": {
            "time": time,
            "snowfall_sum": snowfall,
            "precipitation_probability_max": vec![50.0; days],
            "wind_speed_10m_max": vec![10.0; days],
            "visibility_min": vec![2_000.0; days],
            "temperature_2m_max": vec![0.0; days],
            "temperature_2m_min": vec![-5.0; days],
        }
    })
}
