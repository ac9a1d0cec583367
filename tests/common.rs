#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use workpulse::models::WorkstationDraft;

pub fn wp() -> Command {
    cargo_bin_cmd!("workpulse")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workpulse.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the binary runs on defaults
pub fn fresh_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// Write a CSV input file for `report`
pub fn write_input_csv(name: &str, rows: &[&str]) -> String {
    let path = temp_path(name, "csv");
    let mut content =
        String::from("name,tasks_completed,total_tasks,hours_worked,downtime,quality_score\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).expect("write input csv");
    path
}

/// The worked example used across the suite: 85.3% overall efficiency.
pub fn station_a() -> WorkstationDraft {
    WorkstationDraft::new("Station A", "8", "10", "8", "1", "90")
}

/// 63.5% overall efficiency.
pub fn station_b() -> WorkstationDraft {
    WorkstationDraft::new("Station B", "5", "10", "8", "2", "70")
}

/// 38.0% overall efficiency.
pub fn station_c() -> WorkstationDraft {
    WorkstationDraft::new("Station C", "2", "10", "8", "4", "50")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
