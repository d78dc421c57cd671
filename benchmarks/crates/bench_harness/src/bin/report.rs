use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Serialize)]
struct Summary {
    benches: BTreeMap<String, BenchStats>,
}

#[derive(Debug, Serialize)]
struct BenchStats {
    mean_ns: f64,
    median_ns: f64,
    std_dev_ns: f64,
    /// Input bytes per second at the mean, when the bench declared a byte throughput.
    mib_per_s: Option<f64>,
}

fn workspace_dir(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    for part in parts {
        path.push(part);
    }
    path
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = workspace_dir(&["target", "criterion"]);
    let mut benches = BTreeMap::new();
    if root.exists() {
        collect(&root, &root, &mut benches)?;
    }
    let summary = Summary { benches };

    let reports_dir = workspace_dir(&["reports", "latest"]);
    fs::create_dir_all(&reports_dir)?;

    let json_path = reports_dir.join("summary.json");
    fs::write(&json_path, serde_json::to_vec_pretty(&summary)?)?;

    let md_path = reports_dir.join("summary.md");
    fs::write(&md_path, render_markdown(&summary))?;

    println!("Wrote {} and {}", json_path.display(), md_path.display());
    Ok(())
}

/// Finds every `new/estimates.json` below `dir`; the bench is named by its relative path.
fn collect(
    root: &Path,
    dir: &Path,
    out: &mut BTreeMap<String, BenchStats>,
) -> Result<(), Box<dyn std::error::Error>> {
    let estimates = dir.join("new").join("estimates.json");
    if estimates.exists() {
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&estimates)?)?;
        let mean = v["mean"]["point_estimate"].as_f64().unwrap_or(0.0);
        let median = v["median"]["point_estimate"].as_f64().unwrap_or(0.0);
        let std_dev = v["std_dev"]["point_estimate"].as_f64().unwrap_or(0.0);
        let mib_per_s = throughput_bytes(&dir.join("new").join("benchmark.json"))
            .filter(|_| mean > 0.0)
            .map(|bytes| bytes / (mean / 1e9) / (1024.0 * 1024.0));
        let name = dir
            .strip_prefix(root)?
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");
        out.insert(
            name,
            BenchStats {
                mean_ns: mean,
                median_ns: median,
                std_dev_ns: std_dev,
                mib_per_s,
            },
        );
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() && path.file_name().is_some_and(|n| n != "report") {
            collect(root, &path, out)?;
        }
    }
    Ok(())
}

fn throughput_bytes(path: &Path) -> Option<f64> {
    let data = fs::read_to_string(path).ok()?;
    let v: serde_json::Value = serde_json::from_str(&data).ok()?;
    v["throughput"]["Bytes"].as_f64()
}

fn render_markdown(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("# Benchmark Summary\n\n");
    out.push_str("| Bench | Mean (ns) | Median (ns) | Std Dev (ns) | MiB/s |\n");
    out.push_str("| --- | ---: | ---: | ---: | ---: |\n");
    for (name, stats) in &summary.benches {
        let rate = stats
            .mib_per_s
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        out.push_str(&format!(
            "| {} | {:.2} | {:.2} | {:.2} | {} |\n",
            name, stats.mean_ns, stats.median_ns, stats.std_dev_ns, rate
        ));
    }
    out
}
