//! Provenance sidecars for batch verdict files.
//!
//! `<stem>.provenance.json` records which build classified which input
//! against which gauge, and how the verdicts came out:
//!
//! - `code_rev`, `version`, `callsite`: build and call origin.
//! - `gauge`: arc span, verdict vocabulary, and the coordinate verdicts are
//!   decided in, so a reader can tell how to interpret `verdicts`.
//! - `domain`, `norm`: the shared inputs, in the widget's attribute format.
//! - `verdicts`: count per verdict name (zero-filled) plus `error`.

use anyhow::{Context, Result};
use gauge::api::{Compatibility, Domain, FuzzyInterval, MAX_ANGLE, MIN_ANGLE};
use serde_json::{json, Map, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::input::{DomainSpec, IntervalSpec};

/// Key counting rows that failed validation.
pub const ERROR_KEY: &str = "error";

/// What one batch run classified.
pub struct Payload {
    pub input: PathBuf,
    pub domain: Domain,
    pub norm: FuzzyInterval,
    /// Verdict tally as produced by `batch::summarize`.
    pub summary: Value,
}

impl Payload {
    pub fn new(input: &Path, domain: Domain, norm: FuzzyInterval, summary: Value) -> Self {
        Self {
            input: input.to_path_buf(),
            domain,
            norm,
            summary,
        }
    }

    fn rows(&self) -> u64 {
        self.summary
            .as_object()
            .map(|m| m.values().filter_map(Value::as_u64).sum())
            .unwrap_or(0)
    }

    /// Every verdict name present, missing ones as zero, `error` last.
    fn verdict_counts(&self) -> Value {
        let count = |key: &str| self.summary[key].as_u64().unwrap_or(0);
        let mut out = Map::new();
        for v in Compatibility::ALL {
            out.insert(v.as_str().to_string(), json!(count(v.as_str())));
        }
        out.insert(ERROR_KEY.to_string(), json!(count(ERROR_KEY)));
        Value::Object(out)
    }
}

/// Description of the gauge every verdict in the batch refers to.
fn gauge_block() -> Value {
    let names: Vec<_> = Compatibility::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "arc_degrees": [MIN_ANGLE, MAX_ANGLE],
        "verdicts": names,
        "verdict_basis": "raw-values",
    })
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let domain = DomainSpec {
        inf: payload.domain.lower,
        sup: payload.domain.upper,
    };
    let norm = IntervalSpec {
        d1: payload.norm.kernel_left,
        d2: payload.norm.kernel_right,
        dt1: payload.norm.tolerance_left,
        dt2: payload.norm.tolerance_right,
    };
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": gauge::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "gauge": gauge_block(),
        "input": payload.input.to_string_lossy(),
        "domain": domain,
        "norm": norm,
        "rows": payload.rows(),
        "verdicts": payload.verdict_counts(),
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("verdicts"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn payload(summary: Value) -> Payload {
        Payload::new(
            Path::new("readings.csv"),
            Domain::new(0.0, 14.0).unwrap(),
            FuzzyInterval::new(6.5, 7.5, 0.5, 0.5).unwrap(),
            summary,
        )
    }

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/verdicts.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/verdicts.provenance.json")
        );
    }

    #[test]
    fn verdict_counts_are_zero_filled() {
        let p = payload(json!({"partial-match": 2, "error": 1}));
        assert_eq!(
            p.verdict_counts(),
            json!({"full-match": 0, "partial-match": 2, "no-match": 0, "error": 1})
        );
        assert_eq!(p.rows(), 3);
    }

    #[test]
    fn write_sidecar_records_gauge_inputs_and_verdicts() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("verdicts.json");
        fs::write(&artifact, "[]").unwrap();
        let prov_path =
            write_sidecar(&artifact, payload(json!({"full-match": 4, "no-match": 1}))).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["version"], gauge::VERSION);
        assert_eq!(parsed["input"], "readings.csv");
        assert_eq!(parsed["domain"], json!({"inf": 0.0, "sup": 14.0}));
        assert_eq!(parsed["norm"]["dt2"], 0.5);
        assert_eq!(parsed["rows"], 5);
        assert_eq!(parsed["verdicts"]["full-match"], 4);
        assert_eq!(parsed["verdicts"]["partial-match"], 0);
        assert_eq!(parsed["gauge"]["arc_degrees"], json!([-75.0, 75.0]));
        assert_eq!(
            parsed["gauge"]["verdicts"],
            json!(["full-match", "partial-match", "no-match"])
        );
    }
}
