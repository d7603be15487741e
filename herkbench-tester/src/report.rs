//! Per-case results and their table / JSON rendering.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Values written back for one case. Reference fields are `None` unless the
/// reference ran; `error`/`okay` are `None` unless checking ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HerkReport {
    pub time_ms: f64,
    pub gflops: f64,
    pub ref_time_ms: Option<f64>,
    pub ref_gflops: Option<f64>,
    pub error: Option<f64>,
    pub okay: Option<bool>,
}

impl HerkReport {
    /// True unless a check ran and failed.
    pub fn passed(&self) -> bool {
        self.okay != Some(false)
    }
}

/// One case as the CLI reports it.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<HerkReport>,
    /// Set when the case aborted instead of producing a report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none() && self.report.as_ref().is_some_and(HerkReport::passed)
    }

    fn status(&self) -> &'static str {
        match (&self.failure, &self.report) {
            (Some(_), _) => "FAILED",
            (None, Some(r)) if r.okay == Some(false) => "FAILED",
            (None, Some(r)) if r.okay == Some(true) => "pass",
            _ => "no check",
        }
    }
}

pub const TABLE_HEADER: &str = "type  layout  uplo  trans       n       k      alpha       beta  align       error    time(ms)    gflops  ref_time(ms)  ref_gflops  status";

fn opt(v: Option<f64>, width: usize, prec: usize) -> String {
    match v {
        Some(x) => format!("{:>width$.prec$}", x, width = width, prec = prec),
        None => format!("{:>width$}", "NA", width = width),
    }
}

fn opt_exp(v: Option<f64>, width: usize) -> String {
    match v {
        Some(x) => format!("{:>width$.2e}", x, width = width),
        None => format!("{:>width$}", "NA", width = width),
    }
}

/// One aligned table row, matching `TABLE_HEADER`.
pub fn table_row(case: &CaseResult) -> String {
    let p = &case.params;
    let r = case.report.clone().unwrap_or_default();
    let (time, gflops) = if case.report.is_some() {
        (Some(r.time_ms), Some(r.gflops))
    } else {
        (None, None)
    };
    let mut row = format!(
        "{:>4}  {:>6}  {:>4}  {:>5}  {:>6}  {:>6}  {:>9.2}  {:>9.2}  {:>5}  {}  {}  {}  {}  {}  {}",
        p.datatype,
        p.layout,
        p.uplo,
        p.trans,
        p.dim.n,
        p.dim.k,
        p.alpha,
        p.beta,
        p.align,
        opt_exp(r.error, 10),
        opt(time, 10, 4),
        opt(gflops, 8, 3),
        opt(r.ref_time_ms, 12, 4),
        opt(r.ref_gflops, 10, 3),
        case.status(),
    );
    if let Some(msg) = &case.failure {
        row.push_str(": ");
        row.push_str(msg);
    }
    row
}

/// Header, one row per case, and a pass/fail summary line.
pub fn render_table(cases: &[CaseResult]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for case in cases {
        out.push_str(&table_row(case));
        out.push('\n');
    }
    let failed = cases.iter().filter(|c| !c.passed()).count();
    if failed == 0 {
        out.push_str("All tests passed.\n");
    } else {
        out.push_str(&format!("{} of {} tests FAILED.\n", failed, cases.len()));
    }
    out
}

pub fn render_json(cases: &[CaseResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(report: Option<HerkReport>, failure: Option<&str>) -> CaseResult {
        CaseResult {
            params: Params::default(),
            report,
            failure: failure.map(str::to_string),
        }
    }

    #[test]
    fn test_passed() {
        assert!(HerkReport::default().passed());
        let bad = HerkReport {
            okay: Some(false),
            ..HerkReport::default()
        };
        assert!(!bad.passed());
        assert!(!case(None, Some("boom")).passed());
        assert!(!case(Some(bad), None).passed());
        assert!(case(Some(HerkReport::default()), None).passed());
    }

    #[test]
    fn test_table_marks_failures_and_na() {
        let ok = case(
            Some(HerkReport {
                time_ms: 1.5,
                gflops: 2.0,
                error: Some(1e-17),
                okay: Some(true),
                ..HerkReport::default()
            }),
            None,
        );
        let err = case(None, Some("reference kernel rejected its arguments"));
        let table = render_table(&[ok, err]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], TABLE_HEADER);
        assert!(lines[1].ends_with("pass"), "{}", lines[1]);
        assert!(lines[1].contains("NA"), "missing reference must print NA: {}", lines[1]);
        assert!(lines[2].contains("FAILED: reference kernel"), "{}", lines[2]);
        assert_eq!(lines[3], "1 of 2 tests FAILED.");
    }

    #[test]
    fn test_json_keeps_error_value_on_failure() {
        let c = case(
            Some(HerkReport {
                error: Some(0.25),
                okay: Some(false),
                ..HerkReport::default()
            }),
            None,
        );
        let json = render_json(&[c]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["report"]["error"], 0.25);
        assert_eq!(v[0]["report"]["okay"], false);
        assert_eq!(v[0]["params"]["ref"], false);
        assert!(v[0].get("failure").is_none());
    }
}
