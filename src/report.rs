//! Serializable views of comparison results.
//!
//! Products are carried as decimal strings so no precision is lost in JSON.
use crate::compare::{Comparison, Sweep};
use crate::timer::BenchmarkRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub result: String,
    pub calls: u64,
    /// Elapsed seconds.
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub divide: AlgorithmReport,
    pub karatsuba: AlgorithmReport,
    pub speedup: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPointReport {
    pub digits: usize,
    #[serde(flatten)]
    pub comparison: ComparisonReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub points: Vec<SweepPointReport>,
}

impl From<&BenchmarkRecord> for AlgorithmReport {
    fn from(record: &BenchmarkRecord) -> Self {
        Self {
            result: record.product.to_str_radix(10),
            calls: record.call_count,
            time: record.elapsed.as_secs_f64(),
        }
    }
}

impl From<&Comparison> for ComparisonReport {
    fn from(comparison: &Comparison) -> Self {
        Self {
            divide: (&comparison.divide_and_conquer).into(),
            karatsuba: (&comparison.karatsuba).into(),
            speedup: comparison.speedup(),
        }
    }
}

impl From<&Sweep> for SweepReport {
    fn from(sweep: &Sweep) -> Self {
        Self {
            points: sweep
                .points
                .iter()
                .map(|point| SweepPointReport {
                    digits: point.digits,
                    comparison: (&point.comparison).into(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{compare, sweep_seeded};
    use num_bigint::BigUint;
    #[test]
    fn test_comparison_report_json() {
        let x: BigUint = "123456789012345678901234567890".parse().unwrap();
        let comparison = compare(&x, &x);
        let report = ComparisonReport::from(&comparison);
        let json = serde_json::to_value(&report).unwrap();
        let expected = (&x * &x).to_str_radix(10);
        assert_eq!(json["divide"]["result"], expected.as_str());
        assert_eq!(json["karatsuba"]["result"], expected.as_str());
        assert_eq!(json["karatsuba"]["calls"], comparison.karatsuba.call_count);
        assert_eq!(json["divide"]["calls"], comparison.divide_and_conquer.call_count);
        assert!(json["speedup"].as_f64().unwrap() >= 0.0);
        let back: ComparisonReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
    #[test]
    fn test_sweep_report_flattens_points() {
        let sweep = sweep_seeded(&[5, 12], 3).unwrap();
        let json = serde_json::to_value(SweepReport::from(&sweep)).unwrap();
        assert_eq!(json["points"][0]["digits"], 5);
        assert_eq!(json["points"][1]["digits"], 12);
        assert!(json["points"][1]["karatsuba"]["result"].is_string());
    }
}
