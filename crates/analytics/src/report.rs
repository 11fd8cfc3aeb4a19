use serde::{Serialize, Serializer};

/// One entry of the quarter-over-quarter change series.
///
/// The point is anchored to the *later* quarter of each adjacent pair, so a
/// history of N filings yields N-1 change points. A `value` of `None` marks a
/// change that is undefined because the prior quarter reported zero AUM; the
/// series keeps its slot so positions still line up with the filing history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangePoint {
    pub quarter: String,
    /// Percentage change versus the prior quarter, or `None` if undefined.
    pub value: Option<f64>,
}

/// The summary statistics for one fund's filing history.
///
/// This struct is the final output of the `StatsEngine` and serves as the
/// data transfer object for the dashboard's stats panel. Two sentinel
/// conventions are in play, matching what the consumer renders:
///
/// - `qoq_change` and `yoy_growth` are ratios the dashboard treats specially
///   when absent; they serialize as the literal string "N/A" when undefined.
/// - The aggregate metrics (`volatility` through `growth_consistency`) default
///   to 0 when the history is too short to define them.
///
/// Every percentage field serializes as a string fixed to 2 decimal places;
/// rounding happens only here, never inside the computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundStats {
    /// AUM of the most recent filing, in USD.
    pub aum: f64,
    /// Quarter label of the most recent filing; empty with no filings.
    pub quarter: String,
    /// Percentage change between the last two filings.
    #[serde(serialize_with = "percent_or_na")]
    pub qoq_change: Option<f64>,
    /// Percentage change between the last filing and the one four earlier.
    #[serde(serialize_with = "percent_or_na")]
    pub yoy_growth: Option<f64>,
    /// Percentage change between the last filing and the first.
    #[serde(serialize_with = "percent")]
    pub total_appreciation: f64,
    /// Population standard deviation of the QoQ change series.
    #[serde(serialize_with = "percent")]
    pub volatility: f64,
    /// Largest signed value in the QoQ change series.
    #[serde(serialize_with = "percent")]
    pub max_growth: f64,
    /// Smallest signed value in the QoQ change series.
    #[serde(serialize_with = "percent")]
    pub max_decline: f64,
    /// Share of change points that are >= 0, as a percentage.
    #[serde(serialize_with = "percent")]
    pub growth_consistency: f64,
}

impl FundStats {
    /// Creates a zeroed-out report: the documented defaults for an empty
    /// filing history.
    pub fn new() -> Self {
        Self {
            aum: 0.0,
            quarter: String::new(),
            qoq_change: None,
            yoy_growth: None,
            total_appreciation: 0.0,
            volatility: 0.0,
            max_growth: 0.0,
            max_decline: 0.0,
            growth_consistency: 0.0,
        }
    }
}

impl Default for FundStats {
    fn default() -> Self {
        Self::new()
    }
}

fn percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

fn percent_or_na<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&format!("{v:.2}")),
        None => serializer.serialize_str("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_serialize_to_the_dashboard_wire_shape() {
        let stats = FundStats {
            aum: 1_500_000.0,
            quarter: "2024Q1".to_string(),
            qoq_change: Some(3.456),
            yoy_growth: None,
            total_appreciation: 50.0,
            volatility: 8.164965809277259,
            max_growth: 10.0,
            max_decline: -10.0,
            growth_consistency: 200.0 / 3.0,
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            json!({
                "aum": 1_500_000.0,
                "quarter": "2024Q1",
                "qoq_change": "3.46",
                "yoy_growth": "N/A",
                "total_appreciation": "50.00",
                "volatility": "8.16",
                "max_growth": "10.00",
                "max_decline": "-10.00",
                "growth_consistency": "66.67",
            })
        );
    }

    #[test]
    fn default_stats_are_the_documented_empty_history_form() {
        let value = serde_json::to_value(FundStats::new()).unwrap();
        assert_eq!(value["quarter"], "");
        assert_eq!(value["qoq_change"], "N/A");
        assert_eq!(value["yoy_growth"], "N/A");
        assert_eq!(value["volatility"], "0.00");
        assert_eq!(value["growth_consistency"], "0.00");
    }

    #[test]
    fn undefined_change_point_serializes_as_null() {
        let point = ChangePoint {
            quarter: "2024Q1".to_string(),
            value: None,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value, json!({ "quarter": "2024Q1", "value": null }));
    }
}
