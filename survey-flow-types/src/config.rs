use chrono::NaiveDate;
use serde::Deserialize;

/// Which bounds of a Range answer are matched against target ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMatch {
    /// Only the lower bound of the answered pair is the effective value.
    #[default]
    LowerBound,

    /// Both bounds must fall inside the target range.
    BothBounds,
}

/// What the loader does with a question whose type tag no decoder accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTypePolicy {
    /// Fail the whole load.
    #[default]
    Reject,

    /// Leave the question out and list it in the load report.
    Drop,
}

/// Sentinel tokens and validation toggles shared by the validator, resolver and runner.
///
/// Can be deserialized from an application's config file; missing fields fall back
/// to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Target destination that ends the survey.
    pub exit_target: String,

    /// Numerical answer meaning "below the minimum display value".
    pub below_minimum_token: String,

    /// Numerical answer meaning "above the maximum display value".
    pub above_maximum_token: String,

    /// chrono format for DateInput answers and date bounds.
    pub date_format: String,

    pub range_match: RangeMatch,

    /// Reject destinations that name no known question at load time instead of
    /// falling back to declared order at runtime.
    pub strict_targets: bool,

    pub unknown_question_types: UnknownTypePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exit_target: "exit".to_string(),
            below_minimum_token: "min_display".to_string(),
            above_maximum_token: "max_display".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            range_match: RangeMatch::default(),
            strict_targets: false,
            unknown_question_types: UnknownTypePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the default sentinels.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_target(mut self, token: impl Into<String>) -> Self {
        self.exit_target = token.into();
        self
    }

    /// Replace both Numerical display sentinels.
    pub fn with_display_tokens(
        mut self,
        below_minimum: impl Into<String>,
        above_maximum: impl Into<String>,
    ) -> Self {
        self.below_minimum_token = below_minimum.into();
        self.above_maximum_token = above_maximum.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_range_match(mut self, range_match: RangeMatch) -> Self {
        self.range_match = range_match;
        self
    }

    pub fn with_strict_targets(mut self, strict: bool) -> Self {
        self.strict_targets = strict;
        self
    }

    pub fn with_unknown_question_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_question_types = policy;
        self
    }

    /// Check if a target destination is the exit sentinel.
    pub fn is_exit(&self, destination: &str) -> bool {
        destination == self.exit_target
    }

    /// Parse a date string with the configured date-only format.
    pub fn parse_date(&self, value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, &self.date_format)
    }
}
