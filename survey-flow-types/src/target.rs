use crate::EngineConfig;

/// The trigger condition of a skip-logic target.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// Matches values inside `[min, max]`. A missing bound is unbounded on that side.
    Range { min: Option<f64>, max: Option<f64> },
}

impl Criteria {
    /// Check if a value satisfies this criteria.
    pub fn matches(&self, value: f64) -> bool {
        match self {
            Self::Range { min, max } => {
                if let Some(min) = min
                    && value < *min
                {
                    return false;
                }
                if let Some(max) = max
                    && value > *max
                {
                    return false;
                }
                true
            }
        }
    }
}

/// A skip-logic rule: when the criteria matches, go to `destination`.
///
/// The destination is either a question id or the exit sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    destination: String,
    criteria: Criteria,
}

impl Target {
    pub fn new(destination: impl Into<String>, criteria: Criteria) -> Self {
        Self {
            destination: destination.into(),
            criteria,
        }
    }

    /// Create a range target.
    pub fn range(destination: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(destination, Criteria::Range { min, max })
    }

    /// Create a target that matches every value (option targets usually look like this).
    pub fn always(destination: impl Into<String>) -> Self {
        Self::range(destination, None, None)
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn matches(&self, value: f64) -> bool {
        self.criteria.matches(value)
    }

    /// Check if this target ends the survey.
    pub fn is_exit(&self, config: &EngineConfig) -> bool {
        config.is_exit(&self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_range_is_inclusive() {
        let target = Target::range("q3", Some(5.0), Some(10.0));
        assert!(target.matches(5.0));
        assert!(target.matches(10.0));
        assert!(!target.matches(4.999));
        assert!(!target.matches(10.5));
    }

    #[test]
    fn open_ends() {
        assert!(Target::range("q", None, Some(0.0)).matches(-1e9));
        assert!(Target::range("q", Some(0.0), None).matches(1e9));
        assert!(Target::always("q").matches(f64::MIN));
    }

    #[test]
    fn exit_follows_config() {
        let config = EngineConfig::default();
        assert!(Target::always("exit").is_exit(&config));
        assert!(!Target::always("q2").is_exit(&config));
        assert!(Target::always("done").is_exit(&config.with_exit_target("done")));
    }
}
