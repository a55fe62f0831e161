use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};
use crate::timeline::DEFAULT_TIME_SPAN;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Application id of the rerun recording.
    pub app_id: String,
    /// Both series are spread over `[0, time_span]`.
    pub time_span: f64,
    /// Also log 3D position trajectories next to the angle plots.
    pub log_trajectories: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            app_id: "vo_gt_compare".to_string(),
            time_span: DEFAULT_TIME_SPAN,
            log_trajectories: true,
        }
    }
}

impl CompareConfig {
    /// The synthetic axis needs a finite, positive span.
    pub fn validate(&self) -> Result<()> {
        if !self.time_span.is_finite() || self.time_span <= 0.0 {
            return Err(CompareError::InvalidTimeSpan(self.time_span));
        }
        Ok(())
    }
}
