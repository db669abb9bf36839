use serde::{Deserialize, Serialize};

pub const DOCUMENTATION_MAX: f64 = 20.0;
pub const CODE_QUALITY_MAX: f64 = 20.0;
pub const ACTIVITY_MAX: f64 = 20.0;
pub const ORGANIZATION_MAX: f64 = 15.0;
pub const IMPACT_MAX: f64 = 15.0;
pub const TECHNICAL_DEPTH_MAX: f64 = 10.0;

/// Points per scoring category. Values are fractional; only the total is rounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub documentation: f64,
    pub code_quality: f64,
    pub activity: f64,
    pub organization: f64,
    pub impact: f64,
    pub technical_depth: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.documentation
            + self.code_quality
            + self.activity
            + self.organization
            + self.impact
            + self.technical_depth
    }

    /// Display rows in dashboard order: (label, value, max).
    pub fn rows(&self) -> [(&'static str, f64, f64); 6] {
        [
            ("Documentation", self.documentation, DOCUMENTATION_MAX),
            ("Code Quality", self.code_quality, CODE_QUALITY_MAX),
            ("Activity", self.activity, ACTIVITY_MAX),
            ("Organization", self.organization, ORGANIZATION_MAX),
            ("Impact", self.impact, IMPACT_MAX),
            ("Tech Depth", self.technical_depth, TECHNICAL_DEPTH_MAX),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileScore {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub details: ScoreDetails,
}

impl ProfileScore {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_total(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    NeedsWork,
    Fair,
    Strong,
    Exceptional,
}

impl ScoreTier {
    pub fn from_total(total: u32) -> Self {
        match total {
            t if t >= 90 => ScoreTier::Exceptional,
            t if t >= 75 => ScoreTier::Strong,
            t if t >= 50 => ScoreTier::Fair,
            _ => ScoreTier::NeedsWork,
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::NeedsWork => write!(f, "Needs Work"),
            ScoreTier::Fair => write!(f, "Fair"),
            ScoreTier::Strong => write!(f, "Strong"),
            ScoreTier::Exceptional => write!(f, "Exceptional"),
        }
    }
}
