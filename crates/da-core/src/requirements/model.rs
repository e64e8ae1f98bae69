use serde::{Deserialize, Serialize};

/// Budget bracket chosen on the complexity/budget step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
    Enterprise,
}

impl Budget {
    /// Human-readable bracket shown next to the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Low => "< 100k",
            Budget::Medium => "100k - 500k",
            Budget::High => "500k - 2M",
            Budget::Enterprise => "> 2M",
        }
    }
}

/// A fully collected set of project requirements, ready to be sent off for
/// analysis.
///
/// Field names serialize in camelCase to match the layout the rest of the
/// product consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequirements {
    pub project_type: String,
    pub target_platform: Vec<String>,
    /// 1 (very simple) ..= 5 (very complex).
    pub complexity: u8,
    pub budget: Budget,
    pub features: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
}

/// The in-progress snapshot accumulated across wizard steps.
///
/// Every field is optional and absent fields are omitted from the
/// serialized form, so a draft records only what the user has actually
/// entered. This is the `data` payload of a [`crate::draft::FormDraft`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_platform: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
}

impl PartialRequirements {
    /// Merge `update` into this snapshot. Present fields overwrite, absent
    /// fields keep their prior value (spread-update semantics).
    pub fn merge(&mut self, update: PartialRequirements) {
        if let Some(v) = update.project_type {
            self.project_type = Some(v);
        }
        if let Some(v) = update.target_platform {
            self.target_platform = Some(v);
        }
        if let Some(v) = update.complexity {
            self.complexity = Some(v);
        }
        if let Some(v) = update.budget {
            self.budget = Some(v);
        }
        if let Some(v) = update.features {
            self.features = Some(v);
        }
        if let Some(v) = update.description {
            self.description = Some(v);
        }
        if let Some(v) = update.timeline {
            self.timeline = Some(v);
        }
        if let Some(v) = update.team_size {
            self.team_size = Some(v);
        }
    }

    /// Complete the snapshot, filling the wizard's defaults for anything the
    /// user left untouched (complexity 3, medium budget, empty lists).
    pub fn into_complete(self) -> ProjectRequirements {
        ProjectRequirements {
            project_type: self.project_type.unwrap_or_default(),
            target_platform: self.target_platform.unwrap_or_default(),
            complexity: self.complexity.unwrap_or(3),
            budget: self.budget.unwrap_or(Budget::Medium),
            features: self.features.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            timeline: self.timeline,
            team_size: self.team_size,
        }
    }
}
