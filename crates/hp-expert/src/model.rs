//! Recommendation records produced by the rule groups.

use serde::{Serialize, Serializer};

/// Priority rank; lower is more urgent. Serialized as its integer rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Critical = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn urgency(self) -> &'static str {
        match self {
            Priority::Critical => "immediate",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Critical,
    Installation,
    Velocity,
    HeadLoss,
    Materials,
    Electrical,
    Maintenance,
    Hydraulic,
    Efficiency,
}

/// A larger nominal diameter proposed for a fast leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiameterOption {
    /// Nominal diameter (mm)
    pub dn: u32,
    /// Resulting velocity (m/s)
    pub velocity: f64,
    /// Change of the leg's head loss versus the current diameter (%)
    pub head_loss_change_percent: f64,
    pub cost_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub category: Category,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub solutions: Vec<String>,
    pub urgency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_options: Option<Vec<DiameterOption>>,
}

impl Recommendation {
    pub fn new(category: Category, priority: Priority, title: impl Into<String>) -> Self {
        Self {
            category,
            priority,
            title: title.into(),
            description: String::new(),
            impact: String::new(),
            solutions: Vec::new(),
            urgency: priority.urgency(),
            diameter_options: None,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn impact(mut self, text: impl Into<String>) -> Self {
        self.impact = text.into();
        self
    }

    pub fn solutions<I, S>(mut self, solutions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.solutions = solutions.into_iter().map(Into::into).collect();
        self
    }

    pub fn diameter_options(mut self, options: Vec<DiameterOption>) -> Self {
        self.diameter_options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_contract_fields() {
        let rec = Recommendation::new(Category::HeadLoss, Priority::Medium, "Losses")
            .description("d")
            .solutions(["a", "b"]);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "head_loss");
        assert_eq!(json["priority"], 3);
        assert_eq!(json["urgency"], "medium");
        assert_eq!(json["solutions"].as_array().unwrap().len(), 2);
        assert!(json.get("diameter_options").is_none());
    }

    #[test]
    fn priorities_order_by_rank() {
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::Low.rank(), 4);
    }
}
