use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    Standard,
    Luxury,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 3] = [TravelStyle::Budget, TravelStyle::Standard, TravelStyle::Luxury];

    pub fn keyword(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "budget",
            TravelStyle::Standard => "standard",
            TravelStyle::Luxury => "luxury",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for TravelStyle {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(TravelStyle::Budget),
            "standard" => Ok(TravelStyle::Standard),
            "luxury" => Ok(TravelStyle::Luxury),
            other => Err(PlannerError::InvalidStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sight,
    Activity,
    Nature,
    Culture,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Sight,
        ActivityType::Activity,
        ActivityType::Nature,
        ActivityType::Culture,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            ActivityType::Sight => "sight",
            ActivityType::Activity => "activity",
            ActivityType::Nature => "nature",
            ActivityType::Culture => "culture",
        }
    }
}

#[derive(Debug)]
pub enum PlannerError {
    UnknownRegion(String),
    InvalidStyle(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::UnknownRegion(region) => {
                write!(f, "No data available for region: {}", region)
            }
            PlannerError::InvalidStyle(style) => write!(f, "Unknown travel style: {}", style),
        }
    }
}

impl std::error::Error for PlannerError {}

/// Per-unit cost of one expense category across the three travel styles.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct CostTier {
    pub budget: u32,
    pub standard: u32,
    pub luxury: u32,
}

impl CostTier {
    pub fn for_style(&self, style: TravelStyle) -> u32 {
        match style {
            TravelStyle::Budget => self.budget,
            TravelStyle::Standard => self.standard,
            TravelStyle::Luxury => self.luxury,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct RegionCosts {
    pub accommodation: CostTier,
    pub food: CostTier,
    pub transportation: CostTier,
    pub activities: CostTier,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegionAttraction {
    pub name: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_hours: u32,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegionItinerary {
    pub attractions: Vec<RegionAttraction>,
    pub recommended_days: Vec<u32>,
    pub best_time_to_visit: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Region {
    pub name: String,
    pub costs: RegionCosts,
    pub itinerary: RegionItinerary,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseBreakdown {
    pub accommodation: u64,
    pub food: u64,
    pub transportation: u64,
    pub activities: u64,
}

impl ExpenseBreakdown {
    pub fn sum(&self) -> u64 {
        self.accommodation + self.food + self.transportation + self.activities
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseEstimate {
    pub total: u64,
    pub breakdown: ExpenseBreakdown,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledVisit {
    pub attraction: RegionAttraction,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DailyPlan {
    pub day: u32,
    pub activities: Vec<ScheduledVisit>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub daily_plan: Vec<DailyPlan>,
    pub tips: Vec<String>,
    pub best_time_to_visit: String,
}
