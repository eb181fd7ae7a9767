use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub network: NetworkConfig,
    pub planner: PlannerConfig,
}

/// Bounds of the congestion multiplier sampled per edge at build time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub min_congestion: f64,
    pub max_congestion: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_congestion: 0.8,
            max_congestion: 1.3,
        }
    }
}

impl NetworkConfig {
    pub fn is_valid(&self) -> bool {
        self.min_congestion.is_finite()
            && self.max_congestion.is_finite()
            && self.min_congestion > 0.0
            && self.min_congestion <= self.max_congestion
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorityThresholds {
    pub high_above: u32,
    pub medium_above: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectionPriorityPolicy {
    /// Rank donors by the capacity they hold, like recipients are ranked by demand.
    #[default]
    DonorCapacity,
    /// Uniform draw from high/medium/low, seeded from the network seed.
    Uniform,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub distribution_time_factor: f64,
    pub collection_time_factor: f64,
    pub tour_time_factor: f64,
    pub max_tour_stops: usize,
    pub demand_priority: PriorityThresholds,
    pub capacity_priority: PriorityThresholds,
    pub collection_priority: CollectionPriorityPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            distribution_time_factor: 2.5,
            collection_time_factor: 2.5,
            tour_time_factor: 3.0,
            max_tour_stops: 3,
            demand_priority: PriorityThresholds {
                high_above: 100,
                medium_above: 60,
            },
            capacity_priority: PriorityThresholds {
                high_above: 180,
                medium_above: 120,
            },
            collection_priority: CollectionPriorityPolicy::DonorCapacity,
        }
    }
}
