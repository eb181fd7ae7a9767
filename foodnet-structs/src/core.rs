use crate::serializable_struct_with_getters;
use foodnet_utils::{haversine_km, is_valid_coordinate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lon)
    }

    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km((self.lat, self.lon), (other.lat, other.lon))
    }
}

/// What a location is, together with the quantity that only makes sense for that kind.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Hub { capacity: u32 },
    Donor { capacity: u32 },
    #[serde(alias = "ngo")]
    Recipient { demand: u32 },
    Storage { capacity: u32 },
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Hub { .. } => "hub",
            NodeKind::Donor { .. } => "donor",
            NodeKind::Recipient { .. } => "recipient",
            NodeKind::Storage { .. } => "storage",
        }
    }

    pub fn is_hub(&self) -> bool {
        matches!(self, NodeKind::Hub { .. })
    }

    pub fn is_donor(&self) -> bool {
        matches!(self, NodeKind::Donor { .. })
    }

    pub fn is_recipient(&self) -> bool {
        matches!(self, NodeKind::Recipient { .. })
    }

    pub fn capacity(&self) -> Option<u32> {
        match *self {
            NodeKind::Hub { capacity }
            | NodeKind::Donor { capacity }
            | NodeKind::Storage { capacity } => Some(capacity),
            NodeKind::Recipient { .. } => None,
        }
    }

    pub fn demand(&self) -> Option<u32> {
        match *self {
            NodeKind::Recipient { demand } => Some(demand),
            _ => None,
        }
    }
}

serializable_struct_with_getters! {
    NodeDefinition {
        id: String,
        #[serde(flatten)]
        kind: NodeKind,
        lat: f64,
        lon: f64,
    }
}

impl NodeDefinition {
    pub fn new(id: impl Into<String>, kind: NodeKind, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            lat,
            lon,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// `value > high_above` is high, `value > medium_above` is medium, anything else low.
    pub fn classify(value: u32, high_above: u32, medium_above: u32) -> Self {
        if value > high_above {
            Priority::High
        } else if value > medium_above {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    DeliveryTruck,
    CollectionVan,
    LargeTruck,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Distribution,
    Collection,
    MultiDelivery,
}

impl RouteKind {
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            RouteKind::Distribution => VehicleType::DeliveryTruck,
            RouteKind::Collection => VehicleType::CollectionVan,
            RouteKind::MultiDelivery => VehicleType::LargeTruck,
        }
    }
}

serializable_struct_with_getters! {
    Route {
        kind: RouteKind,
        origin: String,
        destination: String,
        path: Vec<String>,
        distance: f64,
        estimated_time: f64,
        priority: Priority,
        vehicle_type: VehicleType,
        stops: usize,
        efficiency_gain: Option<f64>,
    }
}

serializable_struct_with_getters! {
    Tour {
        path: Vec<String>,
        total_distance: f64,
        estimated_time: f64,
        efficiency_gain: f64,
    }
}

impl Tour {
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a point-to-point search. `Unreachable` carries an infinite cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Found { path: Vec<String>, cost: f64 },
    Unreachable,
}

impl PathResult {
    pub fn cost(&self) -> f64 {
        match self {
            PathResult::Found { cost, .. } => *cost,
            PathResult::Unreachable => f64::INFINITY,
        }
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }
}

serializable_struct_with_getters! {
    TreeEdge {
        from: String,
        to: String,
        weight: f64,
    }
}

serializable_struct_with_getters! {
    SpanningTree {
        edges: Vec<TreeEdge>,
        total_cost: f64,
        cost_reduction: f64,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

serializable_struct_with_getters! {
    CargoItem {
        #[serde(alias = "food_type")]
        category: String,
        weight: u32,
        value: u32,
        urgency: Urgency,
    }
}

impl CargoItem {
    pub fn new(category: impl Into<String>, weight: u32, value: u32, urgency: Urgency) -> Self {
        Self {
            category: category.into(),
            weight,
            value,
            urgency,
        }
    }

    /// Value per unit of weight. Weightless items with value rank above everything else.
    pub fn density(&self) -> f64 {
        match (self.weight, self.value) {
            (0, 0) => 0.0,
            (0, _) => f64::INFINITY,
            (w, v) => v as f64 / w as f64,
        }
    }
}

serializable_struct_with_getters! {
    AllocationResult {
        selected_items: Vec<CargoItem>,
        total_weight: u64,
        total_value: u64,
        capacity_utilization: f64,
        efficiency_score: f64,
    }
}

serializable_struct_with_getters! {
    NetworkAnalysis {
        total_nodes: usize,
        total_edges: usize,
        network_density: f64,
        average_clustering: f64,
        diameter: Option<usize>,
        center_nodes: Vec<String>,
        weighted_diameter: Option<f64>,
        weighted_center: Vec<String>,
    }
}

serializable_struct_with_getters! {
    Donation {
        id: String,
        quantity: u32,
    }
}

serializable_struct_with_getters! {
    RecipientUrgency {
        id: String,
        urgency: f64,
    }
}

serializable_struct_with_getters! {
    DonationMatch {
        recipient_id: String,
        donation_id: String,
    }
}
