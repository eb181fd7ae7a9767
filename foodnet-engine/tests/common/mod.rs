#![allow(dead_code)]

use foodnet_structs::core::{CargoItem, NodeDefinition, NodeKind, Urgency};

pub const SEED: [u8; 32] = [7u8; 32];

pub fn nyc_nodes() -> Vec<NodeDefinition> {
    vec![
        NodeDefinition::new("central_hub", NodeKind::Hub { capacity: 1000 }, 40.7128, -74.0060),
        NodeDefinition::new("donor_1", NodeKind::Donor { capacity: 200 }, 40.7589, -73.9851),
        NodeDefinition::new("donor_2", NodeKind::Donor { capacity: 150 }, 40.6892, -74.0445),
        NodeDefinition::new("donor_3", NodeKind::Donor { capacity: 180 }, 40.7505, -73.9934),
        NodeDefinition::new("ngo_1", NodeKind::Recipient { demand: 120 }, 40.6682, -73.9442),
        NodeDefinition::new("ngo_2", NodeKind::Recipient { demand: 80 }, 40.7282, -73.7949),
        NodeDefinition::new("ngo_3", NodeKind::Recipient { demand: 100 }, 40.8176, -73.9482),
        NodeDefinition::new("ngo_4", NodeKind::Recipient { demand: 90 }, 40.6428, -73.7854),
        NodeDefinition::new("storage_1", NodeKind::Storage { capacity: 300 }, 40.7831, -73.9712),
        NodeDefinition::new("storage_2", NodeKind::Storage { capacity: 250 }, 40.6178, -74.0357),
    ]
}

/// Hub plus three recipients.
pub fn small_nodes() -> Vec<NodeDefinition> {
    vec![
        NodeDefinition::new("hub", NodeKind::Hub { capacity: 500 }, 51.5074, -0.1278),
        NodeDefinition::new("pantry_a", NodeKind::Recipient { demand: 40 }, 51.5155, -0.0922),
        NodeDefinition::new("pantry_b", NodeKind::Recipient { demand: 110 }, 51.4975, -0.1357),
        NodeDefinition::new("pantry_c", NodeKind::Recipient { demand: 70 }, 51.5310, -0.1570),
    ]
}

pub fn cargo_items() -> Vec<CargoItem> {
    vec![
        CargoItem::new("Canned Goods", 20, 25, Urgency::High),
        CargoItem::new("Fresh Produce", 15, 30, Urgency::High),
        CargoItem::new("Dairy Products", 12, 28, Urgency::Medium),
        CargoItem::new("Bread & Bakery", 8, 20, Urgency::High),
        CargoItem::new("Frozen Foods", 25, 35, Urgency::Medium),
        CargoItem::new("Dry Goods", 18, 22, Urgency::Low),
    ]
}
