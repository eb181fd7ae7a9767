mod common;

use common::*;
use foodnet_engine::*;
use foodnet_structs::core::{Donation, DonationMatch, RecipientUrgency};

fn donation(id: &str, quantity: u32) -> Donation {
    Donation {
        id: id.to_string(),
        quantity,
    }
}

fn recipient(id: &str, urgency: f64) -> RecipientUrgency {
    RecipientUrgency {
        id: id.to_string(),
        urgency,
    }
}

fn pairs(matches: &[DonationMatch]) -> Vec<(&str, &str)> {
    matches
        .iter()
        .map(|m| (m.recipient_id.as_str(), m.donation_id.as_str()))
        .collect()
}

#[test]
fn test_largest_donation_goes_to_most_urgent() {
    let donations = vec![donation("d1", 10), donation("d2", 50), donation("d3", 30)];
    let recipients = vec![
        recipient("r1", 0.2),
        recipient("r2", 0.9),
        recipient("r3", 0.5),
        recipient("r4", 0.1),
    ];
    let matches = match_donations(&donations, &recipients);
    assert_eq!(pairs(&matches), vec![("r2", "d2"), ("r3", "d3"), ("r1", "d1")]);
}

#[test]
fn test_surplus_donations_stay_unmatched() {
    let donations = vec![donation("d1", 5), donation("d2", 5), donation("d3", 5)];
    let recipients = vec![recipient("r1", 1.0)];
    assert_eq!(
        pairs(&match_donations(&donations, &recipients)),
        vec![("r1", "d1")]
    );
    assert!(match_donations(&[], &recipients).is_empty());
}

#[test]
fn test_network_recipients_use_demand() {
    let network = build_network(nyc_nodes(), Some(SEED)).unwrap();
    let urgencies = recipient_urgencies(&network);
    let demands: Vec<(&str, f64)> = urgencies.iter().map(|r| (r.id.as_str(), r.urgency)).collect();
    assert_eq!(
        demands,
        vec![("ngo_1", 120.0), ("ngo_2", 80.0), ("ngo_3", 100.0), ("ngo_4", 90.0)]
    );

    let donations = vec![donation("rice", 40), donation("milk", 90)];
    assert_eq!(
        pairs(&match_donations(&donations, &urgencies)),
        vec![("ngo_1", "milk"), ("ngo_3", "rice")]
    );
}
