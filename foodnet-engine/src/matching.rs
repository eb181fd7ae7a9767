use crate::network::Network;
use foodnet_structs::core::{Donation, DonationMatch, RecipientUrgency};
use std::cmp::Reverse;

/// Pairs the most urgent recipients with the largest donations, one donation each,
/// until either side runs out. Ties keep their input order.
pub fn match_donations(
    donations: &[Donation],
    recipients: &[RecipientUrgency],
) -> Vec<DonationMatch> {
    let mut donations: Vec<&Donation> = donations.iter().collect();
    donations.sort_by_key(|d| Reverse(d.quantity));
    let mut recipients: Vec<&RecipientUrgency> = recipients.iter().collect();
    recipients.sort_by(|a, b| b.urgency.total_cmp(&a.urgency));

    recipients
        .into_iter()
        .zip(donations)
        .map(|(r, d)| DonationMatch {
            recipient_id: r.id.clone(),
            donation_id: d.id.clone(),
        })
        .collect()
}

/// Recipients of the network with their demand as urgency, in node order.
pub fn recipient_urgencies(network: &Network) -> Vec<RecipientUrgency> {
    network
        .recipients()
        .map(|r| {
            let node = network.node(r);
            RecipientUrgency {
                id: node.id.clone(),
                urgency: node.kind.demand().unwrap_or(0) as f64,
            }
        })
        .collect()
}
