use foodnet_structs::core::{AllocationResult, CargoItem};
use foodnet_utils::{percent_of, round_to};
use tracing::warn;

/// Greedy value-density load plan: items are taken in descending value/weight order
/// whenever they still fit.
///
/// An item that would overflow the capacity is skipped and the scan continues, since
/// lighter items further down the order may still fit. Items of equal density keep
/// their input order. This approximates the 0/1 knapsack; see [`allocate_exact`] for
/// the optimum.
pub fn allocate(items: &[CargoItem], capacity: i64) -> AllocationResult {
    if capacity <= 0 {
        return summarize(Vec::new(), capacity);
    }
    let capacity_u = capacity as u64;

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].density().total_cmp(&items[a].density()));

    let mut selected = Vec::new();
    let mut total_weight = 0u64;
    for i in order {
        let weight = items[i].weight as u64;
        if total_weight + weight <= capacity_u {
            total_weight += weight;
            selected.push(items[i].clone());
        }
    }
    summarize(selected, capacity)
}

/// Optimal 0/1 knapsack by dynamic programming over integer capacity.
///
/// Runs in O(capacity × items) time and memory, so it is only suitable when the
/// capacity is modest. The table never grows past the combined weight of all items,
/// since any larger capacity fits them all. When even that table cannot be addressed
/// the greedy plan is returned instead. Selected items are returned in input order.
pub fn allocate_exact(items: &[CargoItem], capacity: i64) -> AllocationResult {
    if capacity <= 0 {
        return summarize(Vec::new(), capacity);
    }
    let total_weight: u64 = items.iter().map(|i| i.weight as u64).sum();
    let table = usize::try_from((capacity as u64).min(total_weight))
        .ok()
        .and_then(|cap| cap.checked_add(1).map(|width| (cap, width)))
        .and_then(|(cap, width)| {
            items
                .len()
                .checked_mul(width)
                .map(|cells| (cap, width, cells))
        });
    let Some((cap, width, cells)) = table else {
        warn!(
            "knapsack table for {} items exceeds addressable memory, using greedy plan",
            items.len()
        );
        return allocate(items, capacity);
    };

    let mut dp: Vec<u64> = vec![0; width];
    let mut choose: Vec<bool> = vec![false; cells];
    for (t, item) in items.iter().enumerate() {
        let wt = item.weight as usize;
        if wt > cap {
            continue;
        }
        let val = item.value as u64;
        for w in (wt..=cap).rev() {
            let cand = dp[w - wt] + val;
            if cand > dp[w] {
                dp[w] = cand;
                choose[t * width + w] = true;
            }
        }
    }

    let mut picked = Vec::new();
    let mut w = cap;
    for t in (0..items.len()).rev() {
        if choose[t * width + w] {
            picked.push(t);
            w -= items[t].weight as usize;
        }
    }
    picked.reverse();

    summarize(picked.into_iter().map(|t| items[t].clone()).collect(), capacity)
}

fn summarize(selected: Vec<CargoItem>, capacity: i64) -> AllocationResult {
    let total_weight: u64 = selected.iter().map(|i| i.weight as u64).sum();
    let total_value: u64 = selected.iter().map(|i| i.value as u64).sum();
    let efficiency_score = if total_weight > 0 {
        round_to(total_value as f64 / total_weight as f64, 2)
    } else {
        0.0
    };
    AllocationResult {
        selected_items: selected,
        total_weight,
        total_value,
        capacity_utilization: round_to(percent_of(total_weight as f64, capacity as f64), 1),
        efficiency_score,
    }
}
