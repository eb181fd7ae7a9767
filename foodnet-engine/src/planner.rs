use crate::{error::Result, network::Network, tour::approximate_tour};
use foodnet_structs::{
    config::{CollectionPriorityPolicy, PlannerConfig},
    core::{PathResult, Priority, Route, RouteKind},
};
use foodnet_utils::round_to;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

pub struct RoutePlanner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Distribution, collection and multi-stop routes, high priority first.
    pub fn plan(&self) -> Result<Vec<Route>> {
        let mut routes = self.distribution_routes();
        routes.extend(self.collection_routes());
        if let Some(route) = self.multi_delivery_route()? {
            routes.push(route);
        }
        debug!("planned {} routes", routes.len());
        Ok(rank_routes(routes))
    }

    /// Hub to every recipient, ranked by the recipient's demand.
    pub fn distribution_routes(&self) -> Vec<Route> {
        let hub = self.network.hub_index();
        let thresholds = &self.config.demand_priority;
        self.network
            .recipients()
            .filter_map(|r| {
                let demand = self.network.node(r).kind.demand().unwrap_or(0);
                let priority =
                    Priority::classify(demand, thresholds.high_above, thresholds.medium_above);
                self.point_to_point(
                    RouteKind::Distribution,
                    hub,
                    r,
                    priority,
                    self.config.distribution_time_factor,
                )
            })
            .collect()
    }

    /// Every donor back to the hub.
    pub fn collection_routes(&self) -> Vec<Route> {
        let hub = self.network.hub_index();
        let mut rng = SmallRng::from_seed(self.network.planning_seed());
        let donors: Vec<usize> = self.network.donors().collect();
        donors
            .into_iter()
            .filter_map(|d| {
                let priority = self.collection_priority(d, &mut rng);
                self.point_to_point(
                    RouteKind::Collection,
                    d,
                    hub,
                    priority,
                    self.config.collection_time_factor,
                )
            })
            .collect()
    }

    /// One tour over the first `max_tour_stops` recipients, if there are at least two.
    pub fn multi_delivery_route(&self) -> Result<Option<Route>> {
        let stops: Vec<&str> = self
            .network
            .recipients()
            .take(self.config.max_tour_stops)
            .map(|r| self.network.node(r).id.as_str())
            .collect();
        let hub = self.network.hub().id.clone();
        Ok(
            approximate_tour(self.network, &stops, self.config.tour_time_factor)?.map(|tour| {
                Route {
                    kind: RouteKind::MultiDelivery,
                    origin: hub.clone(),
                    destination: hub,
                    stops: tour.stops(),
                    path: tour.path,
                    distance: tour.total_distance,
                    estimated_time: tour.estimated_time,
                    priority: Priority::Medium,
                    vehicle_type: RouteKind::MultiDelivery.vehicle_type(),
                    efficiency_gain: Some(tour.efficiency_gain),
                }
            }),
        )
    }

    fn collection_priority(&self, donor: usize, rng: &mut SmallRng) -> Priority {
        match self.config.collection_priority {
            CollectionPriorityPolicy::DonorCapacity => {
                let capacity = self.network.node(donor).kind.capacity().unwrap_or(0);
                let thresholds = &self.config.capacity_priority;
                Priority::classify(capacity, thresholds.high_above, thresholds.medium_above)
            }
            CollectionPriorityPolicy::Uniform => match rng.gen_range(0..3) {
                0 => Priority::High,
                1 => Priority::Medium,
                _ => Priority::Low,
            },
        }
    }

    fn point_to_point(
        &self,
        kind: RouteKind,
        from: usize,
        to: usize,
        priority: Priority,
        time_factor: f64,
    ) -> Option<Route> {
        match self.network.shortest_path_between(from, to) {
            PathResult::Found { path, cost } => Some(Route {
                kind,
                origin: self.network.node(from).id.clone(),
                destination: self.network.node(to).id.clone(),
                stops: path.len().saturating_sub(1),
                path,
                distance: round_to(cost, 2),
                estimated_time: round_to(cost * time_factor, 1),
                priority,
                vehicle_type: kind.vehicle_type(),
                efficiency_gain: None,
            }),
            PathResult::Unreachable => None,
        }
    }
}

/// Moves high-priority routes to the front, keeping relative order otherwise.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by_key(|r| r.priority != Priority::High);
    routes
}
