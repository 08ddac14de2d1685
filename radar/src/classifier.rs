use log::debug;

use crate::infraction::{Assessment, Infraction, SpeedLimit, Tier};

/// Classifies a speed reading against a limit.
///
/// Readings at or below the tolerated maximum are not infractions. Above it,
/// the excess is measured against the posted limit (not the tolerated one)
/// and mapped to a tier.
pub fn classify(speed: f64, limit: SpeedLimit) -> Assessment {
    let tolerated_max = limit.tolerated_max();
    if speed <= tolerated_max {
        debug!("{} km/h within tolerance ({} km/h)", speed, tolerated_max);
        return Assessment {
            tolerated_max,
            infraction: None,
        };
    }

    let posted = limit.kmh as f64;
    let excess_percent = (speed - posted) * 100.0 / posted;
    let tier = Tier::for_excess(excess_percent);
    debug!(
        "{} km/h is {:.2}% over {} km/h: {}",
        speed, excess_percent, limit.kmh, tier
    );

    Assessment {
        tolerated_max,
        infraction: Some(Infraction {
            tier,
            excess_percent,
            fine: tier.fine(),
            penalty: tier.penalty(),
        }),
    }
}
