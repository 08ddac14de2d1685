use log::info;
use rand::Rng;
use std::fmt;

use crate::classifier::classify;
use crate::error::{InvalidSpeedInput, parse_speed};
use crate::fixture::{VehicleFixture, random_vehicle};
use crate::infraction::{Assessment, Fine, Penalty, SpeedLimit};

/// Everything a front end needs to show for one checked reading.
#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub speed: f64,
    pub limit: SpeedLimit,
    pub assessment: Assessment,
    pub vehicle: VehicleFixture,
}

impl Report {
    pub fn tolerated_max(&self) -> f64 {
        self.assessment.tolerated_max
    }

    pub fn has_infraction(&self) -> bool {
        self.assessment.has_infraction()
    }

    pub fn tier_label(&self) -> Option<&'static str> {
        self.assessment.infraction.map(|i| i.tier.label())
    }

    pub fn fine(&self) -> Option<Fine> {
        self.assessment.infraction.map(|i| i.fine)
    }

    pub fn penalty(&self) -> Option<Penalty> {
        self.assessment.infraction.map(|i| i.penalty)
    }
}

/// Checks one raw reading typed by the operator.
///
/// Nothing is generated when the reading does not parse.
pub fn inspect<R: Rng + ?Sized>(
    raw: &str,
    limit: SpeedLimit,
    rng: &mut R,
) -> Result<Report, InvalidSpeedInput> {
    let speed = parse_speed(raw)?;
    let vehicle = random_vehicle(rng);
    let assessment = classify(speed, limit);
    if let Some(infraction) = assessment.infraction {
        info!(
            "{} ({}) at {} km/h: {} infraction",
            vehicle.plate, vehicle.category, speed, infraction.tier
        );
    }

    Ok(Report {
        speed,
        limit,
        assessment,
        vehicle,
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.tolerated_max();
        writeln!(
            f,
            "Road limit: {} km/h (+{}% = {:.1} km/h)",
            self.limit.kmh, self.limit.tolerance_percent, max
        )?;

        let infraction = match self.assessment.infraction {
            Some(i) => i,
            None => return writeln!(f, "Within the permitted speed. No infraction recorded."),
        };
        let description = infraction.tier.description();

        writeln!(f)?;
        writeln!(f, "INFRACTION DETECTED!")?;
        writeln!(f, "{}", description)?;
        writeln!(f, "Fine: {}", infraction.fine)?;
        writeln!(f, "Points: {}", infraction.penalty)?;

        let v = &self.vehicle;
        writeln!(f)?;
        writeln!(f, "=== INFRACTION NOTICE ===")?;
        writeln!(f, "Vehicle: {} ({})", v.model.to_uppercase(), v.category)?;
        writeln!(
            f,
            "Color: {} | Year/Model: {}/{}",
            capitalize(v.color),
            v.year,
            v.year + 1
        )?;
        writeln!(f, "Plate: {}", v.plate)?;
        writeln!(f, "Recorded speed: {:.1} km/h", self.speed)?;
        writeln!(f, "Permitted speed (with tolerance): up to {:.1} km/h", max)?;
        writeln!(f, "Infraction: {}", description)?;
        writeln!(f, "Fine amount: {}", infraction.fine)?;
        writeln!(f, "License points: {}", infraction.penalty)?;
        writeln!(f, "This notice will be sent to the vehicle owner.")
    }
}
