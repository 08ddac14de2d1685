use std::fmt;

pub const DEFAULT_LIMIT: u16 = 80;
pub const DEFAULT_TOLERANCE: u8 = 10;

/// Posted limit of the road plus the tolerance granted before a reading counts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpeedLimit {
    pub kmh: u16,
    pub tolerance_percent: u8,
}

impl SpeedLimit {
    pub fn new(kmh: u16, tolerance_percent: u8) -> Self {
        SpeedLimit {
            kmh,
            tolerance_percent,
        }
    }

    /// Highest reading that is still not an infraction.
    pub fn tolerated_max(&self) -> f64 {
        let limit = self.kmh as f64;
        limit + limit * self.tolerance_percent as f64 / 100.0
    }
}

impl Default for SpeedLimit {
    fn default() -> Self {
        SpeedLimit::new(DEFAULT_LIMIT, DEFAULT_TOLERANCE)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tier {
    Medium,
    Serious,
    Severe,
}

impl Tier {
    /// Picks the tier for an excess over the posted limit, in percent.
    /// Upper bounds are inclusive: 20% is still Medium, 50% still Serious.
    pub fn for_excess(percent: f64) -> Tier {
        if percent <= 20.0 {
            Tier::Medium
        } else if percent <= 50.0 {
            Tier::Serious
        } else {
            Tier::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Medium => "Medium",
            Tier::Serious => "Serious",
            Tier::Severe => "Severe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Medium => "Medium infraction: up to 20% above the limit.",
            Tier::Serious => "Serious infraction: between 20% and 50% above the limit.",
            Tier::Severe => "Severe infraction: more than 50% above the limit.",
        }
    }

    pub fn fine(&self) -> Fine {
        match self {
            Tier::Medium => Fine::from_cents(19350),
            Tier::Serious => Fine::from_cents(47850),
            Tier::Severe => Fine::from_cents(146110),
        }
    }

    pub fn penalty(&self) -> Penalty {
        match self {
            Tier::Medium => Penalty::Points(4),
            Tier::Serious => Penalty::Points(5),
            Tier::Severe => Penalty::LicenseSuspension,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fine amount in reais, kept in cents so amounts stay exact.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Fine(u32);

impl Fine {
    pub fn from_cents(cents: u32) -> Self {
        Fine(cents)
    }

    pub fn cents(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Penalty {
    Points(u8),
    LicenseSuspension,
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Penalty::Points(n) => write!(f, "{}", n),
            Penalty::LicenseSuspension => f.write_str("Immediate license suspension"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Infraction {
    pub tier: Tier,
    pub excess_percent: f64,
    pub fine: Fine,
    pub penalty: Penalty,
}

/// Outcome of classifying one reading.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Assessment {
    pub tolerated_max: f64,
    pub infraction: Option<Infraction>,
}

impl Assessment {
    pub fn has_infraction(&self) -> bool {
        self.infraction.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let limit = SpeedLimit::default();
        assert_eq!(limit.kmh, 80);
        assert_eq!(limit.tolerance_percent, 10);
        assert_eq!(limit.tolerated_max(), 88.0);
    }

    #[test]
    fn test_tier_bands_are_contiguous() {
        assert_eq!(Tier::for_excess(0.01), Tier::Medium);
        assert_eq!(Tier::for_excess(20.0), Tier::Medium);
        assert_eq!(Tier::for_excess(20.01), Tier::Serious);
        assert_eq!(Tier::for_excess(50.0), Tier::Serious);
        assert_eq!(Tier::for_excess(50.01), Tier::Severe);
        assert_eq!(Tier::for_excess(400.0), Tier::Severe);
    }

    #[test]
    fn test_fine_display() {
        assert_eq!(Tier::Medium.fine().to_string(), "R$193.50");
        assert_eq!(Tier::Serious.fine().to_string(), "R$478.50");
        assert_eq!(Tier::Severe.fine().to_string(), "R$1461.10");
        assert_eq!(Fine::from_cents(5).to_string(), "R$0.05");
    }

    #[test]
    fn test_penalty_display() {
        assert_eq!(Tier::Medium.penalty().to_string(), "4");
        assert_eq!(
            Tier::Severe.penalty().to_string(),
            "Immediate license suspension"
        );
    }
}
