pub mod classifier;
pub mod error;
pub mod fixture;
pub mod infraction;
pub mod messages;
pub mod notice;

pub use classifier::classify;
pub use error::{InvalidSpeedInput, parse_speed};
pub use fixture::{Category, VehicleFixture, random_vehicle};
pub use infraction::{Assessment, Fine, Infraction, Penalty, SpeedLimit, Tier};
pub use notice::{Report, inspect};
