use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::Velocity;
use uom::si::velocity::{kilometer_per_hour, meter_per_second, mile_per_hour};

/// unit of a raw speed value found in a route annotation, a configuration file
/// or a recorded trace. internally all speeds are [`Velocity`] values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    KilometersPerHour,
    MetersPerSecond,
    MilesPerHour,
}

impl SpeedUnit {
    pub fn to_velocity(&self, value: f64) -> Velocity {
        match self {
            SpeedUnit::KilometersPerHour => Velocity::new::<kilometer_per_hour>(value),
            SpeedUnit::MetersPerSecond => Velocity::new::<meter_per_second>(value),
            SpeedUnit::MilesPerHour => Velocity::new::<mile_per_hour>(value),
        }
    }

    pub fn from_velocity(&self, velocity: &Velocity) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => velocity.get::<kilometer_per_hour>(),
            SpeedUnit::MetersPerSecond => velocity.get::<meter_per_second>(),
            SpeedUnit::MilesPerHour => velocity.get::<mile_per_hour>(),
        }
    }
}

impl Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::MilesPerHour => "mph",
        };
        write!(f, "{s}")
    }
}
