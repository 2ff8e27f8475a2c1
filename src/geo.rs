//! Distance and direction between two countries.
//!
//! Distances are great-circle distances on a sphere of the WGS-84
//! equatorial radius, in meters. Directions come from the rhumb-line
//! (constant bearing) course, bucketed to the nearest 45°.

use crate::{
    country::{Country, Point},
    settings::DistanceUnit,
};
use std::{f64::consts::PI, fmt};

pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Half the circumference, rounded; the proximity scale runs from here to 0.
pub const MAX_DISTANCE_ON_EARTH_METERS: f64 = 20_000_000.0;

const MILES_PER_KILOMETER: f64 = 0.621371;

/// Mercator latitude is unbounded at the poles; rhumb courses are computed
/// as if a pole point sat this close to it.
const MAX_RHUMB_LATITUDE: f64 = 89.999_999;

/// Haversine distance in meters. Exactly symmetric, and exactly `0.0` for
/// points at the same place (including one pole at two longitudes).
pub fn great_circle_distance(from: Point, to: Point) -> f64 {
    if from.same_place(&to) {
        return 0.0;
    }
    // abs() keeps the result bit-identical when the arguments are swapped
    let d_lat = (to.latitude - from.latitude).abs().to_radians();
    let d_lon = (to.longitude - from.longitude).abs().to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_METERS * c
}

/// Initial rhumb-line bearing from `from` to `to`, in degrees [0, 360).
///
/// Crossing the antimeridian takes the short way round. Pole latitudes are
/// pulled just inside the pole, so the result is always finite.
pub fn rhumb_line_bearing(from: Point, to: Point) -> f64 {
    let mut d_lon = (to.longitude - from.longitude).to_radians();
    let d_phi = mercator_latitude(to.latitude) - mercator_latitude(from.latitude);

    if d_lon.abs() > PI {
        d_lon = if d_lon > 0.0 {
            -(2.0 * PI - d_lon)
        } else {
            2.0 * PI + d_lon
        };
    }

    (d_lon.atan2(d_phi).to_degrees() + 360.0) % 360.0
}

fn mercator_latitude(latitude: f64) -> f64 {
    let phi = latitude
        .clamp(-MAX_RHUMB_LATITUDE, MAX_RHUMB_LATITUDE)
        .to_radians();
    (phi / 2.0 + PI / 4.0).tan().ln()
}

/// One of the eight 45° compass buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// Rounds half up to the nearest multiple of 45°; 360 wraps to N.
    pub fn from_bearing(degrees: f64) -> Compass {
        let step = (degrees.rem_euclid(360.0) / 45.0 + 0.5).floor() as usize;
        Self::ALL[step % 8]
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Compass::N => 0,
            Compass::NE => 45,
            Compass::E => 90,
            Compass::SE => 135,
            Compass::S => 180,
            Compass::SW => 225,
            Compass::W => 270,
            Compass::NW => 315,
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Compass::N => "⬆️",
            Compass::NE => "↗️",
            Compass::E => "➡️",
            Compass::SE => "↘️",
            Compass::S => "⬇️",
            Compass::SW => "↙️",
            Compass::W => "⬅️",
            Compass::NW => "↖️",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NE => "NE",
            Compass::E => "E",
            Compass::SE => "SE",
            Compass::S => "S",
            Compass::SW => "SW",
            Compass::W => "W",
            Compass::NW => "NW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the target lies from the guess.
///
/// `Exact` is not a compass bucket: a zero-distance guess has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Exact,
    Toward(Compass),
}

impl Direction {
    pub fn compass(self) -> Option<Compass> {
        match self {
            Direction::Exact => None,
            Direction::Toward(c) => Some(c),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Exact => "🎉",
            Direction::Toward(c) => c.arrow(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Exact => f.write_str("exact"),
            Direction::Toward(c) => c.fmt(f),
        }
    }
}

/// A non-negative distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Negative and non-finite inputs clamp to zero.
    pub fn from_meters(meters: f64) -> Self {
        if meters.is_finite() && meters > 0.0 {
            Distance(meters)
        } else {
            Distance::ZERO
        }
    }

    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilometers(self) -> f64 {
        self.0 / 1000.0
    }

    #[inline]
    pub fn miles(self) -> f64 {
        self.kilometers() * MILES_PER_KILOMETER
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn in_unit(self, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Km => self.kilometers(),
            DistanceUnit::Miles => self.miles(),
        }
    }

    /// Rounded display string: `"804km"`, `"500mi"`.
    pub fn format(self, unit: DistanceUnit) -> String {
        format!("{}{}", self.in_unit(unit).round() as u64, unit.suffix())
    }

    /// 100 for an exact guess, 0 at the far side of the planet.
    pub fn proximity_percent(self) -> u8 {
        let remaining = (MAX_DISTANCE_ON_EARTH_METERS - self.0).max(0.0);
        (remaining / MAX_DISTANCE_ON_EARTH_METERS * 100.0).floor() as u8
    }
}

/// Result of comparing a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub distance: Distance,
    pub direction: Direction,
}

/// Distance from `guessed` to `target`, and the compass bucket pointing
/// from `guessed` toward `target`.
pub fn evaluate(guessed: &Country, target: &Country) -> Evaluation {
    let from = guessed.position();
    let to = target.position();
    let distance = Distance::from_meters(great_circle_distance(from, to));
    let direction = if distance.is_zero() {
        Direction::Exact
    } else {
        Direction::Toward(Compass::from_bearing(rhumb_line_bearing(from, to)))
    };
    Evaluation {
        distance,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> Country {
        Country::new("FR", 46.2, 2.2, "France")
    }

    fn spain() -> Country {
        Country::new("ES", 40.4, -3.7, "Spain")
    }

    #[test]
    fn test_spain_to_france() {
        let e = evaluate(&spain(), &france());
        let km = e.distance.kilometers();
        assert!((790.0..820.0).contains(&km), "{km}");
        assert_eq!(e.direction, Direction::Toward(Compass::NE));

        let back = evaluate(&france(), &spain());
        assert_eq!(back.distance, e.distance);
        assert_eq!(back.direction, Direction::Toward(Compass::SW));
    }

    #[test]
    fn test_self_is_exact() {
        let e = evaluate(&france(), &france());
        assert!(e.distance.is_zero());
        assert_eq!(e.direction, Direction::Exact);
        assert_eq!(e.direction.compass(), None);
        assert_eq!(e.distance.proximity_percent(), 100);
    }

    #[test]
    fn test_cardinal_bearings() {
        let origin = Point::new(0.0, 0.0);
        let b = |lat, lon| rhumb_line_bearing(origin, Point::new(lat, lon));
        assert!((b(10.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((b(0.0, 10.0) - 90.0).abs() < 1e-9);
        assert!((b(-10.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((b(0.0, -10.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_takes_short_way() {
        let fiji = Point::new(-16.578193, 179.414413);
        let samoa = Point::new(-13.759029, -172.104629);
        let bearing = rhumb_line_bearing(fiji, samoa);
        assert!(bearing > 45.0 && bearing < 90.0, "{bearing}");
    }

    #[test]
    fn test_one_pole_two_longitudes_is_exact() {
        let a = Country::new("AA", -90.0, 0.0, "A");
        let b = Country::new("BB", -90.0, 10.0, "B");
        let e = evaluate(&a, &b);
        assert_eq!(e.distance.meters(), 0.0);
        assert_eq!(e.direction, Direction::Exact);

        let c = Country::new("CC", 5.0, 180.0, "C");
        let d = Country::new("DD", 5.0, -180.0, "D");
        assert_eq!(evaluate(&c, &d).direction, Direction::Exact);
    }

    #[test]
    fn test_pole_bearings_are_finite() {
        let south = Point::new(-90.0, 0.0);
        let north = Point::new(90.0, 30.0);
        let quito = Point::new(0.0, -78.5);

        let b = rhumb_line_bearing(south, quito);
        assert!(b.is_finite());
        assert_eq!(Compass::from_bearing(b), Compass::N);

        let b = rhumb_line_bearing(quito, south);
        assert!(b.is_finite());
        assert_eq!(Compass::from_bearing(b), Compass::S);

        let b = rhumb_line_bearing(south, north);
        assert!(b.is_finite());
        assert_eq!(Compass::from_bearing(b), Compass::N);

        let e = evaluate(
            &Country::new("AQ", -90.0, 0.0, "South Pole"),
            &Country::new("EC", 0.0, -78.5, "Ecuador"),
        );
        assert_eq!(e.direction, Direction::Toward(Compass::N));
        assert!((e.distance.meters() - PI / 2.0 * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn test_antipodes_have_a_direction() {
        let a = Country::new("AA", 10.0, 20.0, "A");
        let b = Country::new("BB", -10.0, -160.0, "B");
        let e = evaluate(&a, &b);
        assert!((e.distance.meters() - PI * EARTH_RADIUS_METERS).abs() < 1.0);
        assert!(e.direction.compass().is_some());
    }

    #[test]
    fn test_bucket_rounding() {
        assert_eq!(Compass::from_bearing(0.0), Compass::N);
        assert_eq!(Compass::from_bearing(22.4), Compass::N);
        assert_eq!(Compass::from_bearing(22.5), Compass::NE);
        assert_eq!(Compass::from_bearing(67.5), Compass::E);
        assert_eq!(Compass::from_bearing(337.4), Compass::NW);
        assert_eq!(Compass::from_bearing(337.5), Compass::N);
        assert_eq!(Compass::from_bearing(359.9), Compass::N);
        assert_eq!(Compass::from_bearing(360.0), Compass::N);
    }

    #[test]
    fn test_compass_degrees_are_multiples_of_45() {
        for (i, c) in Compass::ALL.iter().enumerate() {
            assert_eq!(c.degrees() as usize, i * 45);
            assert_eq!(Compass::from_bearing(c.degrees() as f64), *c);
        }
    }

    #[test]
    fn test_distance_display() {
        let d = Distance::from_meters(804_321.0);
        assert_eq!(d.format(DistanceUnit::Km), "804km");
        assert_eq!(d.format(DistanceUnit::Miles), "500mi");
        assert_eq!(Distance::ZERO.format(DistanceUnit::Km), "0km");
    }

    #[test]
    fn test_distance_clamps() {
        assert!(Distance::from_meters(-5.0).is_zero());
        assert!(Distance::from_meters(f64::NAN).is_zero());
    }

    #[test]
    fn test_proximity() {
        assert_eq!(Distance::from_meters(10_000_000.0).proximity_percent(), 50);
        assert_eq!(Distance::from_meters(19_999_999.0).proximity_percent(), 0);
        assert_eq!(Distance::from_meters(25_000_000.0).proximity_percent(), 0);
        assert_eq!(Distance::from_meters(1.0).proximity_percent(), 99);
    }

    #[test]
    fn test_direction_glyphs() {
        assert_eq!(Direction::Exact.arrow(), "🎉");
        assert_eq!(Direction::Toward(Compass::SW).arrow(), "↙️");
        assert_eq!(Direction::Toward(Compass::SW).to_string(), "SW");
    }
}
