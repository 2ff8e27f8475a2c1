use crate::{
    geo::{Direction, Distance, Evaluation},
    settings::DistanceUnit,
};

/// One accepted guess. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guess {
    text: String,
    distance: Distance,
    direction: Direction,
}

impl Guess {
    pub fn new(text: impl Into<String>, evaluation: Evaluation) -> Self {
        Self {
            text: text.into(),
            distance: evaluation.distance,
            direction: evaluation.direction,
        }
    }

    /// What the player typed, as typed.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance.is_zero()
    }

    pub fn proximity_percent(&self) -> u8 {
        self.distance.proximity_percent()
    }

    /// `"804km ↗️"` style summary for a guess row.
    pub fn summary(&self, unit: DistanceUnit) -> String {
        format!("{} {}", self.distance.format(unit), self.direction.arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Compass;

    #[test]
    fn test_accessors() {
        let g = Guess::new(
            "spain",
            Evaluation {
                distance: Distance::from_meters(802_828.0),
                direction: Direction::Toward(Compass::NE),
            },
        );
        assert_eq!(g.text(), "spain");
        assert!(!g.is_exact());
        assert_eq!(g.proximity_percent(), 95);
        assert_eq!(g.summary(DistanceUnit::Km), "803km ↗️");
    }

    #[test]
    fn test_exact() {
        let g = Guess::new(
            "France",
            Evaluation {
                distance: Distance::ZERO,
                direction: Direction::Exact,
            },
        );
        assert!(g.is_exact());
        assert_eq!(g.summary(DistanceUnit::Miles), "0mi 🎉");
    }
}
