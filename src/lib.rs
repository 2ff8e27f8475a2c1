//! Guess resolution and game state for a daily country-guessing game.
//!
//! The player is shown a country outline and types country names. Each
//! name is normalized, matched against the localized [`Catalog`], scored
//! by distance and compass direction to the target, and appended to the
//! [`Round`]. A [`Game`] ties this to the difficulty [`Modifiers`].
//!
//! ```
//! use worldle_core::{Catalog, Direction, Game, Settings};
//!
//! let catalog = Catalog::builtin();
//! let target = catalog.get("FR").unwrap();
//! let mut game = Game::new(catalog, target, Settings::default());
//!
//! let miss = game.guess("spain").unwrap();
//! assert!(miss.distance().kilometers() > 500.0);
//!
//! let hit = game.guess("FRANCE").unwrap();
//! assert_eq!(hit.direction(), Direction::Exact);
//! assert!(game.is_won());
//! ```

pub mod catalog;
pub mod country;
pub mod game;
pub mod geo;
pub mod guess;
pub mod lang;
pub mod modifier;
pub mod normalizer;
pub mod resolver;
pub mod round;
pub mod settings;
pub mod stage;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use country::{Country, Point};
pub use game::{Game, GuessError};
pub use geo::{Compass, Direction, Distance, Evaluation, evaluate};
pub use guess::Guess;
pub use lang::{DEFAULT_LANG, ENG, FRA, HUN, Lang, NLD};
pub use modifier::{ModifierMode, Modifiers, Rotation};
pub use normalizer::{Normalizer, normalize};
pub use resolver::{resolve, suggest};
pub use round::{Round, RoundError, RoundState, Transition};
pub use settings::{DistanceUnit, Settings, Theme};
pub use stage::{Decompose, LowerCase, RemoveDiacritics, Stage, StripSeparators};
