//! A play session: resolves raw input against the catalog, scores it
//! against the current round and keeps the difficulty modifiers in step.

use crate::{
    catalog::Catalog,
    country::Country,
    guess::Guess,
    lang::DEFAULT_LANG,
    modifier::{Modifiers, Rotation},
    resolver,
    round::{Round, RoundError, Transition},
    settings::Settings,
};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Nothing in the catalog matches; the round is unchanged.
    #[error("unknown country: {0:?}")]
    UnknownCountry(String),

    #[error("the round is already won")]
    RoundAlreadyWon,
}

impl From<RoundError> for GuessError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::AlreadyWon => GuessError::RoundAlreadyWon,
        }
    }
}

pub struct Game<'c> {
    catalog: &'c Catalog,
    lang: String,
    settings: Settings,
    round: Round,
    modifiers: Modifiers,
    rotation: Rotation,
}

impl<'c> Game<'c> {
    /// Starts a session on `target`, which the caller picked (daily
    /// selection is not this crate's business).
    pub fn new(catalog: &'c Catalog, target: &Country, settings: Settings) -> Self {
        Self {
            catalog,
            lang: DEFAULT_LANG.code().to_string(),
            settings,
            round: Round::new(target.clone()),
            modifiers: Modifiers::from_settings(&settings),
            rotation: Rotation::random(&mut rand::rng()),
        }
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        self.set_language(lang);
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn set_language(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.lang
    }

    #[inline]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    pub fn guesses(&self) -> &[Guess] {
        self.round.guesses()
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.round.is_won()
    }

    #[inline]
    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Resolves `text`, scores it and appends it to the round.
    ///
    /// A winning guess clears both modifiers' temporary overrides before
    /// returning. Errors leave the session untouched.
    pub fn guess(&mut self, text: &str) -> Result<&Guess, GuessError> {
        if self.round.is_won() {
            warn!(guess = text, "submission after the round was won");
            return Err(GuessError::RoundAlreadyWon);
        }

        let catalog = self.catalog;
        let Some(country) = catalog.resolve(text, &self.lang) else {
            debug!(guess = text, lang = %self.lang, "unknown country");
            return Err(GuessError::UnknownCountry(text.to_string()));
        };

        let attempt = self.round.guesses().len() + 1;
        let (transition, guess) = self.round.submit(text, country)?;
        debug!(
            guess = guess.text(),
            country = country.code(),
            meters = guess.distance().meters(),
            direction = %guess.direction(),
            "guess accepted"
        );
        if transition == Transition::Won {
            self.modifiers.reset_temp_disabled_on_win();
            info!(country = country.code(), guesses = attempt, "round won");
        }
        Ok(guess)
    }

    /// Starts the next round. Modifiers carry over.
    pub fn next_round(&mut self, target: &Country) {
        self.round = Round::new(target.clone());
        self.rotation = Rotation::random(&mut rand::rng());
    }

    /// Settings changed outside the game; temporary overrides survive.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.modifiers.apply_settings(&settings);
        self.settings = settings;
    }

    /// "Show map": the outline stays visible for the rest of the round.
    pub fn reveal_image(&mut self) {
        self.modifiers.hide_image.set_temp_disabled();
    }

    /// "Cancel rotation" for the rest of the round.
    pub fn cancel_rotation(&mut self) {
        self.modifiers.rotation.set_temp_disabled();
    }

    pub fn is_image_hidden(&self) -> bool {
        self.modifiers.hide_image.is_active(self.is_won())
    }

    pub fn is_image_rotated(&self) -> bool {
        self.modifiers.rotation.is_active(self.is_won())
    }

    pub fn can_cancel_rotation(&self) -> bool {
        self.modifiers.can_cancel_rotation(self.is_won())
    }

    /// Target name in the active language.
    pub fn target_name(&self) -> &str {
        self.catalog.localized_name(self.round.target(), &self.lang)
    }

    pub fn target_image_path(&self) -> String {
        self.round.target().image_path()
    }

    /// Autocomplete candidates for partial input.
    pub fn suggestions(&self, input: &str) -> Vec<&'c str> {
        resolver::suggest(input, &self.lang, self.catalog)
    }
}
