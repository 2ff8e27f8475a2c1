//! Round lifecycle: one target, an append-only guess history, and the won
//! condition derived from it.

use crate::{country::Country, geo, guess::Guess};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("the round is already won")]
    AlreadyWon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Active,
    Won,
}

/// What a successful submission did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Still active.
    Continued,
    /// This guess won the round.
    Won,
}

#[derive(Debug, Clone)]
pub struct Round {
    target: Country,
    guesses: Vec<Guess>,
}

impl Round {
    pub fn new(target: Country) -> Self {
        Self {
            target,
            guesses: Vec::new(),
        }
    }

    #[inline]
    pub fn target(&self) -> &Country {
        &self.target
    }

    /// Guesses in submission order.
    #[inline]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The last guess landed on the target.
    pub fn is_won(&self) -> bool {
        self.guesses.last().is_some_and(Guess::is_exact)
    }

    pub fn state(&self) -> RoundState {
        if self.is_won() {
            RoundState::Won
        } else {
            RoundState::Active
        }
    }

    /// Evaluates `guessed` against the target and appends the result.
    ///
    /// Rejected with [`RoundError::AlreadyWon`] once the round is won; the
    /// history is unchanged in that case.
    pub fn submit(
        &mut self,
        text: impl Into<String>,
        guessed: &Country,
    ) -> Result<(Transition, &Guess), RoundError> {
        if self.is_won() {
            return Err(RoundError::AlreadyWon);
        }
        let guess = Guess::new(text, geo::evaluate(guessed, &self.target));
        let transition = if guess.is_exact() {
            Transition::Won
        } else {
            Transition::Continued
        };
        self.guesses.push(guess);
        Ok((transition, &self.guesses[self.guesses.len() - 1]))
    }

    /// Smallest distance so far, if any guess was made.
    pub fn best_guess(&self) -> Option<&Guess> {
        self.guesses
            .iter()
            .min_by(|a, b| a.distance().meters().total_cmp(&b.distance().meters()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Compass, Direction};

    fn france() -> Country {
        Country::new("FR", 46.2, 2.2, "France")
    }

    fn spain() -> Country {
        Country::new("ES", 40.4, -3.7, "Spain")
    }

    #[test]
    fn test_new_round_is_active() {
        let round = Round::new(france());
        assert_eq!(round.state(), RoundState::Active);
        assert!(round.guesses().is_empty());
        assert!(round.best_guess().is_none());
    }

    #[test]
    fn test_miss_then_win() {
        let mut round = Round::new(france());

        let (transition, guess) = round.submit("spain", &spain()).unwrap();
        assert_eq!(transition, Transition::Continued);
        assert_eq!(guess.text(), "spain");
        assert!(!round.is_won());
        assert_eq!(
            round.guesses()[0].direction(),
            Direction::Toward(Compass::NE)
        );

        assert_eq!(round.submit("FRANCE", &france()).unwrap().0, Transition::Won);
        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.guesses().len(), 2);
        assert_eq!(round.guesses()[1].text(), "FRANCE");
        assert_eq!(round.guesses()[1].direction(), Direction::Exact);
        assert_eq!(round.best_guess().unwrap().text(), "FRANCE");
    }

    #[test]
    fn test_late_submission_rejected() {
        let mut round = Round::new(france());
        round.submit("France", &france()).unwrap();
        assert_eq!(
            round.submit("Spain", &spain()).unwrap_err(),
            RoundError::AlreadyWon
        );
        assert_eq!(round.guesses().len(), 1);
        assert!(round.is_won());
    }

    #[test]
    fn test_repeated_guesses_are_kept() {
        let mut round = Round::new(france());
        round.submit("Spain", &spain()).unwrap();
        round.submit("spain", &spain()).unwrap();
        let texts: Vec<_> = round.guesses().iter().map(Guess::text).collect();
        assert_eq!(texts, ["Spain", "spain"]);
    }
}
