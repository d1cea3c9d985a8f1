//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are testable independently and serve as documentation of
//! what the history model guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(results: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod cursor_in_bounds;
pub mod single_mark_step;
pub mod starts_empty;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use single_mark_step::SingleMarkStepInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    StartsEmptyInvariant,
    SingleMarkStepInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 1, 5] {
            engine.play(cell).unwrap();
        }
        engine.jump_to(1).unwrap();
        engine.play(8).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.history.boards_mut()[0] = Board::new().with_mark(Position::Center, Player::X);
        engine.current_move = 7;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, StartsEmptyInvariant::description());
        assert_eq!(violations[1].description, CursorInBoundsInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameEngine::new()).is_ok());
    }
}
