/// Coarse view of whose turn it is, derived from the session flags.
///
/// Phases are checked in declaration order of precedence: a finished game
/// reports `GameOver` regardless of any other flag, a level that is still
/// showing its intro banner reports `Setup`, and so on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurnPhase {
    /// No level has been started yet.
    Inactive,
    /// Intro banner is up; enemies may not move.
    Setup,
    /// The player may act.
    PlayerTurn,
    /// The player ended their turn and the next tick will start the enemy pass.
    EnemyTurnPending,
    /// The enemy pass is executing.
    EnemyTurn,
    /// Terminal state.
    GameOver,
}

