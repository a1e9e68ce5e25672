/// Players per team.
pub const TEAM_SIZE: usize = 2;
/// Points needed to win a game.
pub const TARGET_POINTS: u16 = 6;
/// Members required before a competition can start.
pub const MIN_COMPETITION_MEMBERS: usize = 4;
/// Bonus carried into the next decided round by each drawn round.
pub const DRAW_CARRY_BONUS: u16 = 1;
