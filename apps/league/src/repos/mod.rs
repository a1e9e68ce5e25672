//! Data-access seams used by the service layer.

pub mod competitions;
pub mod games;
pub mod players;

pub use competitions::CompetitionRepo;
pub use games::GameRepo;
pub use players::PlayerRepo;
