//! Async service layer over the repositories.

pub mod competitions;
pub mod games;
pub mod rankings;
pub mod statistics;

pub use competitions::CompetitionService;
pub use games::GameService;
pub use rankings::RankingService;
pub use statistics::StatisticsService;
