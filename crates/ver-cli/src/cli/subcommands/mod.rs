mod audit;
mod engagement;
mod regulation;

pub use audit::AuditCommands;
pub use engagement::EngagementCommands;
pub use regulation::RegulationCommands;
