pub mod analyze;
pub mod audit;
pub mod dispatch;
pub mod engagement;
pub mod extract;
pub mod regulation;
pub mod scenario;
pub mod schema;
pub mod shared;
