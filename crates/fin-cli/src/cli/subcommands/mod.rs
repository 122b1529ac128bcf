pub mod auth;
pub mod date;
pub mod income;
pub mod money;

pub use auth::AuthCommands;
pub use date::DateCommands;
pub use income::IncomeCommands;
pub use money::MoneyCommands;
