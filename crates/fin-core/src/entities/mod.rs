//! Domain records shaped by the utility layer.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be handed to the persistence collaborator as JSON.

mod income;
mod user;

pub use income::IncomeEntry;
pub use user::UserProfile;
