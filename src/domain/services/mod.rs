//! Domain services - Pure business rules that span entities

pub mod xp_budget;

pub use xp_budget::XpBudget;
