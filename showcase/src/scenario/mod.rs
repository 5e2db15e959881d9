pub mod content;
pub mod delivery;
