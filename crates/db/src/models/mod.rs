pub mod backup;
pub mod player;
