pub mod misc;
pub mod player;
pub mod token;
