pub mod backup_repo;
pub mod player_repo;

pub use backup_repo::BackupRepo;
pub use player_repo::PlayerRepo;
