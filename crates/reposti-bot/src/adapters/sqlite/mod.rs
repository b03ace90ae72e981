//! SQLite Repository Implementations

mod tolerance_repository;

pub use tolerance_repository::SqliteToleranceRepository;
