//! PostgreSQL adapters for the application ports.

#![forbid(unsafe_code)]

mod postgres_actor_repository;
mod postgres_task_repository;
mod postgres_team_repository;
mod postgres_user_directory_repository;

pub use postgres_actor_repository::PostgresActorRepository;
pub use postgres_task_repository::PostgresTaskRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_directory_repository::PostgresUserDirectoryRepository;
