pub mod directory;
pub mod health;
pub mod permissions;
pub mod tasks;
