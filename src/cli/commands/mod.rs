pub mod email;
pub mod generate;
pub mod get;
pub mod init;
pub mod list;
pub mod modify;
pub mod registered;
pub mod save;
