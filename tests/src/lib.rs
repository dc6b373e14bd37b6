pub use exec_log::ExecLog;

pub use logging_connection::{Exec, LoggingConnection};

mod scripted_connection;
pub use scripted_connection::ScriptedConnection;

#[cfg(feature = "sqlite")]
mod setup;
#[cfg(feature = "sqlite")]
pub use setup::{setup, USER_TABLE};
