//! Server Configuration
//!
//! Command-line flags, each with an environment variable fallback.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the Simple To-Do API and client pages")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TODO_BIND", default_value = "0.0.0.0:4173")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing)
    #[arg(long, env = "TODO_DB", default_value = "todo.db")]
    pub database: PathBuf,

    /// Directory of static client files
    #[arg(long, env = "TODO_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Log filter, e.g. `info` or `todo_server=debug`
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse_from(["todo-server"]);
        assert_eq!(config.bind.port(), 4173);
        assert_eq!(config.database, PathBuf::from("todo.db"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_flags_override() {
        let config = ServerConfig::parse_from([
            "todo-server",
            "--bind",
            "127.0.0.1:8080",
            "--database",
            "/tmp/t.db",
        ]);
        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database, PathBuf::from("/tmp/t.db"));
    }
}
