//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tick", version, about = "Personal task and quicklink tracker")]
pub struct Config {
    /// Address to listen on; a bare `:port` listens on all interfaces
    #[arg(long, default_value = ":8080", env = "TICK_ADDR")]
    pub addr: String,

    /// Path to the SQLite database
    #[arg(long, default_value = "tick.db", env = "TICK_DB")]
    pub db: PathBuf,

    /// Serve client files from this directory, falling back to the embedded copies
    #[arg(long, env = "TICK_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Listen address in a form `TcpListener::bind` accepts.
    pub fn listen_addr(&self) -> String {
        let addr = self.addr.trim();
        if addr.starts_with(':') {
            format!("0.0.0.0{addr}")
        } else {
            addr.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["tick"]).unwrap();
        assert_eq!(config.addr, ":8080");
        assert_eq!(config.db, Path::new("tick.db"));
        assert!(config.static_dir.is_none());
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "tick",
            "--addr",
            "127.0.0.1:9000",
            "--db",
            "data/tick.db",
            "--static-dir",
            "web/dist",
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(config.db, Path::new("data/tick.db"));
        assert_eq!(config.static_dir.as_deref(), Some(Path::new("web/dist")));
    }

    #[test]
    fn bare_port_binds_all_interfaces() {
        let config = Config::try_parse_from(["tick", "--addr", ":3000"]).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }
}
