pub mod lsof;
pub mod spec;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::Config,
    process::{LsofQuery, SystemQuery},
};

pub use spec::parse_ports;

/// A process holding a listening socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Short name from the process table; may be truncated.
    pub name: String,
    pub user: String,
    /// Full command line, or `name` when it could not be read.
    pub command: String,
}

/// A listening port and the process that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortListing {
    pub port: u16,
    pub process: ProcessRecord,
}

/// Maps ports to the processes listening on them.
///
/// Every lookup is a fresh snapshot; nothing is cached between calls.
pub struct PortManager<Q = LsofQuery> {
    query: Q,
}

impl PortManager {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_query(LsofQuery::new(config))
    }
}

impl<Q: SystemQuery> PortManager<Q> {
    pub fn with_query(query: Q) -> Self {
        Self { query }
    }

    /// Processes listening on `port`, one record per pid, in discovery order.
    ///
    /// Any failure of the listing query yields an empty result.
    pub async fn find_processes(&self, port: u16) -> Vec<ProcessRecord> {
        let output = match self.query.listening_sockets(Some(port)).await {
            Ok(output) => output,
            Err(e) => {
                debug!(port, error = %e, "listening socket query failed");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut processes = Vec::new();

        for row in lsof::parse_rows(&output) {
            if !seen.insert(row.pid) {
                continue;
            }
            processes.push(self.build_record(row.pid, row.name, row.user).await);
        }

        processes
    }

    /// Every listening TCP port on the host, sorted by port.
    ///
    /// One entry per `(pid, port)`; entries sharing a port keep discovery order.
    pub async fn list_all_listening(&self) -> Vec<PortListing> {
        let output = match self.query.listening_sockets(None).await {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "listening socket query failed");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut listings = Vec::new();

        for row in lsof::parse_rows(&output) {
            let Some(port) = lsof::parse_address_port(row.address) else {
                debug!(address = row.address, "skipping row without a port");
                continue;
            };
            if !seen.insert((row.pid, port)) {
                continue;
            }
            listings.push(PortListing {
                port,
                process: self.build_record(row.pid, row.name, row.user).await,
            });
        }

        // sort_by_key is stable
        listings.sort_by_key(|listing| listing.port);
        listings
    }

    /// Full command line of `pid`, or an empty string if it cannot be read.
    pub async fn get_command(&self, pid: u32) -> String {
        match self.query.command_line(pid).await {
            Ok(command) => command.trim().to_string(),
            Err(e) => {
                debug!(pid, error = %e, "command line query failed");
                String::new()
            }
        }
    }

    async fn build_record(&self, pid: u32, name: &str, user: &str) -> ProcessRecord {
        let command = self.get_command(pid).await;
        ProcessRecord {
            pid,
            name: name.to_string(),
            user: user.to_string(),
            command: if command.is_empty() {
                name.to_string()
            } else {
                command
            },
        }
    }
}

impl Default for PortManager {
    fn default() -> Self {
        Self::new()
    }
}
