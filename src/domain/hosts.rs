use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::AppError;

/// One entry of the worker topology: a hostname and the number of parallel
/// tasks the external scheduler may place on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Host {
    name: String,
    tasks: u32,
}

impl Host {
    /// Parse a `host:tasks` entry, e.g. `localhost:24`.
    pub fn parse(entry: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidHost(entry.to_string());

        let (name, tasks) = entry.split_once(':').ok_or_else(invalid)?;
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(invalid());
        }
        let tasks: u32 = tasks.parse().map_err(|_| invalid())?;
        if tasks == 0 {
            return Err(invalid());
        }
        Ok(Self { name: name.to_string(), tasks })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> u32 {
        self.tasks
    }
}

impl Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tasks)
    }
}

impl TryFrom<String> for Host {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Host::parse(&value)
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        host.to_string()
    }
}

/// Non-empty list of hosts making up a run's worker topology.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Host>", into = "Vec<Host>")]
pub struct HostList(Vec<Host>);

impl HostList {
    pub fn new(hosts: Vec<Host>) -> Result<Self, AppError> {
        if hosts.is_empty() {
            return Err(AppError::EmptyHostList);
        }
        Ok(Self(hosts))
    }

    pub fn as_slice(&self) -> &[Host] {
        &self.0
    }
}

impl TryFrom<Vec<Host>> for HostList {
    type Error = AppError;

    fn try_from(hosts: Vec<Host>) -> Result<Self, Self::Error> {
        HostList::new(hosts)
    }
}

impl From<HostList> for Vec<Host> {
    fn from(list: HostList) -> Self {
        list.0
    }
}
