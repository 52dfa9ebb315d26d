//! The two agent roles.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Guard or intruder.  Decides which explored flag an agent sets, which
/// win condition applies, and which side captures on contact.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Guard,
    Intruder,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Guard    => "guard",
            AgentKind::Intruder => "intruder",
        }
    }

    #[inline]
    pub fn is_guard(self) -> bool {
        matches!(self, AgentKind::Guard)
    }

    #[inline]
    pub fn is_intruder(self) -> bool {
        matches!(self, AgentKind::Intruder)
    }

    /// The kind this one is looking for.
    #[inline]
    pub fn opponent(self) -> AgentKind {
        match self {
            AgentKind::Guard    => AgentKind::Intruder,
            AgentKind::Intruder => AgentKind::Guard,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guard"    => Ok(AgentKind::Guard),
            "intruder" => Ok(AgentKind::Intruder),
            _ => Err(CoreError::Parse(format!("unknown agent kind {s:?}"))),
        }
    }
}
