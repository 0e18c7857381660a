//! Evacuee status and population tallies.

use std::fmt;

/// Where an evacuee stands.  `Escaped` and `Burned` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentStatus {
    #[default]
    Evacuating,
    Escaped,
    Burned,
}

impl AgentStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AgentStatus::Evacuating)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Evacuating => "evacuating",
            AgentStatus::Escaped    => "escaped",
            AgentStatus::Burned     => "burned",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of agents in each status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub evacuating: usize,
    pub escaped:    usize,
    pub burned:     usize,
}

impl StatusCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.evacuating + self.escaped + self.burned
    }

    /// `true` once nobody is still evacuating.
    #[inline]
    pub fn all_resolved(&self) -> bool {
        self.evacuating == 0
    }

    pub fn record(&mut self, status: AgentStatus) {
        match status {
            AgentStatus::Evacuating => self.evacuating += 1,
            AgentStatus::Escaped    => self.escaped += 1,
            AgentStatus::Burned     => self.burned += 1,
        }
    }
}

impl FromIterator<AgentStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = AgentStatus>>(iter: I) -> Self {
        let mut counts = StatusCounts::default();
        for s in iter {
            counts.record(s);
        }
        counts
    }
}
