//! Vehicle phase enum.

/// Where a vehicle is in its transfer cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Start-up stagger.  Entered only at creation.
    #[default]
    Wait,
    /// Driving along the current route.
    Travel,
    /// Hoisting the payload down onto the load port.
    Lower,
    /// Payload resting on the port; the exchange happens part-way through.
    Docked,
    /// Hoisting the payload back up to travel height.
    Raise,
}

impl Phase {
    /// `true` while the vehicle occupies its station's load port.  Drives the
    /// equipment's busy lamp.
    #[inline]
    pub fn is_at_port(self) -> bool {
        matches!(self, Phase::Lower | Phase::Docked | Phase::Raise)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Wait   => "wait",
            Phase::Travel => "travel",
            Phase::Lower  => "lower",
            Phase::Docked => "docked",
            Phase::Raise  => "raise",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
