//! Phases of matter and the transitions between them
//!
//! The lookup table is derived from `Transition::ALL` rather than written out
//! as a 2D array indexed by discriminant, so adding a phase or transition
//! cannot leave the table out of sync.

use itertools::Itertools;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Plasma,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Solid, Phase::Liquid, Phase::Gas, Phase::Plasma];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Melt,
    Freeze,
    Boil,
    Condense,
    Sublime,
    Deposit,
    Ionize,
    Deionize,
}

lazy_static! {
    // from -> (to -> transition)
    static ref TRANSITIONS: HashMap<Phase, HashMap<Phase, Transition>> = {
        let table: HashMap<Phase, HashMap<Phase, Transition>> = Transition::ALL
            .into_iter()
            .into_group_map_by(|t| t.from())
            .into_iter()
            .map(|(from, ts)| (from, ts.into_iter().map(|t| (t.to(), t)).collect()))
            .collect();
        log::debug!("built phase transition table with {} source phases", table.len());
        table
    };
}

impl Transition {
    pub const ALL: [Transition; 8] = [
        Transition::Melt,
        Transition::Freeze,
        Transition::Boil,
        Transition::Condense,
        Transition::Sublime,
        Transition::Deposit,
        Transition::Ionize,
        Transition::Deionize,
    ];

    pub fn from(self) -> Phase {
        self.endpoints().0
    }

    pub fn to(self) -> Phase {
        self.endpoints().1
    }

    fn endpoints(self) -> (Phase, Phase) {
        use Phase::*;
        match self {
            Transition::Melt => (Solid, Liquid),
            Transition::Freeze => (Liquid, Solid),
            Transition::Boil => (Liquid, Gas),
            Transition::Condense => (Gas, Liquid),
            Transition::Sublime => (Solid, Gas),
            Transition::Deposit => (Gas, Solid),
            Transition::Ionize => (Gas, Plasma),
            Transition::Deionize => (Plasma, Gas),
        }
    }

    /// `None` when no single transition connects the two phases.
    pub fn between(from: Phase, to: Phase) -> Option<Transition> {
        TRANSITIONS.get(&from)?.get(&to).copied()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Melt => "MELT",
            Transition::Freeze => "FREEZE",
            Transition::Boil => "BOIL",
            Transition::Condense => "CONDENSE",
            Transition::Sublime => "SUBLIME",
            Transition::Deposit => "DEPOSIT",
            Transition::Ionize => "IONIZE",
            Transition::Deionize => "DEIONIZE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_to_liquid_condenses() {
        assert_eq!(
            Transition::between(Phase::Gas, Phase::Liquid),
            Some(Transition::Condense)
        );
    }

    #[test]
    fn test_every_transition_round_trips_through_table() {
        for t in Transition::ALL {
            assert_eq!(Transition::between(t.from(), t.to()), Some(t));
        }
    }

    #[test]
    fn test_missing_transitions() {
        assert_eq!(Transition::between(Phase::Solid, Phase::Plasma), None);
        assert_eq!(Transition::between(Phase::Plasma, Phase::Liquid), None);
        for phase in Phase::ALL {
            assert_eq!(Transition::between(phase, phase), None);
        }
    }

    #[test]
    fn test_table_size_matches_transitions() {
        let found = Phase::ALL
            .iter()
            .cartesian_product(Phase::ALL.iter())
            .filter(|&(from, to)| Transition::between(*from, *to).is_some())
            .count();
        assert_eq!(found, Transition::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(Transition::Deposit.to_string(), "DEPOSIT");
    }
}
