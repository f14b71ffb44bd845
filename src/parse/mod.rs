mod tokens;
pub use tokens::*;

mod iupac;
pub use iupac::*;

use super::*;

/// The main chain of a compound: its length, its one non-default bond, and
/// an optional hydroxyl suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDescriptor {
    pub carbon_count: u32,
    /// Carbon after which `bond` sits; the bond joins this carbon and the next.
    pub bond_locant: u32,
    pub bond: Bond,
    pub hydroxyl_locant: Option<u32>,
}

impl ChainDescriptor {
    /// Check that `locant` addresses a carbon of this chain.
    pub fn check_carbon(&self, locant: u32, role: &'static str) -> Result<()> {
        if (1..=self.carbon_count).contains(&locant) {
            Ok(())
        } else {
            Err(Error::LocantRange {
                locant,
                carbons: self.carbon_count,
                role,
            })
        }
    }

    /// Check the bond and hydroxyl locants against the chain length.
    ///
    /// A single carbon has no bond to place; the implied `1` of a plain
    /// alkane is accepted there, anything else is out of range.
    pub fn validate(&self) -> Result<()> {
        let bond_in_range = if self.carbon_count == 1 {
            self.bond == Bond::Single && self.bond_locant == 1
        } else {
            (1..self.carbon_count).contains(&self.bond_locant)
        };
        if !bond_in_range {
            return Err(Error::LocantRange {
                locant: self.bond_locant,
                carbons: self.carbon_count,
                role: "bond",
            });
        }
        if let Some(locant) = self.hydroxyl_locant {
            self.check_carbon(locant, "hydroxyl")?;
        }
        Ok(())
    }
}

/// A group hanging off the main chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substituent {
    Halogen(Element),
    /// A straight alkyl branch of the given number of carbons.
    AlkylBranch(u32),
    Hydroxyl,
}

impl Substituent {
    /// The fixed label drawn for single-atom groups; alkyl branches are drawn
    /// as chains instead and have none.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Substituent::Halogen(element) => Some(element.symbol()),
            Substituent::Hydroxyl => Some("OH"),
            Substituent::AlkylBranch(_) => None,
        }
    }
}

/// One `locants-name` pair from the front of a name, e.g. `1,2-dichloro`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituentAssignment {
    /// Carbon positions in source order; a repeated position means the
    /// group appears on that carbon more than once.
    pub carbon_positions: Vec<u32>,
    pub substituent: Substituent,
}

/// A fully decoded compound name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub chain: ChainDescriptor,
    /// Prefix substituents in the order they were written.
    pub substituents: Vec<SubstituentAssignment>,
}

impl ParsedName {
    /// Every group attached to `carbon` (1-based), in source order, with the
    /// hydroxyl suffix last.
    pub fn occurrences_at(&self, carbon: u32) -> Vec<Substituent> {
        let mut occurrences: Vec<Substituent> = self
            .substituents
            .iter()
            .flat_map(|assignment| {
                assignment
                    .carbon_positions
                    .iter()
                    .filter(move |&&position| position == carbon)
                    .map(move |_| assignment.substituent)
            })
            .collect();
        if self.chain.hydroxyl_locant == Some(carbon) {
            occurrences.push(Substituent::Hydroxyl);
        }
        occurrences
    }
}

impl std::str::FromStr for ParsedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(s)
    }
}
