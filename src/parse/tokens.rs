use super::*;
use lazy_static::lazy_static;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt, success, value},
    error::{Error as NomError, ErrorKind},
    multi::separated_list1,
    sequence::{pair, terminated},
    IResult,
};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Main chain root words, indexed by carbon count minus one.
pub const CHAIN_ROOTS: [&str; 10] = [
    "met", "et", "prop", "but", "pent", "heks", "hept", "okt", "non", "dek",
];

lazy_static! {
    /// Substituent words that are not built from a chain root.
    static ref NAMED_GROUPS: BTreeMap<&'static str, Substituent> = {
        let mut groups = BTreeMap::new();
        groups.insert("fluoro", Substituent::Halogen(Element::F));
        groups.insert("chloro", Substituent::Halogen(Element::Cl));
        groups.insert("bromo", Substituent::Halogen(Element::Br));
        groups.insert("jodo", Substituent::Halogen(Element::I));
        groups.insert("hydroksy", Substituent::Hydroxyl);
        groups
    };
}

/// Carbon count encoded by a chain root word.
pub fn root_carbons(root: &str) -> Option<u32> {
    CHAIN_ROOTS
        .iter()
        .position(|&candidate| candidate == root)
        .map(|index| index as u32 + 1)
}

/// Chain root word for a carbon count in `1..=10`.
pub fn root_word(carbons: u32) -> Option<&'static str> {
    let index = usize::try_from(carbons).ok()?.checked_sub(1)?;
    CHAIN_ROOTS.get(index).copied()
}

/// One dash-separated piece of a compound name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A comma-separated list of carbon positions, e.g. `1,2`.
    Locants(Vec<u32>),
    /// Any other word: a substituent name, a bond suffix, or `ol`.
    Word(&'a str),
    /// The main chain root, with whether it carried the `an` suffix.
    Root { carbons: u32, saturated: bool },
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Locants(locants) => {
                for (i, locant) in locants.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", locant)?;
                }
                Ok(())
            }
            Token::Word(word) => write!(f, "{}", word),
            Token::Root { carbons, saturated } => {
                write!(f, "{}", root_word(*carbons).unwrap_or("?"))?;
                if *saturated {
                    write!(f, "an")?;
                }
                Ok(())
            }
        }
    }
}

/// Classify a raw token that is not the chain anchor.
pub fn classify(raw: &str) -> Token<'_> {
    match all_consuming(locant_list)(raw) {
        Ok((_, locants)) => Token::Locants(locants),
        Err(_) => Token::Word(raw),
    }
}

/// The chain-root part of the anchor token, plus whatever precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainAnchor<'a> {
    /// Text glued in front of the root, e.g. `dibromo` in `dibromobutan`.
    pub prefix: &'a str,
    pub carbons: u32,
    /// Whether the token ended in `an` (a plain alkane with no bond segment).
    pub saturated: bool,
}

/// Test whether `word`, or `word` minus a trailing `an`, ends with a chain
/// root. The longest matching root wins, so `metan` is read as `met`+`an`
/// rather than `m`+`et`+`an`.
pub fn chain_anchor(word: &str) -> Option<ChainAnchor<'_>> {
    let saturated = word.strip_suffix("an").and_then(|stem| {
        root_suffix(stem).map(|(prefix, carbons)| ChainAnchor {
            prefix,
            carbons,
            saturated: true,
        })
    });
    saturated.or_else(|| {
        root_suffix(word).map(|(prefix, carbons)| ChainAnchor {
            prefix,
            carbons,
            saturated: false,
        })
    })
}

fn root_suffix(stem: &str) -> Option<(&str, u32)> {
    CHAIN_ROOTS
        .iter()
        .enumerate()
        .filter(|(_, root)| stem.ends_with(**root))
        .max_by_key(|(_, root)| root.len())
        .map(|(index, root)| (&stem[..stem.len() - root.len()], index as u32 + 1))
}

/// Parse `2,3,4` into its positions. A position too large for `u32`
/// saturates to `u32::MAX`, which no chain can reach.
pub fn locant_list(input: &str) -> IResult<&str, Vec<u32>> {
    separated_list1(
        char(','),
        map(digit1, |digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX)),
    )(input)
}

/// A chain root at the start of `input`, longest match first.
fn chain_root(input: &str) -> IResult<&str, u32> {
    CHAIN_ROOTS
        .iter()
        .enumerate()
        .filter(|(_, root)| input.starts_with(**root))
        .max_by_key(|(_, root)| root.len())
        .map(|(index, root)| (&input[root.len()..], index as u32 + 1))
        .ok_or_else(|| nom::Err::Error(NomError::new(input, ErrorKind::Tag)))
}

fn named_group(input: &str) -> IResult<&str, Substituent> {
    NAMED_GROUPS
        .iter()
        .filter(|(word, _)| input.starts_with(**word))
        .max_by_key(|(word, _)| word.len())
        .map(|(word, group)| (&input[word.len()..], *group))
        .ok_or_else(|| nom::Err::Error(NomError::new(input, ErrorKind::Tag)))
}

/// `metylo`, `etylo`, ... (the trailing `o` is optional).
fn alkyl_branch(input: &str) -> IResult<&str, Substituent> {
    map(
        terminated(chain_root, pair(tag("yl"), opt(tag("o")))),
        Substituent::AlkylBranch,
    )(input)
}

fn multiplier(input: &str) -> IResult<&str, u32> {
    alt((
        value(4, tag("tetra")),
        value(3, tag("tri")),
        value(2, tag("di")),
    ))(input)
}

fn substituent(input: &str) -> IResult<&str, Substituent> {
    alt((alkyl_branch, named_group))(input)
}

fn substituent_name(input: &str) -> IResult<&str, (Option<u32>, Substituent)> {
    alt((
        pair(map(multiplier, Some), substituent),
        pair(success(None), substituent),
    ))(input)
}

/// Decode a whole substituent word into its multiplicity marker (if any)
/// and the group it names.
pub fn parse_substituent_word(word: &str) -> Option<(Option<u32>, Substituent)> {
    all_consuming(substituent_name)(word)
        .ok()
        .map(|(_, parsed)| parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_map_to_carbon_counts() {
        for carbons in 1..=10 {
            let root = root_word(carbons).unwrap();
            assert_eq!(root_carbons(root), Some(carbons));
        }
        assert_eq!(root_word(0), None);
        assert_eq!(root_word(11), None);
        assert_eq!(root_word(4), Some("but"));
        assert_eq!(root_carbons("heks"), Some(6));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("1,2"), Token::Locants(vec![1, 2]));
        assert_eq!(classify("10"), Token::Locants(vec![10]));
        assert_eq!(classify("2,4294967296"), Token::Locants(vec![2, u32::MAX]));
        assert_eq!(classify("chloro"), Token::Word("chloro"));
        assert_eq!(classify("1,"), Token::Word("1,"));
        assert_eq!(classify(""), Token::Word(""));
    }

    #[test]
    fn test_chain_anchor() {
        assert_eq!(
            chain_anchor("dibromobutan"),
            Some(ChainAnchor { prefix: "dibromo", carbons: 4, saturated: true })
        );
        assert_eq!(
            chain_anchor("trimetylonon"),
            Some(ChainAnchor { prefix: "trimetylo", carbons: 9, saturated: false })
        );
        assert_eq!(
            chain_anchor("metan"),
            Some(ChainAnchor { prefix: "", carbons: 1, saturated: true })
        );
        assert_eq!(
            chain_anchor("etan"),
            Some(ChainAnchor { prefix: "", carbons: 2, saturated: true })
        );
        assert_eq!(chain_anchor("metylo"), None);
        assert_eq!(chain_anchor("ol"), None);
        assert_eq!(chain_anchor("yn"), None);
        assert_eq!(chain_anchor("an"), None);
    }

    #[test]
    fn test_substituent_words() {
        assert_eq!(
            parse_substituent_word("chloro"),
            Some((None, Substituent::Halogen(Element::Cl)))
        );
        assert_eq!(
            parse_substituent_word("dibromo"),
            Some((Some(2), Substituent::Halogen(Element::Br)))
        );
        assert_eq!(
            parse_substituent_word("trimetylo"),
            Some((Some(3), Substituent::AlkylBranch(1)))
        );
        assert_eq!(
            parse_substituent_word("tetraetylo"),
            Some((Some(4), Substituent::AlkylBranch(2)))
        );
        assert_eq!(
            parse_substituent_word("propyl"),
            Some((None, Substituent::AlkylBranch(3)))
        );
        assert_eq!(
            parse_substituent_word("dekylo"),
            Some((None, Substituent::AlkylBranch(10)))
        );
        assert_eq!(parse_substituent_word("hydroksy"), Some((None, Substituent::Hydroxyl)));
        assert_eq!(parse_substituent_word("nitro"), None);
        assert_eq!(parse_substituent_word("chlorox"), None);
    }
}
