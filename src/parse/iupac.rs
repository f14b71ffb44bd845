use super::*;
use std::iter::Peekable;
use std::vec::IntoIter;
use tracing::*;

/// Decode a dash-delimited compound name such as
/// `4-bromo-1,2-dichloro-7-etylo-3,3,7-trimetylonon-5-en-4-ol`.
///
/// The grammar, over dash-separated tokens, is
///
/// ```text
/// name      := prefix* ROOT tail
/// prefix    := LOCANTS SUBSTITUENT
/// tail      := ("an" glued to ROOT | LOCANT BOND_SUFFIX) hydroxyl?
/// hydroxyl  := LOCANT "ol"
/// ```
///
/// The root is found by scanning tokens from the end of the name, because a
/// substituent word can contain a root word itself (`propylo` contains
/// `prop`); the true main chain is always the last token carrying one.
/// Whitespace anywhere in the name is ignored.
pub fn parse_name(name: &str) -> Result<ParsedName> {
    let compact: String = name.chars().filter(|ch| !ch.is_whitespace()).collect();
    let tokens = tokenize(name, &compact)?;
    debug!("Tokens for {:?}: {:?}", name, tokens);
    let parsed = NameParser::new(name, tokens).parse()?;
    debug!("Parsed {:?} into {:?}", name, parsed);
    Ok(parsed)
}

/// Split on dashes, locate the chain anchor, and split the anchor into the
/// substituent word glued to its front and the root itself.
fn tokenize<'a>(name: &str, compact: &'a str) -> Result<Vec<Token<'a>>> {
    let raw: Vec<&str> = compact.split('-').collect();
    let (index, anchor) = raw
        .iter()
        .copied()
        .enumerate()
        .rev()
        .find_map(|(index, token)| chain_anchor(token).map(|anchor| (index, anchor)))
        .ok_or_else(|| Error::name_format(name, "no main chain root found"))?;

    let mut tokens: Vec<Token> = raw[..index].iter().copied().map(classify).collect();
    if !anchor.prefix.is_empty() {
        tokens.push(classify(anchor.prefix));
    }
    tokens.push(Token::Root {
        carbons: anchor.carbons,
        saturated: anchor.saturated,
    });
    tokens.extend(raw[index + 1..].iter().copied().map(classify));
    Ok(tokens)
}

struct NameParser<'a> {
    name: &'a str,
    tokens: Peekable<IntoIter<Token<'a>>>,
}

impl<'a> NameParser<'a> {
    fn new(name: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self {
            name,
            tokens: tokens.into_iter().peekable(),
        }
    }

    fn parse(mut self) -> Result<ParsedName> {
        let substituents = self.prefixes()?;
        let (carbon_count, saturated) = self.root()?;
        let (bond_locant, bond) = self.unsaturation(saturated)?;
        let hydroxyl_locant = self.hydroxyl()?;
        self.end()?;

        let chain = ChainDescriptor {
            carbon_count,
            bond_locant,
            bond,
            hydroxyl_locant,
        };
        chain.validate()?;
        for assignment in &substituents {
            for &locant in &assignment.carbon_positions {
                chain.check_carbon(locant, "substituent")?;
            }
        }

        Ok(ParsedName {
            chain,
            substituents,
        })
    }

    fn prefixes(&mut self) -> Result<Vec<SubstituentAssignment>> {
        let mut substituents = Vec::new();
        while !matches!(self.tokens.peek(), Some(Token::Root { .. }) | None) {
            substituents.push(self.prefix()?);
        }
        Ok(substituents)
    }

    fn prefix(&mut self) -> Result<SubstituentAssignment> {
        let carbon_positions = self.locants("substituent locants")?;
        let word = self.word("substituent name")?;
        let (multiplicity, substituent) = parse_substituent_word(word)
            .ok_or_else(|| self.error(format!("unknown substituent {:?}", word)))?;

        if let Some(count) = multiplicity {
            if count as usize != carbon_positions.len() {
                warn!(
                    "Multiplier in {:?} implies {} locant(s) but {} were given",
                    word,
                    count,
                    carbon_positions.len()
                );
            }
        }
        trace!("Substituent {:?} at {:?}", substituent, carbon_positions);

        Ok(SubstituentAssignment {
            carbon_positions,
            substituent,
        })
    }

    fn root(&mut self) -> Result<(u32, bool)> {
        match self.tokens.next() {
            Some(Token::Root { carbons, saturated }) => Ok((carbons, saturated)),
            Some(other) => Err(self.error(format!("expected the main chain, found {:?}", other.to_string()))),
            None => Err(self.error("expected the main chain")),
        }
    }

    /// A root written with `an` is a plain alkane whose bond segment is
    /// implied: a single bond after carbon 1.
    fn unsaturation(&mut self, saturated: bool) -> Result<(u32, Bond)> {
        if saturated {
            return Ok((1, Bond::Single));
        }
        let locant = self.locant("bond locant")?;
        let bond = match self.word("bond suffix")? {
            "an" => Bond::Single,
            "en" => Bond::Double,
            "yn" => Bond::Triple,
            other => return Err(self.error(format!("unknown bond suffix {:?}", other))),
        };
        Ok((locant, bond))
    }

    fn hydroxyl(&mut self) -> Result<Option<u32>> {
        if self.tokens.peek().is_none() {
            return Ok(None);
        }
        let locant = self.locant("hydroxyl locant")?;
        match self.word("hydroxyl suffix")? {
            "ol" => Ok(Some(locant)),
            other => Err(self.error(format!("expected \"ol\", found {:?}", other))),
        }
    }

    fn end(&mut self) -> Result<()> {
        match self.tokens.next() {
            Some(token) => Err(self.error(format!("unexpected trailing {:?}", token.to_string()))),
            None => Ok(()),
        }
    }

    fn locants(&mut self, what: &str) -> Result<Vec<u32>> {
        match self.tokens.next() {
            Some(Token::Locants(locants)) => Ok(locants),
            Some(other) => Err(self.error(format!("expected {}, found {:?}", what, other.to_string()))),
            None => Err(self.error(format!("expected {} at the end of the name", what))),
        }
    }

    fn locant(&mut self, what: &str) -> Result<u32> {
        match self.locants(what)?.as_slice() {
            [locant] => Ok(*locant),
            several => Err(self.error(format!("expected a single {}, found {:?}", what, several))),
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        match self.tokens.next() {
            Some(Token::Word(word)) => Ok(word),
            Some(other) => Err(self.error(format!("expected {}, found {:?}", what, other.to_string()))),
            None => Err(self.error(format!("expected {} at the end of the name", what))),
        }
    }

    fn error(&self, detail: impl Into<String>) -> Error {
        Error::name_format(self.name, detail)
    }
}
