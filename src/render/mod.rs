mod backbone;
pub use backbone::*;

mod branch;
pub use branch::*;

mod bond;
pub use bond::*;

use super::*;
use tracing::*;

/// Every character the renderer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub blank: char,
    pub carbon: char,
    pub hydrogen: char,
    pub single_bond: char,
    pub double_bond: char,
    pub triple_bond: char,
    /// Connector drawn between a carbon and a group above or below it.
    pub vertical: char,
    /// Connector drawn between a terminal carbon and a group beside it.
    pub horizontal: char,
    /// Hydrogen counts 2, 3 and 4.
    pub subscripts: [char; 3],
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            blank: ' ',
            carbon: 'C',
            hydrogen: 'H',
            single_bond: '-',
            double_bond: '=',
            triple_bond: '≡',
            vertical: '|',
            horizontal: '-',
            subscripts: ['₂', '₃', '₄'],
        }
    }

    pub fn ascii() -> Self {
        Self {
            triple_bond: '#',
            subscripts: ['2', '3', '4'],
            ..Self::unicode()
        }
    }

    pub fn bond(&self, bond: Bond) -> char {
        match bond {
            Bond::Single => self.single_bond,
            Bond::Double => self.double_bond,
            Bond::Triple => self.triple_bond,
        }
    }

    /// The subscript shown after `H` for `count` hydrogens; one hydrogen
    /// (or none) has no subscript.
    pub fn subscript(&self, count: usize) -> Option<char> {
        count
            .checked_sub(2)
            .and_then(|index| self.subscripts.get(index))
            .copied()
    }

    /// `CH₃`, `CH₂`, `CH` or `C`.
    pub fn carbon_label(&self, hydrogens: usize) -> String {
        let mut label = String::new();
        label.push(self.carbon);
        if hydrogens > 0 {
            label.push(self.hydrogen);
        }
        label.extend(self.subscript(hydrogens));
        label
    }

    /// The same group written from the outside in, e.g. `H₃C`.
    pub fn reversed_carbon_label(&self, hydrogens: usize) -> String {
        let mut label = String::new();
        if hydrogens > 0 {
            label.push(self.hydrogen);
        }
        label.extend(self.subscript(hydrogens));
        label.push(self.carbon);
        label
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    pub glyphs: Glyphs,
    /// Delete all-blank columns left at the horizontal edges after drawing.
    pub trim_edges: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::unicode(),
            trim_edges: true,
        }
    }
}

/// The directions a backbone carbon can bond a group in, in order of use.
///
/// Every carbon has `up` and `down`; the first carbon also has `left` and
/// the last also has `right`. A one-carbon chain has all four.
pub fn free_directions(index: usize, carbon_count: usize) -> Vec<Direction> {
    let mut directions = vec![Direction::Up, Direction::Down];
    if index == 0 {
        directions.push(Direction::Left);
    }
    if index + 1 == carbon_count {
        directions.push(Direction::Right);
    }
    directions
}

/// What gets drawn at one backbone carbon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarbonPlan {
    pub hydrogens: usize,
    pub attachments: Vec<(Direction, Substituent)>,
}

/// Substituents of a parsed name matched to free directions, carbon by
/// carbon, with the implicit hydrogens that remain.
///
/// Building the plan is where a carbon with too many groups is rejected,
/// so nothing is drawn for a name that cannot be drawn completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlan {
    pub carbons: Vec<CarbonPlan>,
}

impl AttachmentPlan {
    pub fn new(parsed: &ParsedName) -> Result<Self> {
        let carbon_count = parsed.chain.carbon_count as usize;
        let mut carbons = Vec::with_capacity(carbon_count);

        for index in 0..carbon_count {
            let occurrences = parsed.occurrences_at(index as u32 + 1);
            let directions = free_directions(index, carbon_count);
            if occurrences.len() > directions.len() {
                return Err(Error::ValenceOverflow {
                    carbon: index as u32 + 1,
                    occurrences: occurrences.len(),
                    capacity: directions.len(),
                });
            }

            // One hydrogen per direction not taken by a substituent.
            let hydrogens = directions.len() - occurrences.len();
            let attachments = directions.into_iter().zip(occurrences).collect();
            carbons.push(CarbonPlan {
                hydrogens,
                attachments,
            });
        }

        Ok(Self { carbons })
    }

    pub fn hydrogen_counts(&self) -> Vec<usize> {
        self.carbons.iter().map(|carbon| carbon.hydrogens).collect()
    }
}

/// Draw a parsed name: backbone, then substituents carbon by carbon, then
/// the chain's double or triple bond.
pub fn render(parsed: &ParsedName, options: &DrawOptions) -> Result<Grid> {
    let plan = AttachmentPlan::new(parsed)?;
    let glyphs = &options.glyphs;

    let mut grid = Grid::new(1, 1, glyphs.blank);
    let backbone = BackboneBuilder::new(glyphs).build(&mut grid, &plan.hydrogen_counts());
    debug!("Backbone laid out at {:?}", backbone);

    BranchRenderer::new(&mut grid, &backbone, glyphs).render(&plan);
    patch_bond(&mut grid, &backbone, &parsed.chain, glyphs)?;

    if options.trim_edges {
        grid.trim_blank_edges();
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(name: &str) -> Vec<String> {
        draw(name)
            .unwrap()
            .rows()
            .iter()
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_free_directions() {
        use Direction::*;
        assert_eq!(free_directions(0, 4), vec![Up, Down, Left]);
        assert_eq!(free_directions(1, 4), vec![Up, Down]);
        assert_eq!(free_directions(3, 4), vec![Up, Down, Right]);
        assert_eq!(free_directions(0, 1), vec![Up, Down, Left, Right]);
    }

    #[test]
    fn test_glyph_labels() {
        let glyphs = Glyphs::unicode();
        assert_eq!(glyphs.carbon_label(3), "CH₃");
        assert_eq!(glyphs.carbon_label(1), "CH");
        assert_eq!(glyphs.carbon_label(0), "C");
        assert_eq!(glyphs.reversed_carbon_label(2), "H₂C");
        assert_eq!(glyphs.subscript(4), Some('₄'));
        assert_eq!(glyphs.subscript(5), None);
        assert_eq!(Glyphs::ascii().carbon_label(2), "CH2");
    }

    #[test]
    fn test_plan_hydrogens_and_directions() {
        let parsed = parse_name("1,2-dichloro-2,3-dibromobutan").unwrap();
        let plan = AttachmentPlan::new(&parsed).unwrap();
        assert_eq!(plan.hydrogen_counts(), vec![2, 0, 1, 3]);
        assert_eq!(
            plan.carbons[1].attachments,
            vec![
                (Direction::Up, Substituent::Halogen(Element::Cl)),
                (Direction::Down, Substituent::Halogen(Element::Br)),
            ]
        );
    }

    #[test]
    fn test_plan_never_exceeds_valence() {
        let parsed =
            parse_name("4-bromo-1,2-dichloro-7-etylo-3,3,7-trimetylo-5,5-dipropylonon-6-yn-6-ol")
                .unwrap();
        let plan = AttachmentPlan::new(&parsed).unwrap();
        let last = plan.carbons.len() - 1;
        for (index, carbon) in plan.carbons.iter().enumerate() {
            let valence = if index == 0 || index == last { 3 } else { 2 };
            assert!(carbon.hydrogens + carbon.attachments.len() <= valence);
        }
    }

    #[test]
    fn test_plan_rejects_overflow() {
        let parsed = parse_name("1,1,1,1-tetrachloroetan").unwrap();
        assert_eq!(
            AttachmentPlan::new(&parsed),
            Err(Error::ValenceOverflow { carbon: 1, occurrences: 4, capacity: 3 })
        );
    }

    #[test]
    fn test_draw_up_and_down() {
        assert_eq!(
            rows("1,2-dichloro-2,3-dibromobutan"),
            vec![
                "Cl     Cl   Br",
                "|      |    |",
                "CH₂ -- C -- CH -- CH₃",
                "       |",
                "       Br",
            ]
        );
    }

    #[test]
    fn test_draw_left() {
        assert_eq!(
            rows("1,1,1-trichloroetan"),
            vec![
                "      Cl",
                "      |",
                "Cl -- C -- CH₃",
                "      |",
                "      Cl",
            ]
        );
    }

    #[test]
    fn test_draw_right() {
        assert_eq!(
            rows("1,2,2,2-tetrabromoetan"),
            vec![
                "Br     Br",
                "|      |",
                "CH₂ -- C   -- Br",
                "       |",
                "       Br",
            ]
        );
    }

    #[test]
    fn test_draw_alkyl_branches() {
        assert_eq!(
            rows("2-metylopropan"),
            vec!["       CH₃", "       |", "CH₃ -- CH -- CH₃"]
        );
        assert_eq!(
            rows("3-etylopentan"),
            vec![
                "              CH₃",
                "              |",
                "              CH₂",
                "              |",
                "CH₃ -- CH₂ -- CH -- CH₂ -- CH₃",
            ]
        );
    }

    #[test]
    fn test_draw_horizontal_alkyl_branches() {
        assert_eq!(
            rows("1,1,1-trimetyloetan"),
            vec![
                "       CH₃",
                "       |",
                "H₃C -- C -- CH₃",
                "       |",
                "       CH₃",
            ]
        );
    }

    #[test]
    fn test_draw_methane() {
        assert_eq!(rows("metan"), vec!["CH₄"]);
        assert_eq!(rows("1-hydroksymetan"), vec!["OH", "|", "CH₃"]);
    }

    #[test]
    fn test_draw_hydroxyl_suffix_and_triple_bond() {
        assert_eq!(
            rows("but-2-yn-1-ol"),
            vec!["OH", "|", "CH₂ -- CH₂ ≡≡ CH₂ -- CH₃"]
        );
    }

    #[test]
    fn test_ascii_glyphs_without_trimming() {
        let options = DrawOptions {
            glyphs: Glyphs::ascii(),
            trim_edges: false,
        };
        let grid = draw_with("1,1,1-trichloroetan", &options).unwrap();
        assert_eq!(grid.length(), 15);
        assert_eq!(grid.rows()[2], " Cl -- C -- CH3");

        let grid = draw_with("but-1-yn", &options).unwrap();
        assert_eq!(grid.rows(), vec!["CH3 ## CH2 -- CH2 -- CH3"]);
    }
}
