use super::*;
use tracing::*;

/// Where each backbone carbon was drawn.
///
/// Points are logical grid coordinates, so they stay valid however much
/// the grid grows while substituents are drawn around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackboneAddressTable {
    carbons: Vec<Point>,
    row: i32,
}

impl BackboneAddressTable {
    /// The carbon at 1-based `locant`.
    pub fn carbon(&self, locant: u32) -> Option<Point> {
        let index = usize::try_from(locant).ok()?.checked_sub(1)?;
        self.carbons.get(index).copied()
    }

    pub fn carbons(&self) -> &[Point] {
        &self.carbons
    }

    /// The row every backbone carbon sits on.
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn len(&self) -> usize {
        self.carbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carbons.is_empty()
    }
}

/// Lays the main chain out left to right on a single row.
pub struct BackboneBuilder<'a> {
    glyphs: &'a Glyphs,
}

impl<'a> BackboneBuilder<'a> {
    pub fn new(glyphs: &'a Glyphs) -> Self {
        Self { glyphs }
    }

    /// Draw one carbon per entry of `hydrogens`, each followed by its
    /// implicit hydrogens, with a two-cell single bond between neighbours:
    ///
    /// ```text
    /// CH₃ -- CH -- C -- CH₃
    /// ```
    pub fn build(&self, grid: &mut Grid, hydrogens: &[usize]) -> BackboneAddressTable {
        let start = Point::new(grid.min_x(), grid.min_y());
        let mut cursor = Cursor::new(grid, start);
        let mut carbons = Vec::with_capacity(hydrogens.len());

        for (index, &count) in hydrogens.iter().enumerate() {
            cursor.set(self.glyphs.carbon);
            carbons.push(cursor.position());
            trace!("Carbon {} at {:?} with {} hydrogen(s)", index + 1, cursor.position(), count);

            if count > 0 {
                cursor.move_right();
                cursor.set(self.glyphs.hydrogen);
                if let Some(subscript) = self.glyphs.subscript(count) {
                    cursor.move_right();
                    cursor.set(subscript);
                }
            }

            if index + 1 < hydrogens.len() {
                cursor.step_n(Direction::Right, 2);
                cursor.set(self.glyphs.single_bond);
                cursor.move_right();
                cursor.set(self.glyphs.single_bond);
                cursor.step_n(Direction::Right, 2);
            }
        }

        BackboneAddressTable {
            carbons,
            row: start.y,
        }
    }
}
