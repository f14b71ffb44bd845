use super::*;
use tracing::*;

/// Draws the substituents of every backbone carbon in their assigned
/// directions.
pub struct BranchRenderer<'a> {
    cursor: Cursor<'a>,
    backbone: &'a BackboneAddressTable,
    glyphs: &'a Glyphs,
}

impl<'a> BranchRenderer<'a> {
    pub fn new(grid: &'a mut Grid, backbone: &'a BackboneAddressTable, glyphs: &'a Glyphs) -> Self {
        let start = backbone
            .carbons()
            .first()
            .copied()
            .unwrap_or_else(|| Point::new(grid.min_x(), grid.min_y()));
        Self {
            cursor: Cursor::new(grid, start),
            backbone,
            glyphs,
        }
    }

    /// Draw every attachment in `plan`. Before each group the cursor walks
    /// back to its carbon's recorded address.
    pub fn render(&mut self, plan: &AttachmentPlan) {
        let backbone = self.backbone;
        for (index, (carbon, &home)) in plan.carbons.iter().zip(backbone.carbons()).enumerate() {
            for &(direction, substituent) in &carbon.attachments {
                trace!("Carbon {}: {:?} {:?}", index + 1, substituent, direction);
                self.cursor.move_to(home);
                self.attach(direction, substituent);
            }
            self.cursor.move_to(home);
        }
    }

    fn attach(&mut self, direction: Direction, substituent: Substituent) {
        match direction {
            Direction::Up | Direction::Down => self.attach_vertical(direction, substituent),
            Direction::Right => {
                self.cursor.step_n(Direction::Right, 4);
                self.cursor.set(self.glyphs.horizontal);
                self.cursor.move_right();
                self.cursor.set(self.glyphs.horizontal);
                self.cursor.step_n(Direction::Right, 2);
                let label = self.horizontal_label(direction, substituent);
                self.cursor.write_forward(&label);
            }
            Direction::Left => {
                self.cursor.step_n(Direction::Left, 2);
                self.cursor.set(self.glyphs.horizontal);
                self.cursor.move_left();
                self.cursor.set(self.glyphs.horizontal);
                self.cursor.step_n(Direction::Left, 2);
                let label = self.horizontal_label(direction, substituent);
                self.cursor.write_backward(&label);
            }
        }
    }

    /// A connector, then the label one cell further out; an alkyl branch
    /// repeats connector and carbon once per branch carbon.
    fn attach_vertical(&mut self, direction: Direction, substituent: Substituent) {
        self.cursor.step(direction);
        self.cursor.set(self.glyphs.vertical);
        self.cursor.step(direction);

        match substituent {
            Substituent::AlkylBranch(carbons) => {
                for k in 0..carbons {
                    if k > 0 {
                        self.cursor.step(direction);
                        self.cursor.set(self.glyphs.vertical);
                        self.cursor.step(direction);
                    }
                    let hydrogens = branch_hydrogens(k, carbons);
                    self.cursor.stamp(&self.glyphs.carbon_label(hydrogens));
                }
            }
            Substituent::Halogen(_) | Substituent::Hydroxyl => {
                self.cursor.write_forward(substituent.symbol().unwrap_or_default());
            }
        }
    }

    /// The label as it reads left to right on the backbone row. Alkyl
    /// branches become a chain with the backbone's bond spacing.
    fn horizontal_label(&self, direction: Direction, substituent: Substituent) -> String {
        let Substituent::AlkylBranch(carbons) = substituent else {
            return substituent.symbol().unwrap_or_default().to_string();
        };
        let bond = format!(" {0}{0} ", self.glyphs.single_bond);
        let groups: Vec<String> = match direction {
            Direction::Left => (0..carbons)
                .rev()
                .map(|k| self.glyphs.reversed_carbon_label(branch_hydrogens(k, carbons)))
                .collect(),
            _ => (0..carbons)
                .map(|k| self.glyphs.carbon_label(branch_hydrogens(k, carbons)))
                .collect(),
        };
        groups.join(&bond)
    }
}

/// Hydrogens on carbon `k` of a `carbons`-long branch: the outermost carbon
/// carries three, the rest two.
pub fn branch_hydrogens(k: u32, carbons: u32) -> usize {
    if k + 1 == carbons {
        3
    } else {
        2
    }
}
