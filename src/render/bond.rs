use super::*;
use tracing::*;

/// Overwrite the single bond after carbon `chain.bond_locant` with the
/// chain's bond glyph. Single bonds are left as the backbone drew them.
///
/// The bond cells are found by walking right from the carbon past its
/// hydrogen label and subscript, the same way the backbone was laid out.
/// A bond locant with no carbon after it is a `LocantRange` error.
pub fn patch_bond(
    grid: &mut Grid,
    backbone: &BackboneAddressTable,
    chain: &ChainDescriptor,
    glyphs: &Glyphs,
) -> Result<()> {
    if chain.bond == Bond::Single {
        return Ok(());
    }
    let carbon = backbone
        .carbon(chain.bond_locant)
        .filter(|_| (chain.bond_locant as usize) < backbone.len())
        .ok_or(Error::LocantRange {
            locant: chain.bond_locant,
            carbons: backbone.len() as u32,
            role: "bond",
        })?;

    let mut cursor = Cursor::new(grid, carbon);
    cursor.move_right();
    if cursor.get() == glyphs.hydrogen {
        cursor.move_right();
        if !cursor.is_blank() {
            cursor.move_right();
        }
    }

    let glyph = glyphs.bond(chain.bond);
    debug!("{:?} bond after carbon {} at {:?}", chain.bond, chain.bond_locant, cursor.position());
    cursor.move_right();
    cursor.set(glyph);
    cursor.move_right();
    cursor.set(glyph);
    Ok(())
}
