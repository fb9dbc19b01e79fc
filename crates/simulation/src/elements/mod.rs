//! Per-material update rules dispatched from the tick loop.

mod block;

use crate::api::CellApi;
use crate::cell::Material;

/// Dispatch to the appropriate material update rule.
///
/// Static and Empty are immobile and should be skipped before calling this.
pub fn update_cell(material: Material, cell_api: &mut CellApi) {
    match material {
        Material::Falling => block::update_block(cell_api),
        Material::Empty | Material::Static => {}
    }
}
