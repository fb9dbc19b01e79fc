//! Falling block rule: fall straight down, else try one random diagonal.

use crate::api::CellApi;
use crate::cell::Material;

pub fn update_block(cell_api: &mut CellApi) {
    let below = cell_api.get(0, 1);
    if below.material == Material::Empty {
        // Fall straight down
        let me = cell_api.get(0, 0);
        cell_api.set(0, 0, below);
        cell_api.set(0, 1, me);
        return;
    }

    // Blocked below: sample one diagonal. A block whose sampled side is
    // occupied or off-grid stays put this tick, even if the other side
    // is free.
    let dx = cell_api.rand_dir();
    let diag = cell_api.get(dx, 1);
    if diag.material == Material::Empty {
        let me = cell_api.get(0, 0);
        cell_api.set(0, 0, diag);
        cell_api.set(dx, 1, me);
    }
}
