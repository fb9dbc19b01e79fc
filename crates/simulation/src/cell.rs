//! Cell and Material types for the sandbox grid.

use std::fmt;

/// Discriminant values are the bytes seen through the flat cell buffer
/// across the wasm boundary — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Material {
    Empty = 0,
    Static = 1,
    Falling = 2,
}

impl Material {
    /// Inverse of the discriminant mapping. Unknown bytes yield `None`.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Static),
            2 => Some(Self::Falling),
            _ => None,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Static => write!(f, "Static"),
            Self::Falling => write!(f, "Falling"),
        }
    }
}

/// 2-byte grid cell: `#[repr(C)]` so renderers can read the cell buffer
/// directly. `clock` records the generation the cell last moved in.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub material: Material,
    pub clock: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl Cell {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self { material, clock: 0 }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Material::Empty)
    }
}
