//! Lineage payloads: species records and per-node lineage data.
//!
//! - [Species]: the subset of a species record the renderers need
//! - [LineageNodeData]: payload of a [LineageTree] node

use crate::model::tree::GenTree;
use std::fmt;

/// Tree of species related by ancestry, as handed over by the tree source.
pub type LineageTree = GenTree<LineageNodeData>;

// =#========================================================================#=
// SPECIES
// =#========================================================================#=
/// Opaque, comparable identity of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub u64);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A species as seen by the renderers.
///
/// # Example
/// ```
/// use lineage_render::model::{Species, SpeciesId};
///
/// let species = Species::new(SpeciesId(7), "A. vulgaris", 1_500_000_000).with_extinct(true);
/// assert!(species.is_extinct());
/// assert_eq!(species.short_display_name(), "A. vulgaris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    id: SpeciesId,
    short_name: String,
    extinct: bool,
    /// Unix timestamp (seconds) of when the species was created
    created_at: i64,
}

impl Species {
    /// Creates a new, extant species.
    pub fn new(id: SpeciesId, short_name: impl Into<String>, created_at: i64) -> Self {
        Species {
            id,
            short_name: short_name.into(),
            extinct: false,
            created_at,
        }
    }

    /// Marks this species as extinct (or not).
    pub fn with_extinct(mut self, extinct: bool) -> Self {
        self.extinct = extinct;
        self
    }

    pub fn id(&self) -> SpeciesId {
        self.id
    }

    /// Abbreviated name used as label, e.g. `"A. vulgaris"`.
    pub fn short_display_name(&self) -> &str {
        &self.short_name
    }

    pub fn is_extinct(&self) -> bool {
        self.extinct
    }

    /// Unix timestamp (seconds) of creation.
    pub fn creation_timestamp(&self) -> i64 {
        self.created_at
    }
}

// =#========================================================================#=
// LINEAGE NODE DATA
// =#========================================================================#=
/// Payload of a lineage tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageNodeData {
    /// Species at this node
    pub species: Species,
    /// Whether this node lies on the direct ancestor path of the focal
    /// species; only affects edge emphasis in raster output
    pub is_ancestor: bool,
}

impl LineageNodeData {
    pub fn new(species: Species, is_ancestor: bool) -> Self {
        LineageNodeData {
            species,
            is_ancestor,
        }
    }

    /// Payload for a node on the ancestor path.
    pub fn ancestor(species: Species) -> Self {
        Self::new(species, true)
    }

    /// Payload for a node off the ancestor path (descendants, collaterals).
    pub fn descendant(species: Species) -> Self {
        Self::new(species, false)
    }
}
