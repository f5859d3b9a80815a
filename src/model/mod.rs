//! Data model for lineage trees.
//!
//! # Tree representation
//! Trees are represented by [GenTree], which uses the arena pattern to store
//! [Node]s referenced by [NodeIndex]. Every node has an ordered list of
//! children and an optional parent index; the root is always index `0`.
//!
//! | Type | Payload | Use case |
//! |------|---------|----------|
//! | [`GenTree<T>`] | any `T` | Generic ownership tree |
//! | [LineageTree] | [LineageNodeData] | Input of all renderers |
//!
//! # Building trees
//! Lineage trees are assembled by the caller from stored ancestry records,
//! top-down, with [GenTree::with_root] and [GenTree::add_child]. The
//! builder is responsible for rejecting cycles; the renderers take the
//! tree shape as given.

pub mod lineage;
pub mod node;
pub mod tree;

// Tree (generic)
pub use node::Node;
pub use tree::GenTree;
pub use tree::NodeIndex;
// Lineage
pub use lineage::LineageNodeData;
pub use lineage::LineageTree;
pub use lineage::Species;
pub use lineage::SpeciesId;
