//! Node handles for the tree arenas

/// Handle to a node inside the tree that issued it.
///
/// A `NodeId` is an index into the owning tree's node arena and carries no
/// meaning for any other tree. Ids issued by
/// [`OrderStatTree`](crate::OrderStatTree) stay valid for the life of the
/// tree; ids issued by [`BinarySearchTree`](crate::BinarySearchTree) are
/// invalidated when their node is spliced out by `delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);
