/// State-based merge trait.
///
/// Implementors converge: any two replicas that have merged the same set of
/// states, in any order and any number of times, hold equal states.
///
/// # Properties
///
/// `merge` must be a join-semilattice operation:
/// - **Commutative:** merging A then B equals merging B then A
/// - **Associative:** grouping of merges does not matter
/// - **Idempotent:** merging the same state again changes nothing
///
/// # Example
///
/// ```
/// use marray::prelude::*;
///
/// let a: MArray<&str> = MArray::new("r1");
/// a.push("x");
///
/// let mut b: MArray<&str> = MArray::new("r2");
/// b.push("y");
///
/// Crdt::merge(&mut b, &a);
/// assert_eq!(b.len(), 2);
/// ```
pub trait Crdt {
    /// Merge another replica's state into this one.
    ///
    /// Afterwards `self` holds the least upper bound of both states.
    fn merge(&mut self, other: &Self);
}
