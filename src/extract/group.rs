//! Stable partitioning of fragment records by group identifier.
//!
//! Groups are kept in first-occurrence order and each group keeps its
//! fragments in input order, so the result does not depend on hash map
//! iteration order.

use std::collections::{HashMap, hash_map::Entry};

use crate::fragment::{FragmentRecord, GroupId};

/// Fragments sharing one [`GroupId`], in input order.
#[derive(Clone, Debug)]
pub struct FragmentGroup<'a> {
    group_id: &'a GroupId,
    fragments: Vec<&'a FragmentRecord>,
}

impl<'a> FragmentGroup<'a> {
    /// Identifier shared by every fragment in the group.
    #[must_use]
    pub fn group_id(&self) -> &'a GroupId { self.group_id }

    /// Borrow the group's fragments in input order.
    #[must_use]
    pub fn fragments(&self) -> &[&'a FragmentRecord] { &self.fragments }
}

/// Ordered mapping from [`GroupId`] to the fragments that carry it.
#[derive(Clone, Debug, Default)]
pub struct FragmentGroups<'a> {
    positions: HashMap<&'a GroupId, usize>,
    groups: Vec<FragmentGroup<'a>>,
}

impl<'a> FragmentGroups<'a> {
    /// Number of distinct group identifiers.
    #[must_use]
    pub fn len(&self) -> usize { self.groups.len() }

    /// Whether no fragments were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Look up the fragments for `group_id`.
    #[must_use]
    pub fn get(&self, group_id: &GroupId) -> Option<&FragmentGroup<'a>> {
        self.positions
            .get(group_id)
            .and_then(|&position| self.groups.get(position))
    }

    /// Iterate over groups in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, FragmentGroup<'a>> { self.groups.iter() }

    fn push(&mut self, record: &'a FragmentRecord) {
        match self.positions.entry(record.group_id()) {
            Entry::Occupied(occupied) => {
                if let Some(group) = self.groups.get_mut(*occupied.get()) {
                    group.fragments.push(record);
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(self.groups.len());
                self.groups.push(FragmentGroup {
                    group_id: record.group_id(),
                    fragments: vec![record],
                });
            }
        }
    }
}

impl<'g, 'a> IntoIterator for &'g FragmentGroups<'a> {
    type Item = &'g FragmentGroup<'a>;
    type IntoIter = std::slice::Iter<'g, FragmentGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Partition `records` by group identifier.
///
/// # Examples
///
/// ```
/// use bundleframe::{extract::group_fragments, fragment::FragmentRecord};
///
/// let records = [
///     FragmentRecord::new("X", 0, 0, 1, "{}"),
///     FragmentRecord::new("Y", 0, 0, 1, "[]"),
///     FragmentRecord::new("X", 0, 0, 2, "{}"),
/// ];
/// let groups = group_fragments(&records);
/// let ids: Vec<_> = groups.iter().map(|g| g.group_id().as_str()).collect();
/// assert_eq!(ids, ["X", "Y"]);
/// ```
pub fn group_fragments<'a, I>(records: I) -> FragmentGroups<'a>
where
    I: IntoIterator<Item = &'a FragmentRecord>,
{
    let mut groups = FragmentGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}
