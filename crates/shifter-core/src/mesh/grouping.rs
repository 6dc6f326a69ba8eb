//! Exact-position vertex grouping
//!
//! Extruded solids split every corner once per adjacent face so each face can
//! carry its own normal. Grouping folds those copies back into one logical
//! vertex so they can be edited together.

use std::collections::HashMap;

use glam::{Mat4, Vec3};

use super::RawVertexBuffer;

/// Hashable identity of a local coordinate triple.
///
/// Two positions share a key iff their components are bit-for-bit equal,
/// except that `-0.0` and `0.0` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey([u32; 3]);

impl VertexKey {
    pub fn new(position: Vec3) -> Self {
        Self(position.to_array().map(canonical_bits))
    }

    /// Recover the coordinate the key was built from
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.0.map(f32::from_bits))
    }
}

fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// One logical vertex: every raw index sharing a local position
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGroup {
    pub key: VertexKey,
    /// Local position shared by all members
    pub position: Vec3,
    /// Raw buffer indices, ascending
    pub indices: Vec<usize>,
}

impl VertexGroup {
    /// Position of the group after applying a world transform
    pub fn world_position(&self, transform: &Mat4) -> Vec3 {
        transform.transform_point3(self.position)
    }
}

/// Partition of a raw vertex buffer into logical vertices.
///
/// Groups are ordered by the first raw index that introduced them, so the
/// same buffer always yields the same grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexGroups {
    groups: Vec<VertexGroup>,
    /// Group position for each raw index
    owner: Vec<usize>,
}

impl VertexGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexGroup> {
        self.groups.iter()
    }

    pub fn get(&self, group: usize) -> Option<&VertexGroup> {
        self.groups.get(group)
    }

    /// Group containing a raw vertex
    pub fn group_of(&self, raw_index: usize) -> Option<&VertexGroup> {
        self.owner
            .get(raw_index)
            .and_then(|&group| self.groups.get(group))
    }

    /// Number of raw vertices covered by the grouping
    pub fn raw_len(&self) -> usize {
        self.owner.len()
    }
}

/// Group raw vertices by exact local position in a single pass.
pub fn group_vertices(buffer: &RawVertexBuffer) -> VertexGroups {
    let positions = buffer.positions();
    let mut lookup: HashMap<VertexKey, usize> = HashMap::with_capacity(positions.len());
    let mut groups: Vec<VertexGroup> = Vec::new();
    let mut owner = Vec::with_capacity(positions.len());

    for (index, &position) in positions.iter().enumerate() {
        let key = VertexKey::new(position);
        let group = *lookup.entry(key).or_insert_with(|| {
            groups.push(VertexGroup {
                key,
                position,
                indices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[group].indices.push(index);
        owner.push(group);
    }

    tracing::debug!(
        "Grouped {} raw vertices into {} logical vertices",
        positions.len(),
        groups.len()
    );

    VertexGroups { groups, owner }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_corner_copies() -> RawVertexBuffer {
        RawVertexBuffer::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_grouping_merges_exact_copies() {
        let groups = group_vertices(&cube_corner_copies());

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.get(0).unwrap().indices, vec![0, 2, 5]);
        assert_eq!(groups.get(1).unwrap().indices, vec![1, 4]);
        assert_eq!(groups.get(2).unwrap().indices, vec![3]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let buffer = cube_corner_copies();
        let groups = group_vertices(&buffer);

        let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.indices.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..buffer.len()).collect::<Vec<_>>());
        assert_eq!(groups.raw_len(), buffer.len());
    }

    #[test]
    fn test_grouping_does_not_use_tolerance() {
        let buffer = RawVertexBuffer::new(vec![Vec3::ZERO, Vec3::new(1e-7, 0.0, 0.0)]);
        assert_eq!(group_vertices(&buffer).len(), 2);
    }

    #[test]
    fn test_signed_zero_shares_a_key() {
        assert_eq!(
            VertexKey::new(Vec3::new(-0.0, 1.0, 0.0)),
            VertexKey::new(Vec3::new(0.0, 1.0, -0.0))
        );
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let buffer = cube_corner_copies();
        assert_eq!(group_vertices(&buffer), group_vertices(&buffer));
    }

    #[test]
    fn test_group_of_and_world_position() {
        let groups = group_vertices(&cube_corner_copies());
        let group = groups.group_of(4).unwrap();
        assert_eq!(group.position, Vec3::new(1.0, 0.0, 0.0));

        let lifted = group.world_position(&Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)));
        approx::assert_relative_eq!(lifted.y, 2.0);
        assert!(groups.group_of(99).is_none());
    }

    #[test]
    fn test_empty_buffer_has_no_groups() {
        let groups = group_vertices(&RawVertexBuffer::default());
        assert!(groups.is_empty());
    }
}
