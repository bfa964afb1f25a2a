use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn tri() -> (Vec<[f32; 2]>, Vec<u32>) {
        (vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], vec![0, 1, 2])
    }

    fn colors_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Mesh(m) => m.color.a,
            })
            .collect()
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        for a in [0.1, 0.2, 0.3] {
            let (v, i) = tri();
            list.push_mesh(ZIndex::new(0), v, i, Color::from_premul(0.0, 0.0, 0.0, a));
        }
        assert_eq!(colors_in_paint_order(&mut list), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        let (v, i) = tri();
        list.push_mesh(ZIndex::new(5), v, i, Color::from_premul(0.0, 0.0, 0.0, 0.5));
        let (v, i) = tri();
        list.push_mesh(ZIndex::new(1), v, i, Color::from_premul(0.0, 0.0, 0.0, 0.25));
        assert_eq!(colors_in_paint_order(&mut list), vec![0.25, 0.5]);
    }

    #[test]
    fn degenerate_mesh_is_dropped() {
        let mut list = DrawList::new();
        list.push_mesh(ZIndex::new(0), vec![[0.0, 0.0]], vec![0], Color::transparent());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_resets_items() {
        let mut list = DrawList::new();
        let (v, i) = tri();
        list.push_mesh(ZIndex::new(0), v, i, Color::transparent());
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter_in_paint_order().count(), 0);
    }
}
