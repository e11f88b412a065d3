//! Symbol table implementation using a binary search tree
//!
//! This module provides the per-compilation-unit symbol table:
//! - [`SymbolTable`]: an ordered map from identifier name to [`SymbolData`]
//! - [`SymbolData`]: the inferred [`SymbolType`] plus [`SymbolFlags`]
//!
//! The tree is keyed lexicographically on the identifier name; the ordering
//! is used only for placement, never semantically. No rebalancing is
//! performed: tables are rebuilt per compilation unit and stay small, so a
//! worst-case linear depth is acceptable. Deleting a node with two children
//! replaces it with its in-order successor.
//!
//! A table instance is owned by exactly one analysis run and released when
//! that run ends; concurrent analyses each construct their own table.

use std::cmp::Ordering;

/// Data types a symbol can take once its defining expression is inferred.
///
/// Variants are ordered by width: `Float` is wider than `Int`, which is
/// wider than `Unknown`, so the wider of two operand types is their `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolType {
    Unknown,
    Int,
    Float,
}

/// Per-symbol flag bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolFlags(u8);

impl SymbolFlags {
    /// The symbol has a value; references to it are legal from here on.
    pub const DEFINED: SymbolFlags = SymbolFlags(0x01);
    /// The symbol may never be reassigned. Once set, permanent.
    pub const CONSTANT: SymbolFlags = SymbolFlags(0x02);

    pub fn empty() -> Self {
        SymbolFlags(0)
    }

    pub fn set(&mut self, flag: SymbolFlags) {
        self.0 |= flag.0;
    }

    pub fn clear(&mut self, flag: SymbolFlags) {
        self.0 &= !flag.0;
    }

    pub fn contains(self, flag: SymbolFlags) -> bool {
        self.0 & flag.0 == flag.0
    }
}

/// The data attached to one symbol table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolData {
    ty: SymbolType,
    flags: SymbolFlags,
}

impl SymbolData {
    fn new() -> Self {
        Self {
            ty: SymbolType::Unknown,
            flags: SymbolFlags::empty(),
        }
    }

    pub fn ty(&self) -> SymbolType {
        self.ty
    }

    pub fn set_type(&mut self, ty: SymbolType) {
        self.ty = ty;
    }

    pub fn flags(&self) -> SymbolFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut SymbolFlags {
        &mut self.flags
    }
}

#[derive(Debug, PartialEq)]
struct TreeNode {
    name: String,
    data: SymbolData,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: SymbolData::new(),
            left: None,
            right: None,
        }
    }
}

/// Ordered symbol table over identifier names.
#[derive(Debug, Default, PartialEq)]
pub struct SymbolTable {
    root: Option<Box<TreeNode>>,
    len: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up an entry, `None` if absent.
    pub fn find(&self, name: &str) -> Option<&SymbolData> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match name.cmp(n.name.as_str()) {
                Ordering::Equal => return Some(&n.data),
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    /// Look up an entry mutably, `None` if absent.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SymbolData> {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            node = match name.cmp(n.name.as_str()) {
                Ordering::Equal => return Some(&mut n.data),
                Ordering::Less => n.left.as_deref_mut(),
                Ordering::Greater => n.right.as_deref_mut(),
            };
        }
        None
    }

    /// Insert a fresh entry for `name`, or return the existing entry
    /// unchanged. Fresh entries start with type `Unknown` and no flags.
    pub fn insert(&mut self, name: &str) -> &mut SymbolData {
        let node = Self::insert_node(&mut self.root, name, &mut self.len);
        &mut node.data
    }

    fn insert_node<'a>(
        slot: &'a mut Option<Box<TreeNode>>,
        name: &str,
        len: &mut usize,
    ) -> &'a mut TreeNode {
        match slot {
            Some(node) => match name.cmp(node.name.as_str()) {
                Ordering::Equal => node,
                Ordering::Less => {
                    Self::insert_node(&mut node.left, name, len)
                }
                Ordering::Greater => {
                    Self::insert_node(&mut node.right, name, len)
                }
            },
            None => {
                *len += 1;
                slot.insert(Box::new(TreeNode::new(name)))
            }
        }
    }

    /// Remove an entry if present. A node with two children is replaced by
    /// its in-order successor (the leftmost node of its right subtree).
    pub fn remove(&mut self, name: &str) {
        if Self::remove_node(&mut self.root, name) {
            self.len -= 1;
        }
    }

    fn remove_node(slot: &mut Option<Box<TreeNode>>, name: &str) -> bool {
        let Some(node) = slot else {
            return false;
        };

        match name.cmp(node.name.as_str()) {
            Ordering::Less => Self::remove_node(&mut node.left, name),
            Ordering::Greater => Self::remove_node(&mut node.right, name),
            Ordering::Equal => {
                Self::unlink(slot);
                true
            }
        }
    }

    /// Unlink the node occupying `slot`, splicing its subtrees back in.
    fn unlink(slot: &mut Option<Box<TreeNode>>) {
        let Some(mut node) = slot.take() else {
            return;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some((name, data)) = Self::take_min(&mut right) {
                    node.name = name;
                    node.data = data;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
    }

    /// Detach the leftmost node reachable from `slot` and return its payload.
    fn take_min(
        slot: &mut Option<Box<TreeNode>>,
    ) -> Option<(String, SymbolData)> {
        if slot.as_ref()?.left.is_some() {
            let node = slot.as_mut()?;
            Self::take_min(&mut node.left)
        } else {
            let node = slot.take()?;
            *slot = node.right;
            Some((node.name, node.data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(names: &[&str]) -> SymbolTable {
        let mut table = SymbolTable::new();
        for name in names {
            table.insert(name);
        }
        table
    }

    #[test]
    fn test_find_on_empty_table() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(table.find("a").is_none());
    }

    #[test]
    fn test_insert_and_find() {
        let table = table_with(&["m", "d", "t", "a", "f"]);
        assert_eq!(table.len(), 5);

        for name in ["m", "d", "t", "a", "f"] {
            let data = table.find(name).expect("entry should exist");
            assert_eq!(data.ty(), SymbolType::Unknown);
            assert_eq!(data.flags(), SymbolFlags::empty());
        }
        assert!(table.find("z").is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = SymbolTable::new();
        table.insert("a").set_type(SymbolType::Float);
        table.insert("a");

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("a").unwrap().ty(), SymbolType::Float);
    }

    #[test]
    fn test_flags_round_trip() {
        let mut table = SymbolTable::new();
        let data = table.insert("a");
        data.flags_mut().set(SymbolFlags::DEFINED);
        data.flags_mut().set(SymbolFlags::CONSTANT);

        let flags = table.find("a").unwrap().flags();
        assert!(flags.contains(SymbolFlags::DEFINED));
        assert!(flags.contains(SymbolFlags::CONSTANT));

        table.find_mut("a").unwrap().flags_mut().clear(SymbolFlags::CONSTANT);
        let flags = table.find("a").unwrap().flags();
        assert!(flags.contains(SymbolFlags::DEFINED));
        assert!(!flags.contains(SymbolFlags::CONSTANT));
    }

    #[test]
    fn test_remove_leaf() {
        let mut table = table_with(&["m", "d", "t"]);
        table.remove("d");

        assert_eq!(table.len(), 2);
        assert!(table.find("d").is_none());
        assert!(table.find("m").is_some());
        assert!(table.find("t").is_some());
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut table = table_with(&["m", "d", "a"]);
        table.remove("d");

        assert!(table.find("d").is_none());
        assert!(table.find("a").is_some());
        assert!(table.find("m").is_some());
    }

    #[test]
    fn test_remove_node_with_two_children() {
        // Removing the root exercises in-order-successor replacement.
        let mut table = table_with(&["m", "d", "t", "a", "f", "p", "z"]);
        table.insert("p").set_type(SymbolType::Int);
        table.remove("m");

        assert_eq!(table.len(), 6);
        assert!(table.find("m").is_none());
        for name in ["d", "t", "a", "f", "p", "z"] {
            assert!(table.find(name).is_some(), "lost entry {name}");
        }
        // The successor kept its data when it moved up.
        assert_eq!(table.find("p").unwrap().ty(), SymbolType::Int);
    }

    #[test]
    fn test_remove_absent_name() {
        let mut table = table_with(&["m"]);
        table.remove("q");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_adversarial_insertion_order() {
        // Sorted insertion degenerates to a list; behavior must not change.
        let names = ["a", "b", "c", "d", "e", "f"];
        let table = table_with(&names);
        for name in names {
            assert!(table.find(name).is_some());
        }
    }
}
