// SPDX-License-Identifier: MPL-2.0

//! Property tests for the hierarchical selection filter.

use proptest::prelude::*;

use facetree::filter::{FilterChild, FilterNode, FilterState};

/// A randomly generated two-level tree with globally unique ids.
fn tree_strategy() -> impl Strategy<Value = Vec<FilterNode>> {
    proptest::collection::vec(0usize..=3, 1..=5).prop_map(|child_counts| {
        child_counts
            .into_iter()
            .enumerate()
            .map(|(p, count)| {
                let children = (0..count)
                    .map(|c| FilterChild::new(format!("p{p}c{c}"), format!("Child {p}.{c}")))
                    .collect();
                FilterNode::new(format!("p{p}"), format!("Parent {p}"), children)
            })
            .collect()
    })
}

/// A raw operation against a tree; indices are taken modulo the tree shape.
#[derive(Debug, Clone)]
enum RawOp {
    Parent { parent: usize, checked: bool },
    Child { parent: usize, child: usize, checked: bool },
    Reset,
}

fn op_strategy() -> impl Strategy<Value = RawOp> {
    prop_oneof![
        4 => (any::<usize>(), any::<bool>())
            .prop_map(|(parent, checked)| RawOp::Parent { parent, checked }),
        4 => (any::<usize>(), any::<usize>(), any::<bool>())
            .prop_map(|(parent, child, checked)| RawOp::Child { parent, child, checked }),
        1 => Just(RawOp::Reset),
    ]
}

/// Applies a raw operation, resolving indices against the actual tree.
fn apply(state: &mut FilterState, nodes: &[FilterNode], op: &RawOp) {
    match op {
        RawOp::Parent { parent, checked } => {
            let parent_id = nodes[*parent % nodes.len()].id.clone();
            state.set_parent(&parent_id, *checked);
        }
        RawOp::Child { parent, child, checked } => {
            let node = &nodes[*parent % nodes.len()];
            if node.children.is_empty() {
                return;
            }
            let child_id = node.children[*child % node.children.len()].id.clone();
            state.set_child(&child_id, &node.id, *checked);
        }
        RawOp::Reset => state.reset(),
    }
}

/// True if every parent with children is selected exactly when all of its
/// children are, and no childless parent got derived from children.
fn invariant_holds(state: &FilterState) -> bool {
    state.nodes().iter().all(|node| {
        if !node.has_children() {
            return true;
        }
        let all_children = node
            .child_ids()
            .all(|id| state.is_child_selected(id));
        state.is_parent_selected(&node.id) == all_children
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parent/child consistency invariant survives any
    /// sequence of operations.
    #[test]
    fn property_invariant_holds_under_any_sequence(
        nodes in tree_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut state = FilterState::new(nodes.clone());

        for op in &ops {
            apply(&mut state, &nodes, op);
            prop_assert!(
                invariant_holds(&state),
                "invariant broken after {op:?}: {:?}",
                state.snapshot()
            );
        }
    }

    /// PROPERTY: Applying the same operation twice changes nothing the
    /// second time.
    #[test]
    fn property_operations_are_idempotent(
        nodes in tree_strategy(),
        prefix in proptest::collection::vec(op_strategy(), 0..20),
        op in op_strategy(),
    ) {
        let mut state = FilterState::new(nodes.clone());
        for earlier in &prefix {
            apply(&mut state, &nodes, earlier);
        }

        apply(&mut state, &nodes, &op);
        let once = state.snapshot();
        apply(&mut state, &nodes, &op);

        prop_assert_eq!(state.snapshot(), once);
    }

    /// PROPERTY: Reset always empties the selection completely.
    #[test]
    fn property_reset_is_complete(
        nodes in tree_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut state = FilterState::new(nodes.clone());
        for op in &ops {
            apply(&mut state, &nodes, op);
        }

        state.reset();

        prop_assert!(state.is_empty());
        prop_assert_eq!(state.selected_parents().len(), 0);
        prop_assert_eq!(state.selected_children().len(), 0);
    }

    /// PROPERTY: Operations naming ids outside the tree never panic and
    /// never change the selection.
    #[test]
    fn property_unknown_ids_are_safe(
        nodes in tree_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..20),
        unknown in "zz_[a-z]{1,8}",
        checked in any::<bool>(),
    ) {
        let mut state = FilterState::new(nodes.clone());
        for op in &ops {
            apply(&mut state, &nodes, op);
        }
        let before = state.snapshot();

        // Tree ids all start with 'p', so these can never resolve
        prop_assert!(!state.set_parent(&unknown, checked));
        prop_assert!(!state.set_child(&unknown, &unknown, checked));
        if let Some(first) = nodes.first() {
            // Known child paired with an unknown parent is equally inert
            if let Some(child) = first.children.first() {
                prop_assert!(!state.set_child(&child.id, &unknown, checked));
            }
        }

        prop_assert_eq!(state.snapshot(), before);
    }
}
