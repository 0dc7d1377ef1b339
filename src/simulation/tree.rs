use std::collections::{HashSet, VecDeque};

use tracing::debug;

use super::faults::{FaultSet, GeneralId};
use super::order::Order;

/*
    The oral message algorithm OM(m) has the commander send its value to
    every lieutenant, and then each lieutenant act as the commander of
    OM(m-1) for the value it received. We model the recursion as a tree of
    relay hops: each node records the value one general received along one
    particular chain of senders, and its children are the relays that
    general makes in the next round. m+1 rounds are played in total, the
    commander's initial broadcast plus m relay rounds.

    A faulty general in this simulator does not lie arbitrarily. It forwards
    the opposite order to even-numbered recipients and the true order to
    odd-numbered ones. That fixed parity rule is a property of this
    simulator, not of the general Byzantine model, where a traitor may tell
    every recipient a different story.
*/

/// One hop of message delivery: the value `owner` received along one chain
/// of senders, plus the relays it makes in the next round.
#[derive(Debug, Clone)]
pub struct RelayNode {
    /// The general this relay instance models.
    pub owner: GeneralId,
    /// The order this node believes it received.
    pub value: Order,
    /// Populated by the decision pass, `None` before it runs.
    pub decision: Option<Order>,
    /// Ids already incorporated on this path. A node never relays to a
    /// general in this set, which breaks cycles and bounds fan-out.
    pub seen: HashSet<GeneralId>,
    /// Arena indices of the relays made in the next round.
    pub children: Vec<usize>,
}

/// The dissemination tree, stored as an arena with the commander at
/// index 0.
#[derive(Debug, Clone)]
pub struct RelayTree {
    pub nodes: Vec<RelayNode>,
}

/// The value `recipient` hears when `sender` forwards `value`.
fn relayed_value(value: Order, sender_faulty: bool, recipient: GeneralId) -> Order {
    if sender_faulty && recipient % 2 == 0 {
        value.opposite()
    } else {
        value
    }
}

impl RelayTree {
    /// Build the relay tree by breadth-first expansion from the commander,
    /// bounded at `num_faulty + 1` rounds.
    pub fn disseminate(
        num_generals: usize,
        num_faulty: usize,
        order: Order,
        faults: &FaultSet,
    ) -> Self {
        let root = RelayNode {
            owner: 0,
            value: order,
            decision: None,
            seen: HashSet::from([0]),
            children: Vec::new(),
        };
        let mut tree = RelayTree { nodes: vec![root] };

        let mut queue = VecDeque::from([0usize]);
        let mut round = 0usize;
        let mut remaining_in_round = 1usize;
        let mut next_round_count = 0usize;

        while let Some(idx) = queue.pop_front() {
            // Nodes past the round bound stay leaves
            if round > num_faulty {
                break;
            }

            let sender = tree.nodes[idx].owner;
            let value = tree.nodes[idx].value;
            let seen = tree.nodes[idx].seen.clone();
            let sender_faulty = faults.is_faulty(sender);

            for recipient in 1..num_generals {
                // No self-relay, no relay back along the path; the
                // commander is pre-seeded so it is never re-messaged
                if seen.contains(&recipient) {
                    continue;
                }

                let mut child_seen = seen.clone();
                child_seen.insert(recipient);

                let child = RelayNode {
                    owner: recipient,
                    value: relayed_value(value, sender_faulty, recipient),
                    decision: None,
                    seen: child_seen,
                    children: Vec::new(),
                };
                let child_idx = tree.nodes.len();
                tree.nodes.push(child);
                tree.nodes[idx].children.push(child_idx);
                queue.push_back(child_idx);
                next_round_count += 1;
            }

            remaining_in_round -= 1;
            if remaining_in_round == 0 {
                debug!(round, nodes = next_round_count, "relay round complete");
                round += 1;
                remaining_in_round = next_round_count;
                next_round_count = 0;
            }
        }

        tree
    }

    pub fn root(&self) -> &RelayNode {
        &self.nodes[0]
    }

    /// Depth of each node in relay hops from the commander.
    #[cfg(test)]
    pub(crate) fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut queue = VecDeque::from([0usize]);
        while let Some(idx) = queue.pop_front() {
            for &child in &self.nodes[idx].children {
                depths[child] = depths[idx] + 1;
                queue.push_back(child);
            }
        }
        depths
    }
}
