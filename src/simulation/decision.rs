use super::order::Order;
use super::tree::RelayTree;

/*
    The decision pass reduces the relay tree bottom-up. A leaf decides the
    value it received. An internal node takes a majority vote over its
    children's decisions, and the vote is deliberately asymmetric: ATTACK
    wins only on a strict majority, a tie falls back to RETREAT. The
    commander's decision after the pass is the consensus value.
*/

impl RelayTree {
    /// Run the majority-vote pass, filling every node's `decision`.
    /// Returns the commander's decision, the consensus value.
    pub fn decide(&mut self) -> Order {
        self.decide_node(0)
    }

    fn decide_node(&mut self, idx: usize) -> Order {
        let decision = if self.nodes[idx].children.is_empty() {
            self.nodes[idx].value
        } else {
            let children = self.nodes[idx].children.clone();
            let mut attack = 0usize;
            let mut retreat = 0usize;
            for child in children {
                match self.decide_node(child) {
                    Order::Attack => attack += 1,
                    Order::Retreat => retreat += 1,
                }
            }
            if attack > retreat {
                Order::Attack
            } else {
                Order::Retreat
            }
        };
        self.nodes[idx].decision = Some(decision);
        decision
    }
}
