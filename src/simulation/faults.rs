use std::collections::HashSet;

use rand::Rng;

/// A participant identifier. Id 0 is the commander, the rest are
/// lieutenants.
pub type GeneralId = usize;

/// The set of generals marked faulty for one run. Faultiness belongs to the
/// identifier and never changes mid-run.
#[derive(Debug, Clone, Default)]
pub struct FaultSet {
    ids: HashSet<GeneralId>,
}

impl FaultSet {
    /// Draw exactly `num_faulty` distinct ids uniformly without replacement
    /// from `[0, num_generals)`. The commander may be drawn like anyone
    /// else. The caller supplies the generator, so a seeded rng reproduces
    /// the draw.
    pub fn draw<R: Rng>(rng: &mut R, num_generals: usize, num_faulty: usize) -> Self {
        let ids = rand::seq::index::sample(rng, num_generals, num_faulty)
            .into_iter()
            .collect();
        FaultSet { ids }
    }

    /// Build a fixed fault set, bypassing the random draw.
    pub fn from_ids<I: IntoIterator<Item = GeneralId>>(ids: I) -> Self {
        FaultSet {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn is_faulty(&self, id: GeneralId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Members in ascending id order, for logging and reports.
    pub fn sorted_ids(&self) -> Vec<GeneralId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_size_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let faults = FaultSet::draw(&mut rng, 10, 3);
            assert_eq!(faults.len(), 3);
            assert!(faults.sorted_ids().iter().all(|&id| id < 10));
        }
    }

    #[test]
    fn test_draw_distinct_members() {
        let mut rng = StdRng::seed_from_u64(42);
        // Drawing everyone leaves no room for duplicates
        let faults = FaultSet::draw(&mut rng, 6, 6);
        assert_eq!(faults.sorted_ids(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_commander_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut saw_commander = false;
        for _ in 0..200 {
            if FaultSet::draw(&mut rng, 4, 1).is_faulty(0) {
                saw_commander = true;
                break;
            }
        }
        assert!(saw_commander);
    }

    #[test]
    fn test_draw_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        let faults = FaultSet::draw(&mut rng, 5, 0);
        assert!(faults.is_empty());
        assert!(!faults.is_faulty(0));
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let a = FaultSet::draw(&mut StdRng::seed_from_u64(123), 12, 4);
        let b = FaultSet::draw(&mut StdRng::seed_from_u64(123), 12, 4);
        assert_eq!(a.sorted_ids(), b.sorted_ids());
    }
}
