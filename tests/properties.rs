//! Property tests for tour bookkeeping and the local-search primitives.

use proptest::prelude::*;
use tsp_refine::construct::random_tour;
use tsp_refine::instance::Instance;
use tsp_refine::opt2::{candidate_pairs, delta_cost, descend, IMPROVEMENT_EPSILON};
use tsp_refine::tour::{costs_agree, cycle_cost};
use tsp_refine::vns::kick_sol;

fn instance_strategy() -> impl Strategy<Value = Instance> {
    prop::collection::vec((0.0..1000.0f64, 0.0..1000.0f64), 5..40)
        .prop_map(|coords| Instance::from_coords(&coords).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cached_cost_tracks_recomputation(
        inst in instance_strategy(),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let mut rng = u_numflow::random::create_rng(seed);
        let mut tour = random_tour(&inst, &mut rng);
        let pairs: Vec<(usize, usize)> = candidate_pairs(inst.dimension()).collect();
        for pick in picks {
            let (i, j) = pairs[pick % pairs.len()];
            let delta = delta_cost(&inst, &tour, i, j);
            tour.apply_reversal(i, j, delta);
            prop_assert!(costs_agree(tour.cost(), cycle_cost(&inst, tour.nodes())));
        }
        prop_assert!(tour.check(&inst).is_ok());
    }

    #[test]
    fn reversal_twice_restores_tour(
        inst in instance_strategy(),
        seed in any::<u64>(),
        pick in any::<usize>(),
    ) {
        let mut rng = u_numflow::random::create_rng(seed);
        let original = random_tour(&inst, &mut rng);
        let pairs: Vec<(usize, usize)> = candidate_pairs(inst.dimension()).collect();
        let (i, j) = pairs[pick % pairs.len()];

        let mut tour = original.clone();
        let forward = delta_cost(&inst, &tour, i, j);
        tour.apply_reversal(i, j, forward);
        let backward = delta_cost(&inst, &tour, i, j);
        prop_assert_eq!(backward, -forward);
        tour.apply_reversal(i, j, backward);

        prop_assert_eq!(tour.nodes(), original.nodes());
        prop_assert!((tour.cost() - original.cost()).abs() <= 1e-9 * original.cost().max(1.0));
    }

    #[test]
    fn descent_is_monotone_and_locally_optimal(
        inst in instance_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = u_numflow::random::create_rng(seed);
        let mut tour = random_tour(&inst, &mut rng);
        let before = tour.cost();
        let outcome = descend(&inst, &mut tour, None, None);
        prop_assert!(outcome.converged);
        prop_assert!(tour.cost() <= before + 1e-9);
        prop_assert!(tour.check(&inst).is_ok());
        for (i, j) in candidate_pairs(inst.dimension()) {
            prop_assert!(delta_cost(&inst, &tour, i, j) >= -IMPROVEMENT_EPSILON);
        }
    }

    #[test]
    fn kicks_preserve_permutation(
        inst in instance_strategy(),
        seed in any::<u64>(),
        max_kicks in 1usize..10,
    ) {
        let mut rng = u_numflow::random::create_rng(seed);
        let mut tour = random_tour(&inst, &mut rng);
        let count = kick_sol(&inst, &mut tour, max_kicks, &mut rng);
        prop_assert!((1..=max_kicks).contains(&count));
        prop_assert!(tour.check(&inst).is_ok());
    }
}
