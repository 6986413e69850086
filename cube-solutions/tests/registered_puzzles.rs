//! The solutions crate registers its puzzles through the plugin system

use cube_game::CapacityTable;
use cube_solutions as _;
use cube_solver::{RegistryBuilder, RunSettings, SolverError};
use proptest::prelude::*;

#[test]
fn test_both_days_registered() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let names: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.day, info.name, info.parts))
        .collect();
    assert_eq!(names, vec![(1, "trebuchet", 2), (2, "cube-conundrum", 2)]);
}

#[test]
fn test_parse_failure_reaches_registry_caller() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let result = registry.create_solver(2, "Game 1: 3 red\nnot a game", &RunSettings::default());
    match result {
        Err(SolverError::ParseError(e)) => assert!(e.to_string().contains("line 2")),
        Err(other) => panic!("expected a parse error, got {other}"),
        Ok(_) => panic!("malformed input must not produce a solver"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Raising every capacity can only add games to the valid-id sum and
    /// never changes the power sum
    #[test]
    fn prop_capacities_are_monotonic(extra in 0u32..10) {
        let input = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green\n\
                     Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red\n\
                     Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red";
        let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

        let base = RunSettings::default();
        let raised = RunSettings {
            capacities: CapacityTable::new(12 + extra, 13 + extra, 14 + extra),
            ..base
        };

        let mut a = registry.create_solver(2, input, &base).unwrap();
        let mut b = registry.create_solver(2, input, &raised).unwrap();
        let ids_a: u64 = a.solve(1).unwrap().answer.parse().unwrap();
        let ids_b: u64 = b.solve(1).unwrap().answer.parse().unwrap();
        prop_assert!(ids_b >= ids_a);
        prop_assert_eq!(a.solve(2).unwrap().answer, b.solve(2).unwrap().answer);
    }
}
