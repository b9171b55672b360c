use calorie_knapsack::domain::assemble::INFEASIBLE_NOTE;
use calorie_knapsack::domain::solve::APPROXIMATION_NOTE;
use calorie_knapsack::domain::solver::Solver;
use calorie_knapsack::domain::solvers::ExhaustiveSolver;
use calorie_knapsack::domain::strategy::Strategy;
use calorie_knapsack::domain::validate::normalize;
use calorie_knapsack::{optimize, sample_request, OptimizationRequest, RawItem};

#[test]
fn test_sample_matches_exhaustive_optimum() {
    let request = sample_request();
    let response = optimize(&request);

    let problem = normalize(&request).unwrap();
    let truth = ExhaustiveSolver::new().solve(&problem);

    assert!(response.feasible);
    assert_eq!(truth.total_weight, 6000);
    assert_eq!(response.total_weight_kg, 6.0);
    assert_eq!(response.total_value, 16);
    assert!(response.total_value >= 15);

    let ids: Vec<&str> = response.selected_items.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["E2", "E4", "E5"]);
    assert_eq!(response.strategy, Strategy::ByValue.description());
    assert!(response.notes.is_empty());
}

#[test]
fn test_unreachable_target_is_infeasible() {
    let mut request = sample_request();
    request.min_value = 1_000_000;
    let response = optimize(&request);

    assert!(!response.feasible);
    assert!(response.selected_items.is_empty());
    assert_eq!(response.total_weight_kg, 0.0);
    assert_eq!(response.notes, vec![INFEASIBLE_NOTE.to_string()]);
}

#[test]
fn test_weight_too_small_to_scale() {
    let mut request = sample_request();
    request.items.push(RawItem::new("tiny", "Feather", 0.0001, 1));
    let response = optimize(&request);

    assert!(!response.feasible);
    assert_eq!(
        response.notes,
        vec!["Validation: the item at index 5 has a weightKg too small to scale.".to_string()]
    );
}

#[test]
fn test_validation_failures_in_order() {
    let cases = [
        (
            OptimizationRequest { min_value: 0, max_weight_kg: 0.0, items: vec![] },
            "Validation: minValue must be > 0.",
        ),
        (
            OptimizationRequest { min_value: 1, max_weight_kg: -1.0, items: vec![] },
            "Validation: maxWeightKg must be > 0.",
        ),
        (
            OptimizationRequest { min_value: 1, max_weight_kg: 1.0, items: vec![] },
            "Validation: the items list is required and must not be empty.",
        ),
        (
            OptimizationRequest {
                min_value: 1,
                max_weight_kg: 1.0,
                items: vec![RawItem::anonymous(1.0, 1), RawItem::anonymous(-2.0, 1)],
            },
            "Validation: the item at index 1 must have weightKg > 0.",
        ),
        (
            OptimizationRequest {
                min_value: 1,
                max_weight_kg: 1.0,
                items: vec![RawItem::anonymous(1.0, -1)],
            },
            "Validation: the item at index 0 must have value >= 0.",
        ),
        (
            OptimizationRequest {
                min_value: 1,
                max_weight_kg: 0.0002,
                items: vec![RawItem::anonymous(1.0, 1)],
            },
            "Validation: maxWeightKg is too small to scale.",
        ),
    ];

    for (request, note) in cases {
        let response = optimize(&request);
        assert!(!response.feasible, "{}", note);
        assert!(response.selected_items.is_empty(), "{}", note);
        assert_eq!(response.notes, vec![note.to_string()]);
    }
}

#[test]
fn test_oversized_input_uses_greedy_fallback() {
    // 30 items, 1.5 million calories in total and a 600 kg capacity: both DP
    // axes are above the ceiling
    let items: Vec<RawItem> = (0..30)
        .map(|i| {
            let weight_kg = 20.0 + ((i * 37) % 61) as f64 + 0.125;
            let value = 40_000 + ((i * 7_919) % 20_000) as i64;
            RawItem::new(format!("B{}", i), format!("Bag {}", i), weight_kg, value)
        })
        .collect();
    let request = OptimizationRequest {
        min_value: 500_000,
        max_weight_kg: 600.0,
        items,
    };

    let response = optimize(&request);

    assert_eq!(response.strategy, Strategy::Greedy.description());
    assert!(response.notes.contains(&APPROXIMATION_NOTE.to_string()));
    assert!(response.feasible);
    assert!(response.total_value >= 500_000);
    assert!(response.total_weight_kg <= 600.0);

    let weight: f64 = response.selected_items.iter().map(|s| s.weight_kg).sum();
    let value: u64 = response.selected_items.iter().map(|s| s.value).sum();
    assert!((weight - response.total_weight_kg).abs() < 1e-6);
    assert_eq!(value, response.total_value);
}

#[test]
fn test_many_items_fall_back_to_greedy_instead_of_huge_tables() {
    let request = OptimizationRequest {
        min_value: 100,
        max_weight_kg: 250.0,
        items: (0..80_000).map(|_| RawItem::anonymous(1.0, 9)).collect(),
    };

    let response = optimize(&request);

    assert_eq!(response.strategy, Strategy::Greedy.description());
    assert!(response.notes.contains(&APPROXIMATION_NOTE.to_string()));
    assert!(response.feasible);
    // 12 items of 9 calories are the fewest that reach 100
    assert_eq!(response.selected_items.len(), 12);
    assert_eq!(response.total_weight_kg, 12.0);
}

#[test]
fn test_half_gram_capacity_rounds_up() {
    let request = OptimizationRequest {
        min_value: 1,
        max_weight_kg: 0.5005,
        items: vec![RawItem::new("a", "Apple", 0.501, 1)],
    };

    let response = optimize(&request);

    assert!(response.feasible, "{:?}", response.notes);
    assert_eq!(response.total_weight_kg, 0.501);
}

#[test]
fn test_small_capacity_uses_weight_dp() {
    let request = OptimizationRequest {
        min_value: 700,
        max_weight_kg: 0.5,
        items: vec![
            RawItem::new("a", "Nuts", 0.2, 500),
            RawItem::new("b", "Chocolate", 0.15, 450),
            RawItem::new("c", "Cheese", 0.25, 400),
            RawItem::new("d", "Bread", 0.3, 700),
        ],
    };

    let response = optimize(&request);

    assert_eq!(response.strategy, Strategy::ByWeight.description());
    assert!(response.feasible);
    // Bread alone reaches the target at 0.3 kg; every pair is heavier
    assert_eq!(response.total_weight_kg, 0.3);
    assert_eq!(response.selected_items[0].id, "d");
}

#[test]
fn test_fractional_weights_round_trip_to_three_decimals() {
    let request = OptimizationRequest {
        min_value: 10,
        max_weight_kg: 2.0,
        items: vec![
            RawItem::new("a", "A", 0.3333, 4),
            RawItem::new("b", "B", 0.6667, 6),
            RawItem::new("c", "C", 1.5, 10),
        ],
    };

    let response = optimize(&request);

    assert!(response.feasible);
    // 333 g + 667 g
    assert_eq!(response.total_weight_kg, 1.0);
    assert_eq!(response.selected_items[0].weight_kg, 0.3333);
    assert_eq!(response.selected_items[1].weight_kg, 0.6667);
}

#[test]
fn test_optimize_is_deterministic() {
    let request = sample_request();
    assert_eq!(optimize(&request), optimize(&request));
}
