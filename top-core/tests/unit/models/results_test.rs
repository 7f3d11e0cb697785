use super::*;

#[test]
fn can_create_algorithm_id() {
    assert_eq!(create_algorithm_id("TS", Some("pumped30000")), "TS (pumped30000)");
    assert_eq!(create_algorithm_id("GR#1", None), "GR#1");
    assert_eq!(create_algorithm_id("GR#1", Some("")), "GR#1");
}

#[test]
fn can_zero_profit_of_infeasible_record() {
    let feasible = ResultRecord::new("p1.2.a".to_string(), "SA".to_string(), Some("hot".to_string()), 120, true);
    let infeasible = ResultRecord::new("p1.2.a".to_string(), "SA".to_string(), Some("hot".to_string()), 120, false);

    assert_eq!(feasible.profit, 120);
    assert_eq!(feasible.algorithm_id, "SA (hot)");
    assert_eq!(infeasible.profit, 0);
    assert!(!infeasible.feasible);
}
