use crate::config::ExploreConfig;
use crate::explore::{explore_orbit, explore_tree, Budget, Collector, Emission, LimitTree};
use crate::group::recipes::theta_schottky;


#[test]
fn test_budget_limits() {
    let budget = Budget::unlimited();
    assert!(budget.allows(usize::MAX - 1));

    let budget = Budget::unlimited().with_max_items(3);
    assert!(budget.has_room(2));
    assert!(!budget.has_room(3));
    assert_eq!(budget.remaining_after(2).max_items(), Some(1));
    assert_eq!(budget.remaining_after(5).max_items(), Some(0));

    let expired = Budget::unlimited().with_deadline(std::time::Instant::now());
    assert!(expired.past_deadline());
    assert!(!expired.allows(0));
}

#[test]
fn test_collector_arrays() {
    let group = theta_schottky(std::f64::consts::PI / 5.0).unwrap();
    let mut collector = Collector::new();
    let config = ExploreConfig {
        max_depth: 1,
        ..Default::default()
    };
    explore_tree(&group, &config, &mut collector).unwrap();

    let circles = collector.circles_array();
    assert_eq!(circles.shape(), &[LimitTree::expected_count(4, 1).unwrap(), 3]);
    assert_eq!(circles[[0, 0]], group.circles()[0].center.re);
    assert_eq!(circles[[0, 2]], group.circles()[0].radius);
    assert_eq!(collector.points_array().shape(), &[0, 2]);

    let config = ExploreConfig {
        sample_count: 50,
        ..Default::default()
    };
    let mut collector = Collector::new();
    let outcome = explore_orbit(&group, &config, &mut collector).unwrap();
    let points = collector.points_array();
    assert_eq!(points.shape(), &[outcome.emitted, 2]);
    assert_eq!(points[[0, 1]], collector.points[0].im);
}

#[test]
fn test_explore_rejects_bad_config() {
    let group = theta_schottky(std::f64::consts::PI / 5.0).unwrap();
    let config = ExploreConfig {
        runs: 0,
        ..Default::default()
    };
    let mut sink: Vec<Emission> = Vec::new();
    assert!(explore_orbit(&group, &config, &mut sink).is_err());
    assert!(explore_tree(&group, &config, &mut sink).is_err());
    assert!(sink.is_empty());
}
