//! Tests for the team planner.

use super::*;
use soulplan_config::ThreadCount;
use soulplan_core::{Attribute, Constraints, RangeConstraint, SetRequirement, Shikigami, Soul};
use soulplan_test::{inventory_of, striker, uniform_inventory};

fn member(name: &str, requirement: SetRequirement) -> Member {
    Member::new(name, striker(), requirement)
}

fn planner(threads: usize) -> TeamPlanner {
    TeamPlanner::new(&PlannerConfig::new().with_thread_count(ThreadCount::Specific(threads)))
}

#[test]
fn test_plan_member_claims_souls() {
    let mut inventory = uniform_inventory("shadow", 2);
    let assignment = planner(2)
        .plan_member(&mut inventory, &member("a", SetRequirement::primary("shadow")))
        .unwrap();

    assert!(assignment.is_satisfied());
    assert_eq!(assignment.member, "a");
    assert!(assignment.value() > 0);
    assert_eq!(inventory.len(), 6);
    for (slot, soul) in assignment.loadout.unwrap().souls.iter().enumerate() {
        assert!(!inventory.slot(slot).contains(soul));
    }
}

#[test]
fn test_later_members_see_depleted_inventory() {
    let mut inventory = uniform_inventory("shadow", 2);
    let team = [
        member("first", SetRequirement::primary("shadow")),
        member("second", SetRequirement::primary("shadow")),
        member("third", SetRequirement::primary("shadow")),
    ];

    let plan = planner(3).plan(&mut inventory, &team).unwrap();

    assert_eq!(plan.len(), 3);
    assert!(plan.assignments[0].is_satisfied());
    assert!(plan.assignments[1].is_satisfied());
    assert!(!plan.assignments[2].is_satisfied());
    assert!(!plan.is_complete());
    assert_eq!(plan.unsatisfied().count(), 1);
    assert!(inventory.is_empty());

    let first = plan.assignments[0].loadout.as_ref().unwrap();
    let second = plan.assignments[1].loadout.as_ref().unwrap();
    assert!(first.damage >= second.damage);
    assert_ne!(first.souls, second.souls);
}

#[test]
fn test_unsatisfied_member_keeps_inventory() {
    let mut inventory = uniform_inventory("harpy", 2);
    let before = inventory.clone();

    let assignment = planner(1)
        .plan_member(&mut inventory, &member("a", SetRequirement::primary("shadow")))
        .unwrap();

    assert!(!assignment.is_satisfied());
    assert_eq!(assignment.value(), 0);
    assert_eq!(inventory, before);
}

#[test]
fn test_member_settings_reach_evaluator() {
    let slot: &[Soul] = &[
        Soul::new("shadow").with_atk(300),
        Soul::new("shadow").with_spd(10),
    ];
    let mut inventory = inventory_of([slot; 6]);
    let fast = member("a", SetRequirement::primary("shadow")).with_constraints(
        Constraints::new().with(Attribute::Speed, RangeConstraint::at_least(147)),
    );

    let assignment = planner(2).plan_member(&mut inventory, &fast).unwrap();
    assert_eq!(assignment.loadout.unwrap().speed, 147);
}

#[test]
fn test_planner_ignore_crit_applies_to_members() {
    let config = PlannerConfig::new()
        .with_thread_count(ThreadCount::Specific(1))
        .with_ignore_crit(true);
    let planner = TeamPlanner::new(&config);
    let evaluator = planner.evaluator(&member("a", SetRequirement::unrestricted()));
    assert!(evaluator.options().ignore_crit);

    let slot: &[Soul] = &[Soul::new("namazu")];
    let mut inventory = inventory_of([slot; 6]);
    let assignment = planner
        .plan_member(&mut inventory, &member("a", SetRequirement::unrestricted()))
        .unwrap();
    let loadout = assignment.loadout.unwrap();
    assert_eq!(loadout.damage, 3350);
    assert_eq!(loadout.crit, 11);
}

#[test]
fn test_hp_objective_prefers_hp() {
    let slot: &[Soul] = &[
        Soul::new("jizo statue").with_atk(200),
        Soul::new("jizo statue").with_hp(400),
    ];
    let mut inventory = inventory_of([slot; 6]);
    let kamikui = Shikigami::lookup("kamikui").unwrap();
    let tank = Member::new(kamikui.name, kamikui.stats, SetRequirement::unrestricted())
        .with_objective(Objective::Hp);

    let assignment = planner(2).plan_member(&mut inventory, &tank).unwrap();
    let loadout = assignment.loadout.as_ref().unwrap();
    assert!(loadout.souls.iter().all(|s| s.hp == 400));
    assert_eq!(assignment.value(), loadout.hp);
}

#[test]
fn test_missing_soul_is_an_error() {
    let mut inventory = uniform_inventory("shadow", 1);
    let mut planned = uniform_inventory("shadow", 1);
    let loadout = planner(1)
        .plan_member(&mut planned, &member("a", SetRequirement::primary("shadow")))
        .unwrap()
        .loadout
        .unwrap();

    inventory.remove(&loadout.souls).unwrap();
    assert!(matches!(
        inventory.remove(&loadout.souls),
        Err(PlanError::MissingSoul { slot: 1, .. })
    ));
}
