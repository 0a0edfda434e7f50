use proptest::prelude::*;
use strum::IntoEnumIterator;
use turn_core::{
    Combatant, DIE_MAX, DIE_MIN, Distance, FixedDice, OutcomeCalculator, Pose, Scenario,
    SeededDice, Weapon, distance_modifier, firing_modifier, resolve, target_modifier,
};

fn arb_pose() -> impl Strategy<Value = Pose> {
    prop::sample::select(Pose::iter().collect::<Vec<_>>())
}

fn arb_weapon() -> impl Strategy<Value = Weapon> {
    prop::sample::select(Weapon::iter().collect::<Vec<_>>())
}

fn arb_combatant() -> impl Strategy<Value = Combatant> {
    (arb_pose(), arb_weapon()).prop_map(|(pose, weapon)| Combatant::new(pose, weapon))
}

fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (
        arb_combatant(),
        arb_combatant(),
        0u32..200,
        prop_oneof![Just("cm"), Just("m"), Just("in")],
        any::<bool>(),
    )
        .prop_map(|(firing, target, value, unit, estimated)| {
            let distance = Distance {
                value,
                unit: unit.to_string(),
                estimated,
            };
            Scenario::new(firing, target, distance)
        })
}

// ── Each modifier depends on one attribute only ──────────────────────────

proptest! {
    #[test]
    fn modifiers_come_from_their_own_attribute(scenario in arb_scenario(), roll in DIE_MIN..=DIE_MAX) {
        let outcome = resolve(&scenario, roll);

        prop_assert_eq!(outcome.firing_modifier, firing_modifier(scenario.firing.weapon));
        prop_assert_eq!(outcome.target_modifier, target_modifier(scenario.target.pose));
        prop_assert_eq!(outcome.distance_modifier, distance_modifier(scenario.distance.value));
    }

    #[test]
    fn distance_modifier_is_a_step_at_seventy(value in 0u32..10_000) {
        let expected = if value >= 70 { 3 } else { 0 };
        prop_assert_eq!(distance_modifier(value), expected);
    }
}

// ── Hit rule ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hit_iff_roll_beats_total(scenario in arb_scenario(), roll in DIE_MIN..=DIE_MAX) {
        let outcome = resolve(&scenario, roll);
        let total = outcome.firing_modifier + outcome.target_modifier + outcome.distance_modifier;

        prop_assert_eq!(outcome.rolled_dice, roll);
        prop_assert_eq!(outcome.hit_or_miss, roll > total);
    }

    #[test]
    fn injected_roll_makes_calculation_repeatable(scenario in arb_scenario(), roll in DIE_MIN..=DIE_MAX) {
        let calculator = OutcomeCalculator::new(FixedDice::constant(roll).unwrap());
        prop_assert_eq!(calculator.calculate(&scenario), calculator.calculate(&scenario));
        prop_assert_eq!(calculator.calculate(&scenario), resolve(&scenario, roll));
    }
}

// ── Dice range ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn seeded_rolls_stay_on_the_die(seed in any::<u64>()) {
        let calculator = OutcomeCalculator::new(SeededDice::from_seed(seed));
        let scenario = Scenario::new(
            Combatant::new(Pose::Standing, Weapon::Pistol),
            Combatant::new(Pose::Crouched, Weapon::Rifle),
            Distance::new(50, "cm"),
        );

        for _ in 0..200 {
            let outcome = calculator.calculate(&scenario);
            prop_assert!((1..=19).contains(&outcome.rolled_dice), "rolled {}", outcome.rolled_dice);
        }
    }
}

#[test]
fn shared_calculator_serves_parallel_requests() {
    use std::sync::Arc;

    let calculator = Arc::new(OutcomeCalculator::new(SeededDice::from_seed(99)));
    let scenario = Scenario::new(
        Combatant::new(Pose::Prone, Weapon::Smg),
        Combatant::new(Pose::Standing, Weapon::MachineGun),
        Distance::estimated(75, "cm"),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let calculator = Arc::clone(&calculator);
            let scenario = scenario.clone();
            std::thread::spawn(move || {
                (0..500)
                    .map(|_| calculator.calculate(&scenario))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for outcome in handle.join().unwrap() {
            // SMG fires (3) at a standing target (0) from long range (3).
            assert_eq!(outcome.total_modifier(), 6);
            assert!((1..=19).contains(&outcome.rolled_dice));
            assert_eq!(outcome.hit_or_miss, outcome.rolled_dice > 6);
        }
    }
}
