use ability_content::load_builtin;
use ability_core::spell::{MSG_NOT_FOUND, MSG_RIPPED_AWAY, MSG_TARGET_RIPPED_AWAY, MSG_TOO_STRONG};
use ability_core::{
    AnimationResult, AttackKind, ChatType, EntityId, HandlerKind, Living, ShearOutcome,
    SpellEffect,
};
use ability_runtime::{
    AbilityService, EntityRecord, Feedback, InterruptTimer, RuntimeError, ScalingSwitch,
};

const CASTER: EntityId = EntityId(1);
const TARGET: EntityId = EntityId(2);
const BUFFER: EntityId = EntityId(3);
const WOLF: EntityId = EntityId(40);

fn service() -> AbilityService {
    let mut service = AbilityService::new(load_builtin().unwrap(), ScalingSwitch::new(false));
    service
        .spawn(EntityRecord::player(CASTER, "Aelric", 200))
        .unwrap();
    service
        .spawn(EntityRecord::player(TARGET, "Brynja", 200).with_interrupt_duration(3000))
        .unwrap();
    service
        .spawn(EntityRecord::npc(WOLF, "grey wolf", 0, true))
        .unwrap();
    service
}

fn buff(service: &mut AbilityService, on: EntityId, spell_type: &str, value: f64, caster: EntityId) {
    let handler = match spell_type {
        "StrengthBuff" => HandlerKind::StrengthBuff,
        "DamageShield" => HandlerKind::DamageShield,
        "Mesmerize" => HandlerKind::Mesmerize,
        other => other.parse().unwrap(),
    };
    service
        .entity_mut(on)
        .unwrap()
        .effects_mut()
        .add(SpellEffect::new(spell_type, handler, value, caster));
}

fn caster_mana(service: &AbilityService) -> i32 {
    service.entity(CASTER).unwrap().mana()
}

#[test]
fn buff_above_ceiling_is_too_strong() {
    let mut service = service();
    buff(&mut service, TARGET, "StrengthBuff", 100.0, BUFFER);

    let outcome = service
        .cast_shear(CASTER, Some(TARGET), "Strength Shear")
        .unwrap();

    assert!(matches!(outcome, ShearOutcome::TooStrong(_)));
    assert_eq!(service.entity(TARGET).unwrap().effects().len(), 1);
    assert_eq!(caster_mana(&service), 192);
    assert_eq!(
        service.feedback().messages_to(CASTER).collect::<Vec<_>>(),
        vec![(MSG_TOO_STRONG, ChatType::SpellResisted)]
    );
}

#[test]
fn buff_within_ceiling_is_removed_with_both_messages() {
    let mut service = service();
    buff(&mut service, TARGET, "StrengthBuff", 60.0, BUFFER);

    let outcome = service
        .cast_shear(CASTER, Some(TARGET), "Strength Shear")
        .unwrap();

    assert!(matches!(outcome, ShearOutcome::Removed(_)));
    assert!(service.entity(TARGET).unwrap().effects().is_empty());
    assert_eq!(
        service.feedback().events(),
        &[
            Feedback::Animation {
                source: CASTER,
                target: TARGET,
                client_effect: 5810,
                no_sound: false,
                result: AnimationResult::Success,
            },
            Feedback::Message {
                to: CASTER,
                text: MSG_RIPPED_AWAY.to_string(),
                chat: ChatType::Spell,
            },
            Feedback::Message {
                to: TARGET,
                text: MSG_TARGET_RIPPED_AWAY.to_string(),
                chat: ChatType::Spell,
            },
        ]
    );
    assert_eq!(
        service.entity(TARGET).unwrap().interrupts(),
        &[InterruptTimer {
            duration: 3000,
            kind: AttackKind::Spell,
            attacker: CASTER,
            remaining_ms: 3000,
        }]
    );
}

#[test]
fn self_cast_cannot_strip_own_protected_buff() {
    let mut service = service();
    buff(&mut service, CASTER, "StrengthBuff", 10.0, CASTER);

    let outcome = service
        .cast_shear(CASTER, Some(CASTER), "Strength Shear")
        .unwrap();

    assert!(matches!(outcome, ShearOutcome::TooStrong(_)));
    assert_eq!(caster_mana(&service), 192);
    assert_eq!(service.entity(CASTER).unwrap().effects().len(), 1);
}

#[test]
fn percent_cost_uses_max_power() {
    let mut service = service();

    let outcome = service
        .cast_shear(CASTER, Some(TARGET), "Strength/Constitution Shear")
        .unwrap();

    assert_eq!(outcome, ShearOutcome::NotFound);
    assert_eq!(caster_mana(&service), 180);
    assert_eq!(
        service.feedback().messages_to(CASTER).collect::<Vec<_>>(),
        vec![(MSG_NOT_FOUND, ChatType::SpellResisted)]
    );
}

#[test]
fn mesmerize_is_broken_instead() {
    let mut service = service();
    buff(&mut service, TARGET, "Mesmerize", 1.0, BUFFER);
    buff(&mut service, TARGET, "StrengthBuff", 10.0, BUFFER);

    let outcome = service
        .cast_shear(CASTER, Some(TARGET), "Strength Shear")
        .unwrap();

    assert!(matches!(outcome, ShearOutcome::MesmerizeBroken(_)));
    let target = service.entity(TARGET).unwrap();
    assert_eq!(target.effects().len(), 1);
    assert_eq!(target.effects().find_spell_type("Mesmerize"), None);
    assert_eq!(target.interrupts().len(), 1);
    assert!(service.feedback().is_empty());
}

#[test]
fn aggressive_npc_remembers_the_caster() {
    let mut service = service();

    let outcome = service
        .cast_shear(CASTER, Some(WOLF), "Unmake Enhancement")
        .unwrap();

    assert_eq!(outcome, ShearOutcome::NotFound);
    assert_eq!(service.entity(WOLF).unwrap().aggro().unwrap().amount(CASTER), 1);
}

#[test]
fn random_shear_strips_first_listed_buff_at_any_strength() {
    let mut service = service();
    buff(&mut service, TARGET, "DamageShield", 5000.0, TARGET);
    buff(&mut service, TARGET, "StrengthBuff", 10.0, BUFFER);

    let outcome = service
        .cast_shear(CASTER, Some(TARGET), "Unmake Enhancement")
        .unwrap();

    assert!(matches!(outcome, ShearOutcome::Removed(_)));
    let target = service.entity(TARGET).unwrap();
    assert_eq!(target.effects().find_spell_type("DamageShield"), None);
    assert!(target.effects().find_spell_type("StrengthBuff").is_some());
}

#[test]
fn missing_target_still_costs_power() {
    let mut service = service();

    let outcome = service
        .cast_shear(CASTER, Some(EntityId(999)), "Strength Shear")
        .unwrap();

    assert_eq!(outcome, ShearOutcome::Ignored);
    assert_eq!(caster_mana(&service), 192);
    assert!(service.feedback().is_empty());
}

#[test]
fn unknown_caster_or_shear_is_an_error() {
    let mut service = service();

    assert!(matches!(
        service.cast_shear(EntityId(77), Some(TARGET), "Strength Shear"),
        Err(RuntimeError::UnknownEntity(EntityId(77)))
    ));
    assert!(matches!(
        service.cast_shear(CASTER, Some(TARGET), "Purge"),
        Err(RuntimeError::UnknownShear { .. })
    ));
    assert!(service.world().contains(TARGET));
}

#[test]
fn only_instant_utility_shears_interrupt_on_resist() {
    let mut service = service();

    assert!(!service
        .resist_shear(CASTER, TARGET, "Strength Shear")
        .unwrap());
    assert!(service
        .resist_shear(CASTER, TARGET, "Unmake Enhancement")
        .unwrap());
    assert_eq!(service.entity(TARGET).unwrap().interrupts().len(), 1);
}

#[test]
fn interrupt_windows_are_released_by_the_clock() {
    let mut service = service();

    for _ in 0..1000 {
        service
            .cast_shear(CASTER, Some(TARGET), "Strength Shear")
            .unwrap();
        service.advance(60_000);
    }
    assert!(service.entity(TARGET).unwrap().interrupts().is_empty());

    service
        .cast_shear(CASTER, Some(TARGET), "Strength Shear")
        .unwrap();
    service.advance(2999);
    assert_eq!(service.entity(TARGET).unwrap().interrupts().len(), 1);
    service.advance(1);
    assert!(service.entity(TARGET).unwrap().interrupts().is_empty());
}

#[test]
fn shear_delve_text() {
    let service = service();

    assert_eq!(
        service.delve_shear("Strength/Constitution Shear").unwrap(),
        vec![
            "Function: StrengthConstitutionShear".to_string(),
            " ".to_string(),
            "Strips a strength and constitution enhancement from the target.".to_string(),
            " ".to_string(),
            "Type: Str/Con".to_string(),
            "Maximum strength of buffs removed: 110".to_string(),
            "Range: 1500".to_string(),
            "Power cost: 10%".to_string(),
            "Casting time: 2.5 sec".to_string(),
        ]
    );

    let random = service.delve_shear("Unmake Enhancement").unwrap();
    assert_eq!(random.last().unwrap(), "Casting time: instant");
}
