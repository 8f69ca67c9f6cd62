use ability_content::load_builtin;
use ability_core::{CancelError, EntityId, Living};
use ability_runtime::{AbilityService, EntityRecord, RuntimeError, ScalingSwitch};

const HERO: EntityId = EntityId(1);

fn service() -> AbilityService {
    let mut service = AbilityService::new(load_builtin().unwrap(), ScalingSwitch::default());
    service
        .spawn(EntityRecord::player(HERO, "Aelric", 100))
        .unwrap();
    service
}

#[test]
fn concentration_lasts_thirty_seconds() {
    let mut service = service();
    service.advance(5_000);
    let effect = service.start_effect(HERO, "Mastery of Concentration").unwrap();

    service.advance(12_400);
    let delve = service.delve_effect(HERO, effect).unwrap();
    assert_eq!(delve.len(), 3);
    assert_eq!(delve[2], "- 17 seconds remaining.");

    assert_eq!(service.advance(17_599), 0);
    assert_eq!(service.advance(1), 1);
    assert!(service.entity(HERO).unwrap().effects().is_empty());
    assert!(service.delve_effect(HERO, effect).is_none());
}

#[test]
fn concentration_cannot_be_clicked_off() {
    let mut service = service();
    let effect = service.start_effect(HERO, "Mastery of Concentration").unwrap();

    let err = service.cancel_effect(HERO, effect).unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Cancel {
            source: CancelError::Protected(_),
            ..
        }
    ));
    assert!(service.entity(HERO).unwrap().effects().contains(effect));
}

#[test]
fn unknown_effect_name_is_refused() {
    let mut service = service();
    assert!(matches!(
        service.start_effect(HERO, "Purge"),
        Err(RuntimeError::UnknownEffect { .. })
    ));
}
