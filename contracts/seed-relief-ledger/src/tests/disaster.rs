use super::utils::*;
use crate::{ContractError, StorageKey};

#[test]
fn test_declare_disaster_event() {
    let ctx = setup();

    let event_id = ctx.declare_hurricane();
    assert_eq!(event_id, 1);

    let event = ctx.client.get_disaster_event(&event_id);
    assert_eq!(event.event_id, 1);
    assert_eq!(event.name, ctx.text("Hurricane Alpha"));
    assert_eq!(event.affected_region, ctx.text("Eastern Seaboard"));
    assert_eq!(event.severity, 4);
    assert_eq!(event.start_date, 12345);
    assert_eq!(event.end_date, None);
    assert_eq!(event.declared_by, ctx.deployer);
    assert!(event.active);
}

#[test]
fn test_event_ids_are_sequential() {
    let ctx = setup();

    assert_eq!(ctx.declare_hurricane(), 1);
    assert_eq!(ctx.declare_hurricane(), 2);
    assert_eq!(ctx.declare_hurricane(), 3);
    assert_eq!(ctx.client.get_event_count(), 3);
}

#[test]
fn test_declare_from_unauthorized_user() {
    let ctx = setup();
    let stranger = ctx.new_address();

    let result = ctx.client.try_declare_disaster_event(
        &stranger,
        &ctx.text("Hurricane Alpha"),
        &ctx.text("Category 4 hurricane affecting coastal regions"),
        &ctx.text("Eastern Seaboard"),
        &4u32,
        &12345u64,
    );

    assert_eq!(result, Err(Ok(ContractError::NotAuthorized)));
    assert_eq!(ctx.client.get_event_count(), 0);
}

#[test]
fn test_severity_bounds() {
    let ctx = setup();

    for severity in [0u32, 6u32] {
        let result = ctx.client.try_declare_disaster_event(
            &ctx.deployer,
            &ctx.text("Flood"),
            &ctx.text("River flooding"),
            &ctx.text("Delta"),
            &severity,
            &100u64,
        );
        assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
    }

    for severity in [1u32, 5u32] {
        ctx.client.declare_disaster_event(
            &ctx.deployer,
            &ctx.text("Flood"),
            &ctx.text("River flooding"),
            &ctx.text("Delta"),
            &severity,
            &100u64,
        );
    }
    assert_eq!(ctx.client.get_event_count(), 2);
}

#[test]
fn test_declare_requires_name() {
    let ctx = setup();

    let result = ctx.client.try_declare_disaster_event(
        &ctx.deployer,
        &ctx.text(""),
        &ctx.text("River flooding"),
        &ctx.text("Delta"),
        &3u32,
        &100u64,
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
}

#[test]
fn test_end_disaster_event() {
    let ctx = setup();
    let event_id = ctx.declare_hurricane();

    assert!(ctx.client.end_disaster_event(&ctx.deployer, &event_id, &12400u64));

    let event = ctx.client.get_disaster_event(&event_id);
    assert!(!event.active);
    assert_eq!(event.end_date, Some(12400));
}

#[test]
fn test_end_on_start_date_is_allowed() {
    let ctx = setup();
    let event_id = ctx.declare_hurricane();

    ctx.client.end_disaster_event(&ctx.deployer, &event_id, &12345u64);
    assert_eq!(ctx.client.get_disaster_event(&event_id).end_date, Some(12345));
}

#[test]
fn test_end_already_ended_event() {
    let ctx = setup();
    let other = ctx.new_authorizer();
    let event_id = ctx.declare_hurricane();
    ctx.client.end_disaster_event(&ctx.deployer, &event_id, &12400u64);

    for caller in [ctx.deployer.clone(), other] {
        let result = ctx.client.try_end_disaster_event(&caller, &event_id, &12500u64);
        assert_eq!(result, Err(Ok(ContractError::InvalidState)));
    }

    assert_eq!(ctx.client.get_disaster_event(&event_id).end_date, Some(12400));
}

#[test]
fn test_end_unknown_event() {
    let ctx = setup();

    let result = ctx.client.try_end_disaster_event(&ctx.deployer, &99u64, &12400u64);
    assert_eq!(result, Err(Ok(ContractError::InvalidState)));
}

#[test]
fn test_end_before_start_fails() {
    let ctx = setup();
    let event_id = ctx.declare_hurricane();

    let result = ctx.client.try_end_disaster_event(&ctx.deployer, &event_id, &12000u64);
    assert_eq!(result, Err(Ok(ContractError::InvalidDate)));

    let event = ctx.client.get_disaster_event(&event_id);
    assert!(event.active);
    assert_eq!(event.end_date, None);
}

#[test]
fn test_end_from_unauthorized_user() {
    let ctx = setup();
    let stranger = ctx.new_address();
    let event_id = ctx.declare_hurricane();

    let result = ctx.client.try_end_disaster_event(&stranger, &event_id, &12400u64);
    assert_eq!(result, Err(Ok(ContractError::NotAuthorized)));
    assert!(ctx.client.get_disaster_event(&event_id).active);
}

#[test]
fn test_get_unknown_event() {
    let ctx = setup();

    let result = ctx.client.try_get_disaster_event(&1u64);
    assert_eq!(result, Err(Ok(ContractError::NotFound)));
}

#[test]
fn test_name_and_description_length_limits() {
    let ctx = setup();

    let event_id = ctx.client.declare_disaster_event(
        &ctx.deployer,
        &ctx.text_of_len(64),
        &ctx.text_of_len(256),
        &ctx.text("Delta"),
        &3u32,
        &100u64,
    );
    assert_eq!(ctx.client.get_disaster_event(&event_id).name.len(), 64);

    assert_eq!(
        ctx.client.try_declare_disaster_event(
            &ctx.deployer,
            &ctx.text_of_len(65),
            &ctx.text("River flooding"),
            &ctx.text("Delta"),
            &3u32,
            &100u64,
        ),
        Err(Ok(ContractError::InvalidInput))
    );
    assert_eq!(
        ctx.client.try_declare_disaster_event(
            &ctx.deployer,
            &ctx.text("Flood"),
            &ctx.text_of_len(257),
            &ctx.text("Delta"),
            &3u32,
            &100u64,
        ),
        Err(Ok(ContractError::InvalidInput))
    );
    assert_eq!(ctx.client.get_event_count(), 1);
}

#[test]
fn test_event_counter_overflow() {
    let ctx = setup();
    ctx.env.as_contract(&ctx.contract_id, || {
        ctx.env
            .storage()
            .instance()
            .set(&StorageKey::EventCounter, &u64::MAX);
    });

    let result = ctx.client.try_declare_disaster_event(
        &ctx.deployer,
        &ctx.text("Hurricane Alpha"),
        &ctx.text("Category 4 hurricane affecting coastal regions"),
        &ctx.text("Eastern Seaboard"),
        &4u32,
        &12345u64,
    );
    assert_eq!(result, Err(Ok(ContractError::CounterOverflow)));
    assert_eq!(ctx.client.get_event_count(), u64::MAX);
}
