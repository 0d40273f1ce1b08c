use aggregation_application::command::Command;
use aggregation_application::command_bus::CommandBus;
use aggregation_application::context::AppContext;
use aggregation_application::error::AppError;
use aggregation_application::{CustomerCommandHandler, InMemoryCommandBus};
use aggregation_domain::clock::FixedClock;
use aggregation_domain::{AddCreditCard, AddCustomer, DomainError};
use anyhow::Result as AnyResult;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tokio::task::JoinSet;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap()
}

fn ctx() -> AppContext {
    AppContext::builder()
        .correlation_id("cor-flow".to_string())
        .actor_id("u-1".to_string())
        .build()
}

type Handler = CustomerCommandHandler<FixedClock>;

fn customer_bus(clock: FixedClock) -> AnyResult<(InMemoryCommandBus, Handler)> {
    let handler = CustomerCommandHandler::open("Douglas Ramalho", "25766896314", clock)?;
    let bus = InMemoryCommandBus::new();
    bus.register::<AddCustomer, _>(Arc::new(handler.clone()))?;
    bus.register::<AddCreditCard, _>(Arc::new(handler.clone()))?;
    Ok((bus, handler))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatches_customer_commands() -> AnyResult<()> {
    let (bus, handler) = customer_bus(FixedClock::new(now()))?;

    let mut names = bus.registered_commands();
    names.sort_unstable();
    assert_eq!(names, vec!["add_credit_card", "add_customer"]);

    let expiry = now() + Duration::days(3650);
    let dto = bus
        .dispatch(&ctx(), AddCreditCard::new("1111111111111111", expiry))
        .await?;
    assert_eq!(dto.name, "Douglas Ramalho");
    assert_eq!(
        dto.credit_card.as_ref().map(|c| c.number.as_str()),
        Some("1111111111111111")
    );

    let json = serde_json::to_value(&dto)?;
    assert_eq!(json["tax_id"], "25766896314");
    assert_eq!(json["credit_card"]["number"], "1111111111111111");

    let dto = bus
        .dispatch(&ctx(), AddCustomer::new("Maria Silva", "98765432100"))
        .await?;
    assert_eq!(dto.name, "Maria Silva");
    assert!(dto.credit_card.is_none());

    assert_eq!(handler.version().await, 3);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rejected_commands_leave_state_untouched() -> AnyResult<()> {
    let (bus, handler) = customer_bus(FixedClock::new(now()))?;

    let err = bus
        .dispatch(&ctx(), AddCustomer::new("Maria", "98765432100"))
        .await
        .unwrap_err();
    match err {
        AppError::Rejected(failures) => assert_eq!(
            failures,
            vec![DomainError::IncompleteName {
                name: "Maria".into()
            }]
        ),
        other => panic!("unexpected error: {other:?}"),
    }

    let snapshot = handler.snapshot().await.expect("customer should exist");
    assert_eq!(snapshot.name, "Douglas Ramalho");
    assert_eq!(handler.version().await, 1);
    assert!(handler.errors().await.is_empty());
    Ok(())
}

struct RemoveCustomer;

impl Command for RemoveCustomer {
    const NAME: &'static str = "remove_customer";
    type Output = ();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unregistered_command_is_unsupported() -> AnyResult<()> {
    let (bus, _handler) = customer_bus(FixedClock::new(now()))?;

    let err = bus.dispatch(&ctx(), RemoveCustomer).await.unwrap_err();
    assert!(matches!(err, AppError::UnsupportedCommand("remove_customer")));

    // 未注册任何处理器的总线同样拒绝领域命令
    let empty = InMemoryCommandBus::new();
    let err = empty
        .dispatch(&ctx(), AddCustomer::new("Douglas Ramalho", "25766896314"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnsupportedCommand("add_customer")));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_commands_are_serialized_per_aggregate() -> AnyResult<()> {
    let clock = FixedClock::new(now());
    let (bus, handler) = customer_bus(clock)?;
    let bus = Arc::new(bus);

    let mut set = JoinSet::new();
    for i in 0..50 {
        let bus = bus.clone();
        set.spawn(async move {
            // 偶数为有效卡，奇数为过期卡
            let expiry = if i % 2 == 0 {
                now() + Duration::days(i)
            } else {
                now() - Duration::days(i)
            };
            let ctx = AppContext::builder()
                .correlation_id(format!("cor-{i}"))
                .build();
            bus.dispatch(&ctx, AddCreditCard::new(format!("card-{i}"), expiry))
                .await
                .is_ok()
        });
    }

    let mut accepted = 0;
    while let Some(res) = set.join_next().await {
        if res? {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 25);
    assert_eq!(handler.version().await, 1 + accepted);
    let card = handler
        .snapshot()
        .await
        .and_then(|c| c.credit_card)
        .expect("a card should be attached");
    let n: i64 = card.number.trim_start_matches("card-").parse()?;
    assert_eq!(n % 2, 0);
    Ok(())
}
