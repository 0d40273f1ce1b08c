use aggregation_application::command_bus::CommandBus;
use aggregation_application::context::AppContext;
use aggregation_application::error::AppError;
use aggregation_application::{CustomerCommandHandler, InMemoryCommandBus};
use aggregation_domain::clock::SystemClock;
use aggregation_domain::{AddCreditCard, AddCustomer};
use chrono::{Duration, Utc};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let handler = CustomerCommandHandler::open("Douglas Ramalho", "25766896314", SystemClock)?;

    let bus = InMemoryCommandBus::new();
    bus.register::<AddCustomer, _>(Arc::new(handler.clone()))?;
    bus.register::<AddCreditCard, _>(Arc::new(handler.clone()))?;

    let ctx = AppContext::builder()
        .correlation_id("cor-1".to_string())
        .actor_id("u-1".to_string())
        .idempotency_key("idem-1".to_string())
        .build();

    let expiry = Utc::now() + Duration::days(365);
    let customer = bus
        .dispatch(&ctx, AddCreditCard::new("1111111111111111", expiry))
        .await?;
    println!(
        "AddCreditCard: name={} card={:?}",
        customer.name,
        customer.credit_card.map(|c| c.number)
    );

    // 过期卡 -> 返回 Rejected，聚合保持不变
    let expired = AddCreditCard::new("2222222222222222", Utc::now() - Duration::days(1));
    if let Err(AppError::Rejected(failures)) = bus.dispatch(&ctx, expired).await {
        eprintln!("Rejected as expected: {failures:?}");
    }

    let customer = bus
        .dispatch(&ctx, AddCustomer::new("Maria Silva", "98765432100"))
        .await?;
    println!("AddCustomer: name={} tax_id={}", customer.name, customer.tax_id);
    println!("version={}", handler.version().await);

    Ok(())
}
