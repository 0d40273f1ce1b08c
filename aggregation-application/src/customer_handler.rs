use crate::{
    command_handler::CommandHandler, context::AppContext, dto::CustomerDto, error::AppError,
};
use aggregation_domain::clock::{Clock, SystemClock};
use aggregation_domain::{
    AddCreditCard, AddCustomer, CustomerAggregation, CustomerCommand, DomainError,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 客户命令处理器
///
/// 持有单个 `CustomerAggregation`。聚合的“校验 → 修改”不是原子的，
/// 因此整个 `execute` 在互斥锁内完成，每个聚合实例一把锁。
pub struct CustomerCommandHandler<C = SystemClock> {
    aggregation: Arc<Mutex<CustomerAggregation<C>>>,
}

impl<C> Clone for CustomerCommandHandler<C> {
    fn clone(&self) -> Self {
        Self {
            aggregation: self.aggregation.clone(),
        }
    }
}

impl<C: Clock> CustomerCommandHandler<C> {
    pub fn new(aggregation: CustomerAggregation<C>) -> Self {
        Self {
            aggregation: Arc::new(Mutex::new(aggregation)),
        }
    }

    /// 创建聚合，构造失败时返回第一条构造错误
    pub fn open(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        clock: C,
    ) -> Result<Self, AppError> {
        let aggregation = CustomerAggregation::from_with_clock(name, tax_id, clock);
        if let Some(err) = aggregation.errors().first() {
            return Err(AppError::Domain(err.clone()));
        }
        Ok(Self::new(aggregation))
    }

    /// 当前客户的只读视图
    pub async fn snapshot(&self) -> Option<CustomerDto> {
        self.aggregation.lock().await.data().map(CustomerDto::from)
    }

    /// 构造阶段记录的错误
    pub async fn errors(&self) -> Vec<DomainError> {
        self.aggregation.lock().await.errors().to_vec()
    }

    pub async fn version(&self) -> usize {
        self.aggregation.lock().await.version()
    }

    async fn run(
        &self,
        ctx: &AppContext,
        command: CustomerCommand,
    ) -> Result<CustomerDto, AppError> {
        tracing::debug!(
            command = command.name(),
            actor_id = ctx.actor_id().unwrap_or("-"),
            idempotency_key = ctx.idempotency_key().unwrap_or("-"),
            "handling customer command"
        );

        let mut aggregation = self.aggregation.lock().await;
        aggregation
            .execute(command)
            .into_result()
            .map(|customer| CustomerDto::from(&customer))
            .map_err(AppError::Rejected)
    }
}

#[async_trait]
impl<C: Clock + 'static> CommandHandler<AddCustomer> for CustomerCommandHandler<C> {
    async fn handle(&self, ctx: &AppContext, cmd: AddCustomer) -> Result<CustomerDto, AppError> {
        self.run(ctx, cmd.into()).await
    }
}

#[async_trait]
impl<C: Clock + 'static> CommandHandler<AddCreditCard> for CustomerCommandHandler<C> {
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: AddCreditCard,
    ) -> Result<CustomerDto, AppError> {
        self.run(ctx, cmd.into()).await
    }
}
