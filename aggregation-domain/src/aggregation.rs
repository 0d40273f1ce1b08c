//! 客户聚合（CustomerAggregation）
//!
//! 状态流转：`Uninitialized` → `Active` → `ActiveWithCard`。
//! 构造时聚合向自身发出一条 `AddCustomer` 命令；之后只能通过 `execute` 修改。
//!
use crate::aggregate::Aggregate;
use crate::clock::{Clock, SystemClock};
use crate::command::{AddCreditCard, AddCustomer, CustomerCommand};
use crate::command_result::CommandResult;
use crate::credit_card::CreditCard;
use crate::customer::Customer;
use crate::error::DomainError;
use crate::specification::{FullName, NotExpired, Specification};

/// 聚合所处的生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationState {
    /// 尚无客户（初始创建失败）
    Uninitialized,
    /// 已有客户，未绑定信用卡
    Active,
    /// 已有客户且已绑定信用卡
    ActiveWithCard,
}

#[derive(Debug)]
pub struct CustomerAggregation<C = SystemClock> {
    data: Option<Customer>,
    errors: Vec<DomainError>,
    version: usize,
    clock: C,
}

impl CustomerAggregation<SystemClock> {
    /// 以系统时钟创建聚合
    ///
    /// ```
    /// use aggregation_domain::CustomerAggregation;
    ///
    /// let agg = CustomerAggregation::from("Douglas Ramalho", "25766896314");
    /// assert_eq!(agg.data().map(|c| c.name()), Some("Douglas Ramalho"));
    /// assert!(agg.errors().is_empty());
    ///
    /// let agg = CustomerAggregation::from("Douglas", "25766896314");
    /// assert!(agg.data().is_none());
    /// assert_eq!(agg.errors().len(), 1);
    /// ```
    pub fn from(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self::from_with_clock(name, tax_id, SystemClock)
    }
}

impl<C: Clock> CustomerAggregation<C> {
    /// 以指定时钟创建聚合
    ///
    /// 初始 `AddCustomer` 失败时仍返回聚合，但在 `errors` 中记录一条
    /// `AggregationCreationFailed`，原始失败作为其 `source`。
    pub fn from_with_clock(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        clock: C,
    ) -> Self {
        let mut aggregation = Self {
            data: None,
            errors: Vec::new(),
            version: 0,
            clock,
        };

        let result = aggregation.execute(AddCustomer::new(name, tax_id));
        if let Err(failures) = result.into_result() {
            tracing::warn!(
                aggregate = <Self as Aggregate>::TYPE,
                failures = failures.len(),
                "aggregation creation failed"
            );
            if let Some(cause) = failures.into_iter().next() {
                aggregation.errors.push(DomainError::AggregationCreationFailed {
                    cause: Box::new(cause),
                });
            }
        }

        aggregation
    }

    /// 分发命令到对应的校验/应用路径
    pub fn execute(&mut self, command: impl Into<CustomerCommand>) -> CommandResult<Customer> {
        let command = command.into();
        let name = command.name();

        tracing::debug!(
            aggregate = <Self as Aggregate>::TYPE,
            command = name,
            version = self.version,
            "executing command"
        );

        let result = match command {
            CustomerCommand::AddCustomer(cmd) => self.apply_add_customer(cmd),
            CustomerCommand::AddCreditCard(cmd) => self.apply_add_credit_card(cmd),
        };

        if result.has_failures() {
            for failure in result.failures() {
                tracing::warn!(
                    aggregate = <Self as Aggregate>::TYPE,
                    command = name,
                    error = %failure,
                    "command rejected"
                );
            }
        } else {
            self.version += 1;
        }

        result
    }

    fn apply_add_customer(&mut self, cmd: AddCustomer) -> CommandResult<Customer> {
        if !FullName.is_satisfied_by(cmd.name.as_str()) {
            return CommandResult::failure(DomainError::IncompleteName { name: cmd.name });
        }

        match Customer::create(cmd.name, cmd.tax_id) {
            Ok(customer) => {
                self.data = Some(customer.clone());
                CommandResult::success(customer)
            }
            Err(err) => CommandResult::failure(err),
        }
    }

    fn apply_add_credit_card(&mut self, cmd: AddCreditCard) -> CommandResult<Customer> {
        let now = self.clock.now();
        if !NotExpired::at(now).is_satisfied_by(&cmd.expiry) {
            return CommandResult::failure(DomainError::ExpiredCard {
                expiry: cmd.expiry,
                now,
            });
        }

        let Some(customer) = self.data.as_mut() else {
            return CommandResult::failure(DomainError::PreconditionFailed {
                reason: "cannot attach a credit card before the customer exists".into(),
            });
        };

        customer.attach_credit_card(CreditCard::new(cmd.number, cmd.expiry));
        CommandResult::success(customer.clone())
    }

    /// 当前持有的客户，尚未成功创建时为 `None`
    pub fn data(&self) -> Option<&Customer> {
        self.data.as_ref()
    }

    /// 构造阶段累积的错误；后续命令的失败只通过返回值体现
    pub fn errors(&self) -> &[DomainError] {
        &self.errors
    }

    pub fn version(&self) -> usize {
        self.version
    }

    pub fn is_created(&self) -> bool {
        self.data.is_some()
    }

    pub fn state(&self) -> AggregationState {
        match &self.data {
            None => AggregationState::Uninitialized,
            Some(customer) if customer.credit_card().is_some() => AggregationState::ActiveWithCard,
            Some(_) => AggregationState::Active,
        }
    }
}

impl<C: Clock> Aggregate for CustomerAggregation<C> {
    const TYPE: &'static str = "customer";

    type Command = CustomerCommand;
    type Data = Customer;

    fn execute(&mut self, command: Self::Command) -> CommandResult<Self::Data> {
        CustomerAggregation::execute(self, command)
    }

    fn data(&self) -> Option<&Self::Data> {
        CustomerAggregation::data(self)
    }

    fn version(&self) -> usize {
        self.version
    }
}
