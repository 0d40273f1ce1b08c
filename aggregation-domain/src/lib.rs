//! 客户聚合领域层（aggregation-domain）
//!
//! 以“聚合 + 命令”模式建模客户：
//! - 实体：`Customer`、`CreditCard`，只能通过工厂方法构造；
//! - 命令：`AddCustomer`、`AddCreditCard`，由 `CustomerCommand` 统一承载；
//! - 聚合：`CustomerAggregation` 校验并应用命令，失败以 `CommandResult` 返回；
//! - 规约：`FullName`、`NotExpired` 封装命令校验所用的业务规则；
//! - 时钟：`Clock` 注入当前时间，保证校验结果可复现。
//!
//! 典型用法：
//! 1. `CustomerAggregation::from(name, tax_id)` 创建聚合并检查 `errors()`；
//! 2. 通过 `execute` 提交后续命令并检查返回的 `CommandResult`；
//! 3. 通过 `data()` 读取当前客户。
//!
pub mod aggregate;
pub mod aggregation;
pub mod clock;
pub mod command;
pub mod command_result;
pub mod credit_card;
pub mod customer;
pub mod error;
pub mod specification;

pub use aggregate::Aggregate;
pub use aggregation::{AggregationState, CustomerAggregation};
pub use command::{AddCreditCard, AddCustomer, CustomerCommand};
pub use command_result::CommandResult;
pub use credit_card::CreditCard;
pub use customer::Customer;
pub use error::{DomainError, DomainResult};
