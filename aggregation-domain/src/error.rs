//! 领域层统一错误定义
//!
//! 命令校验、实体构造与聚合创建失败都以值的形式返回，
//! 不会越过聚合边界以 panic 的方式传播。
//!
use chrono::{DateTime, Utc};
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // --- 命令校验 ---
    #[error("customer full name is required: name={name:?}")]
    IncompleteName { name: String },
    #[error("credit card expired: expiry={expiry}, now={now}")]
    ExpiredCard {
        expiry: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    // --- 实体构造 ---
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    // --- 聚合状态 ---
    /// 只保留一条通用信息，具体原因通过 `source()` 获取
    #[error("aggregation creation failed")]
    AggregationCreationFailed {
        #[source]
        cause: Box<DomainError>,
    },
    #[error("precondition failed: {reason}")]
    PreconditionFailed { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
