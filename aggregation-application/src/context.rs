use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次命令调用所需的横切信息：
/// - `correlation_id`：链路追踪关联 ID，写入分发日志的 span；
/// - `actor_id`：发起命令的主体；
/// - `idempotency_key`：幂等键，由上层或基础设施决定是否参与幂等。
///
/// ```rust
/// use aggregation_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("u-1".to_string())
///     .build();
///
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.idempotency_key(), None);
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<String>,
    idempotency_key: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}
