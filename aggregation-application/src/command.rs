use crate::dto::CustomerDto;
use aggregation_domain::{AddCreditCard, AddCustomer};

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，经命令总线路由到对应处理器。
///
/// 关联项：
/// - `NAME`：命令的稳定名称，用于日志与路由错误信息。避免依赖 `type_name::<T>()`。
/// - `Output`：处理成功后返回给调用方的结果类型。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 处理结果
    type Output: Send + 'static;
}

impl Command for AddCustomer {
    const NAME: &'static str = "add_customer";
    type Output = CustomerDto;
}

impl Command for AddCreditCard {
    const NAME: &'static str = "add_credit_card";
    type Output = CustomerDto;
}
