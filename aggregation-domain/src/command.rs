//! 客户聚合的命令
//!
//! 命令只是不可变的数据载体，不包含行为与校验；
//! 聚合通过对 `CustomerCommand` 的穷尽匹配决定走哪条校验/应用路径。
//!
use chrono::{DateTime, Utc};

/// 新增（或替换）客户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCustomer {
    pub name: String,
    pub tax_id: String,
}

impl AddCustomer {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
        }
    }
}

/// 为当前客户绑定信用卡
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCreditCard {
    pub number: String,
    pub expiry: DateTime<Utc>,
}

impl AddCreditCard {
    pub fn new(number: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        Self {
            number: number.into(),
            expiry,
        }
    }
}

/// 客户聚合支持的全部命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerCommand {
    AddCustomer(AddCustomer),
    AddCreditCard(AddCreditCard),
}

impl CustomerCommand {
    /// 命令的稳定名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            CustomerCommand::AddCustomer(_) => "add_customer",
            CustomerCommand::AddCreditCard(_) => "add_credit_card",
        }
    }
}

impl From<AddCustomer> for CustomerCommand {
    fn from(cmd: AddCustomer) -> Self {
        CustomerCommand::AddCustomer(cmd)
    }
}

impl From<AddCreditCard> for CustomerCommand {
    fn from(cmd: AddCreditCard) -> Self {
        CustomerCommand::AddCreditCard(cmd)
    }
}
