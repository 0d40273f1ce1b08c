//! 客户（Customer）实体
//!
//! 只能通过 `Customer::create` 构造，构造后除信用卡槽位外不可变。
//!
use crate::credit_card::CreditCard;
use crate::error::{DomainError, DomainResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    name: String,
    tax_id: String,
    credit_card: Option<CreditCard>,
}

impl Customer {
    /// 创建客户，`name` 与 `tax_id` 均不能为空
    ///
    /// 这里不检查是否为全名，全名规则由聚合在处理命令时校验。
    pub fn create(name: impl Into<String>, tax_id: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }

        let tax_id = tax_id.into();
        if tax_id.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "tax_id" });
        }

        Ok(Self {
            name,
            tax_id,
            credit_card: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn credit_card(&self) -> Option<&CreditCard> {
        self.credit_card.as_ref()
    }

    /// 绑定信用卡（无校验，调用方负责）
    pub(crate) fn attach_credit_card(&mut self, card: CreditCard) {
        self.credit_card = Some(card);
    }
}
