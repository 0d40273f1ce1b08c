use aggregation_domain::{CreditCard, Customer};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCardDto {
    pub number: String,
    pub expiry: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDto {
    pub name: String,
    pub tax_id: String,
    pub credit_card: Option<CreditCardDto>,
}

impl From<&CreditCard> for CreditCardDto {
    fn from(card: &CreditCard) -> Self {
        Self {
            number: card.number().to_string(),
            expiry: card.expiry(),
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name().to_string(),
            tax_id: customer.tax_id().to_string(),
            credit_card: customer.credit_card().map(CreditCardDto::from),
        }
    }
}

impl Dto for CreditCardDto {}
impl Dto for CustomerDto {}
