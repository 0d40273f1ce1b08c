use chrono::{DateTime, Utc};
use serde::Serialize;

/// 信用卡
///
/// 构造时不做校验，有效期是否已过由聚合在绑定时判断。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    number: String,
    expiry: DateTime<Utc>,
}

impl CreditCard {
    pub fn new(number: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        Self {
            number: number.into(),
            expiry,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }
}
