//! 命令执行结果（CommandResult）
//!
//! 将成功值与零个或多个失败记录放在一起返回，替代异常：
//! - 失败列表非空即表示命令未成功，此时没有值；
//! - 只能通过 `success` / `failure` / `From<DomainResult<T>>` 构造，上述约束始终成立。
//!
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult<T> {
    value: Option<T>,
    failures: Vec<DomainError>,
}

impl<T> CommandResult<T> {
    pub fn success(value: T) -> Self {
        Self {
            value: Some(value),
            failures: Vec::new(),
        }
    }

    pub fn failure(error: DomainError) -> Self {
        Self {
            value: None,
            failures: vec![error],
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn failures(&self) -> &[DomainError] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn is_success(&self) -> bool {
        !self.has_failures()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// 转换为标准 `Result`，失败时返回全部失败记录
    pub fn into_result(self) -> Result<T, Vec<DomainError>> {
        match self.value {
            Some(value) if self.failures.is_empty() => Ok(value),
            _ => Err(self.failures),
        }
    }

    pub fn map<U, F>(self, f: F) -> CommandResult<U>
    where
        F: FnOnce(T) -> U,
    {
        CommandResult {
            value: self.value.map(f),
            failures: self.failures,
        }
    }
}

impl<T> From<DomainResult<T>> for CommandResult<T> {
    fn from(result: DomainResult<T>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_value_and_no_failures() {
        let r = CommandResult::success(7);
        assert!(r.is_success());
        assert!(!r.has_failures());
        assert_eq!(r.value(), Some(&7));
        assert!(r.failures().is_empty());
        assert_eq!(r.into_result(), Ok(7));
    }

    #[test]
    fn failure_has_no_value() {
        let err = DomainError::PreconditionFailed {
            reason: "nope".into(),
        };
        let r: CommandResult<i32> = CommandResult::failure(err.clone());
        assert!(r.has_failures());
        assert_eq!(r.value(), None);
        assert_eq!(r.failures(), std::slice::from_ref(&err));
        assert_eq!(r.into_result(), Err(vec![err]));
    }

    #[test]
    fn map_keeps_failures() {
        let ok = CommandResult::success(2).map(|v| v * 10);
        assert_eq!(ok.into_value(), Some(20));

        let failed: CommandResult<i32> =
            CommandResult::failure(DomainError::MissingRequiredField { field: "name" });
        let mapped = failed.map(|v| v.to_string());
        assert!(mapped.has_failures());
        assert_eq!(mapped.value(), None);
    }

    #[test]
    fn from_domain_result() {
        let r: CommandResult<&str> = Ok("ok").into();
        assert!(r.is_success());

        let err = DomainError::MissingRequiredField { field: "tax_id" };
        let r: CommandResult<&str> = Err(err).into();
        assert_eq!(
            r.failures(),
            &[DomainError::MissingRequiredField { field: "tax_id" }]
        );
    }
}
