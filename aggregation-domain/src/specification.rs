//! 规约（Specification）
//!
//! 将命令校验所依赖的业务规则封装成可复用、可组合、可单独测试的谓词。
//!
use chrono::{DateTime, Utc};

/// 规约模式的核心 trait
pub trait Specification<T: ?Sized> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// 对规约取反
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification {
            inner: Box::new(self),
        }
    }
}

/// AND 组合规约
pub struct AndSpecification<T: ?Sized> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约
pub struct NotSpecification<T: ?Sized> {
    inner: Box<dyn Specification<T>>,
}

impl<T: ?Sized> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// 全名规约：按单个空格切分后多于一段
///
/// 只看是否包含空格，`"Douglas "` 也视为满足。
#[derive(Debug, Clone, Copy, Default)]
pub struct FullName;

impl Specification<str> for FullName {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        candidate.split(' ').nth(1).is_some()
    }
}

/// 未过期规约：有效期不早于给定时刻（含边界）
#[derive(Debug, Clone, Copy)]
pub struct NotExpired {
    now: DateTime<Utc>,
}

impl NotExpired {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Specification<DateTime<Utc>> for NotExpired {
    fn is_satisfied_by(&self, expiry: &DateTime<Utc>) -> bool {
        *expiry >= self.now
    }
}
