//! 聚合（Aggregate）抽象
//!
//! 聚合是一致性边界：持有一个根实体，所有修改都必须通过命令完成。
//! - `execute` 校验命令，校验通过则原地修改根实体；
//! - 校验失败以 `CommandResult` 的失败记录返回，不修改状态；
//! - `version` 记录已成功应用的命令数。
//!
use crate::command_result::CommandResult;

/// 聚合根接口
pub trait Aggregate {
    const TYPE: &'static str;

    /// 该聚合支持的命令类型
    type Command;
    /// 聚合持有的根实体
    type Data;

    /// 执行命令，返回修改后的根实体或失败记录
    fn execute(&mut self, command: Self::Command) -> CommandResult<Self::Data>;

    /// 当前根实体，尚未成功创建时为 `None`
    fn data(&self) -> Option<&Self::Data>;

    /// 已成功应用的命令数
    fn version(&self) -> usize;
}
