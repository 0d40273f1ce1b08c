//! 客户聚合应用层（aggregation-application）
//!
//! 在领域层之上提供命令总线：
//! - `InMemoryCommandBus` 按命令类型路由到已注册的处理器，未注册的类型显式报错；
//! - `CustomerCommandHandler` 以互斥锁保护单个聚合，使并发调用串行化；
//! - 返回值为 `CustomerDto`，不向接口层暴露领域对象。
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod customer_handler;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;

pub use customer_handler::CustomerCommandHandler;
pub use inmemory_command_bus::InMemoryCommandBus;
