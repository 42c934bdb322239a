//! 错误类型定义
//!
//! 图操作本身不会失败；这里的错误只来自控制台输入解析和 IO

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的顶点标签: {0:?}")]
    InvalidLabel(String),

    #[error("无效的权重: {0}")]
    InvalidWeight(String),

    #[error("未知命令: {0}")]
    UnknownCommand(String),

    #[error("用法: {0}")]
    Usage(&'static str),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}
