//! 通用类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重。存储中的边权重始终 > 0
pub type Weight = i64;

/// 无权边的默认权重
pub const DEFAULT_WEIGHT: Weight = 1;

/// 校验外部输入的顶点标签（空标签视为缺失）
pub fn parse_label(s: &str) -> Result<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidLabel(s.to_string()));
    }
    Ok(s.to_string())
}

/// 解析外部输入的权重，允许 0 和负数（作为删边请求）
pub fn parse_weight(s: &str) -> Result<Weight> {
    s.trim()
        .parse::<Weight>()
        .map_err(|e| Error::InvalidWeight(format!("{:?}: {}", s, e)))
}

/// 邻接查询方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 出边（targets）
    Outgoing,
    /// 入边（sources）
    Incoming,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Outgoing => "targets",
            Direction::Incoming => "sources",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
