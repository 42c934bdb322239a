//! 集成测试共用工具

#![allow(dead_code)]

pub mod edge_list;

use std::collections::HashMap;
use wdgraph::Weight;

pub fn weights(entries: &[(&str, Weight)]) -> HashMap<String, Weight> {
    entries.iter().map(|&(k, w)| (k.to_string(), w)).collect()
}
