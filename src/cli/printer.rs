//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::graph::GraphStats;
use crate::types::{Direction, Weight};
use prettytable::{format, row, Cell, Row, Table};
use std::collections::{HashMap, HashSet};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
#[derive(Debug, Clone)]
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印顶点集合，按标签排序
    pub fn print_vertices(&self, vertices: &HashSet<String>) -> String {
        let mut labels: Vec<&String> = vertices.iter().collect();
        labels.sort();
        let rows: Vec<Vec<String>> = labels.into_iter().map(|l| vec![l.clone()]).collect();
        self.print_rows(&["vertex".to_string()], &rows)
    }

    /// 打印邻接映射，按标签排序
    pub fn print_adjacency(
        &self,
        vertex: &str,
        direction: Direction,
        adjacency: &HashMap<String, Weight>,
    ) -> String {
        let mut entries: Vec<(&String, &Weight)> = adjacency.iter().collect();
        entries.sort();
        let rows: Vec<Vec<String>> = entries
            .into_iter()
            .map(|(label, weight)| vec![label.clone(), weight.to_string()])
            .collect();
        let first = match direction {
            Direction::Outgoing => format!("{} ->", vertex),
            Direction::Incoming => format!("-> {}", vertex),
        };
        self.print_rows(&[first, "weight".to_string()], &rows)
    }

    /// 打印多行结果
    pub fn print_rows(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, stats: &GraphStats) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", stats.vertex_count.to_string()]);
        table.add_row(row!["Edge Count", stats.edge_count.to_string()]);
        table.add_row(row!["Max Out Degree", stats.max_out_degree.to_string()]);
        table.add_row(row!["Max In Degree", stats.max_in_degree.to_string()]);
        table.add_row(row!["Isolated Vertices", stats.isolated_vertices.to_string()]);
        table.add_row(row!["Self Loops", stats.self_loops.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   wdgraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

图命令:
  add <顶点>                 添加顶点
  set <源> <目标> <权重>     设置边权重，返回旧权重
                             权重 <= 0 表示删除该边
                             示例: set A B 5
  edge <源> <目标>           添加权重为 1 的边
  remove, rm <顶点>          删除顶点及其所有关联边
  vertices, v                列出所有顶点
  targets <顶点>             列出出边
  sources <顶点>             列出入边
  weight <源> <目标>         查看边权重
  stats [json]               显示图统计信息
  dump                       打印整张图
  clear-edges                删除所有边
  clear-all                  删除所有顶点和边
  help, h, ?                 显示帮助
  quit, exit, q              退出程序

═══════════════════════════════════════════════════════════════
控制台命令 (以 : 开头)
═══════════════════════════════════════════════════════════════

  :help, :h              显示控制台命令帮助
  :quit, :q              退出程序
  :tee [-o] <file>       输出到文件 (-o 覆盖)
  :notee                 停止输出到文件
  :vertical              垂直显示结果
  :table                 表格显示结果
  :clear                 清屏（不影响图）

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let printer = Printer::default();
        assert_eq!(printer.print_vertices(&HashSet::new()), "Empty set\n");
    }

    #[test]
    fn test_vertical_adjacency() {
        let printer = Printer::new(PrintMode::Vertical);
        let adjacency = HashMap::from([("C".to_string(), 2), ("B".to_string(), 7)]);

        let out = printer.print_adjacency("A", Direction::Outgoing, &adjacency);

        let b = out.find("B").unwrap();
        let c = out.find("C").unwrap();
        assert!(b < c);
        assert!(out.contains("weight: 7"));
        assert!(out.ends_with("2 row(s) in set\n"));
    }

    #[test]
    fn test_table_vertices() {
        let printer = Printer::default();
        let vertices = HashSet::from(["A".to_string(), "B".to_string()]);

        let out = printer.print_vertices(&vertices);

        assert!(out.contains("vertex"));
        assert!(out.contains('A'));
        assert!(out.ends_with("2 row(s) in set\n"));
    }
}
