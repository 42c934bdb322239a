//! 命令解析与执行
//!
//! 图命令直接作用于 `Graph`；以 : 开头的控制台命令只改变会话状态

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::printer::{PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{parse_label, parse_weight, Direction, Weight};

/// 图命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddVertex(String),
    Set {
        source: String,
        target: String,
        weight: Weight,
    },
    AddEdge {
        source: String,
        target: String,
    },
    Remove(String),
    Vertices,
    Adjacency {
        vertex: String,
        direction: Direction,
    },
    Weight {
        source: String,
        target: String,
    },
    Stats {
        json: bool,
    },
    Dump,
    ClearEdges,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = words.split_first() else {
            return Err(Error::Usage("help 查看命令列表"));
        };

        let command = match (cmd.to_lowercase().as_str(), args) {
            ("add", [vertex]) => Command::AddVertex(parse_label(vertex)?),
            ("add", _) => return Err(Error::Usage("add <顶点>")),

            ("set", [source, target, weight]) => Command::Set {
                source: parse_label(source)?,
                target: parse_label(target)?,
                weight: parse_weight(weight)?,
            },
            ("set", _) => return Err(Error::Usage("set <源> <目标> <权重>")),

            ("edge", [source, target]) => Command::AddEdge {
                source: parse_label(source)?,
                target: parse_label(target)?,
            },
            ("edge", _) => return Err(Error::Usage("edge <源> <目标>")),

            ("remove" | "rm", [vertex]) => Command::Remove(parse_label(vertex)?),
            ("remove" | "rm", _) => return Err(Error::Usage("remove <顶点>")),

            ("vertices" | "v", []) => Command::Vertices,

            ("targets", [vertex]) => Command::Adjacency {
                vertex: parse_label(vertex)?,
                direction: Direction::Outgoing,
            },
            ("targets", _) => return Err(Error::Usage("targets <顶点>")),

            ("sources", [vertex]) => Command::Adjacency {
                vertex: parse_label(vertex)?,
                direction: Direction::Incoming,
            },
            ("sources", _) => return Err(Error::Usage("sources <顶点>")),

            ("weight", [source, target]) => Command::Weight {
                source: parse_label(source)?,
                target: parse_label(target)?,
            },
            ("weight", _) => return Err(Error::Usage("weight <源> <目标>")),

            ("stats" | "info", []) => Command::Stats { json: false },
            ("stats" | "info", ["json"]) => Command::Stats { json: true },
            ("stats" | "info", _) => return Err(Error::Usage("stats [json]")),

            ("dump", []) => Command::Dump,
            ("clear-edges", []) => Command::ClearEdges,
            ("clear-all", []) => Command::Clear,
            ("help" | "h" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,

            (other, _) => return Err(Error::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 执行图命令
pub fn execute(graph: &mut Graph, command: Command, printer: &Printer) -> Result<CommandResult> {
    let result = match command {
        Command::AddVertex(vertex) => {
            if graph.add_vertex(&vertex) {
                CommandResult::Message(format!("已添加顶点 {}", vertex))
            } else {
                CommandResult::Message(format!("顶点 {} 已存在", vertex))
            }
        }
        Command::Set {
            source,
            target,
            weight,
        } => {
            let previous = graph.set(&source, &target, weight);
            CommandResult::Message(format!("{} -> {}: 旧权重 {}", source, target, previous))
        }
        Command::AddEdge { source, target } => {
            let previous = graph.add_edge(&source, &target);
            CommandResult::Message(format!("{} -> {}: 旧权重 {}", source, target, previous))
        }
        Command::Remove(vertex) => {
            if graph.remove(&vertex) {
                CommandResult::Message(format!("已删除顶点 {}", vertex))
            } else {
                CommandResult::Message(format!("顶点 {} 不存在", vertex))
            }
        }
        Command::Vertices => CommandResult::Message(printer.print_vertices(&graph.vertices())),
        Command::Adjacency { vertex, direction } => {
            let adjacency = match direction {
                Direction::Outgoing => graph.targets(&vertex),
                Direction::Incoming => graph.sources(&vertex),
            };
            CommandResult::Message(printer.print_adjacency(&vertex, direction, &adjacency))
        }
        Command::Weight { source, target } => match graph.weight(&source, &target) {
            Some(w) => CommandResult::Message(format!("{} -> {}: {}", source, target, w)),
            None => CommandResult::Message(format!("{} -> {}: 无边", source, target)),
        },
        Command::Stats { json: true } => {
            CommandResult::Message(serde_json::to_string_pretty(&graph.stats())?)
        }
        Command::Stats { json: false } => {
            CommandResult::Message(printer.print_stats(&graph.stats()))
        }
        Command::Dump => CommandResult::Message(graph.to_string()),
        Command::ClearEdges => {
            graph.clear_edges();
            CommandResult::Message("已删除所有边".to_string())
        }
        Command::Clear => {
            graph.clear();
            CommandResult::Message("已清空图".to_string())
        }
        Command::Help => CommandResult::Message(Printer::print_help()),
        Command::Quit => CommandResult::Exit,
    };
    Ok(result)
}

/// 控制台状态
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// 输出到文件
    pub tee_file: Option<File>,
    /// 结果打印器
    pub printer: Printer,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入输出（同时写入 stdout 和 tee 文件）
    pub fn write_output(&mut self, content: &str) {
        print!("{}", content);
        if let Some(ref mut file) = self.tee_file {
            if let Err(e) = file.write_all(content.as_bytes()) {
                tracing::warn!(error = %e, "tee 文件写入失败");
            }
        }
    }

    /// 解析并执行一行输入
    pub fn handle_line(&mut self, graph: &mut Graph, line: &str) -> CommandResult {
        if is_console_command(line) {
            return execute_console_command(line, self);
        }
        match line.parse::<Command>() {
            Ok(command) => execute(graph, command, &self.printer)
                .unwrap_or_else(|e| CommandResult::Error(e.to_string())),
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let input = input.trim();
    let cmd_line = input.strip_prefix(':').unwrap_or(input);

    let parts: Vec<&str> = cmd_line.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("");

    match cmd.as_str() {
        "help" | "h" => CommandResult::Message(get_help_text()),

        "quit" | "q" | "exit" | "e" => CommandResult::Exit,

        "tee" => {
            let args_parts: Vec<&str> = args.split_whitespace().collect();
            let (overwrite, filename) = if args_parts.first() == Some(&"-o") {
                (true, args_parts.get(1).copied())
            } else {
                (false, args_parts.first().copied())
            };

            if let Some(filename) = filename {
                let path = PathBuf::from(filename);
                let file = if overwrite {
                    File::create(&path)
                } else {
                    File::options().create(true).append(true).open(&path)
                };

                match file {
                    Ok(f) => {
                        state.tee_file = Some(f);
                        CommandResult::Message(format!("Logging to {}", filename))
                    }
                    Err(e) => CommandResult::Error(format!("Cannot open file: {}", e)),
                }
            } else {
                CommandResult::Error("Usage: :tee [-o] <filename>".to_string())
            }
        }

        "notee" => {
            if state.tee_file.take().is_some() {
                CommandResult::Message("Stopped logging".to_string())
            } else {
                CommandResult::Message("No active logging".to_string())
            }
        }

        "vertical" => {
            state.printer.set_mode(PrintMode::Vertical);
            CommandResult::Message("Vertical output enabled".to_string())
        }

        "table" => {
            state.printer.set_mode(PrintMode::Table);
            CommandResult::Message("Table output enabled".to_string())
        }

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("Unknown command: {}. Type :help for help.", cmd)),
    }
}

/// 检查输入是否是控制台命令
pub fn is_console_command(input: &str) -> bool {
    input.trim().starts_with(':')
}

fn get_help_text() -> String {
    r#"
╔═══════════════════════════════════════════════════════════════╗
║                    Console Commands                           ║
╠═══════════════════════════════════════════════════════════════╣
║ :help, :h                  Show this help                     ║
║ :quit, :q, :exit, :e       Exit the program                   ║
║ :tee [-o] <filename>       Log output to file (-o: overwrite) ║
║ :notee                     Stop logging to file               ║
║ :vertical                  Vertical result display            ║
║ :table                     Table result display               ║
║ :clear                     Clear the screen (graph is kept)   ║
╚═══════════════════════════════════════════════════════════════╝
"#
    .to_string()
}
