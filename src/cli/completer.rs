//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 图命令列表
const GRAPH_COMMANDS: &[&str] = &[
    "add", "set", "edge", "remove", "rm", "vertices", "targets", "sources", "weight", "stats",
    "dump", "clear-edges", "clear-all", "help", "quit", "exit",
];

/// 控制台命令列表
const CONSOLE_COMMANDS: &[&str] = &[
    ":help", ":h",
    ":quit", ":q",
    ":exit", ":e",
    ":tee",
    ":notee",
    ":vertical",
    ":table",
    ":clear",
];

fn pairs(candidates: &[&str], prefix: &str) -> Vec<Pair> {
    candidates
        .iter()
        .filter(|cmd| cmd.starts_with(prefix))
        .map(|cmd| Pair {
            display: cmd.to_string(),
            replacement: cmd.to_string(),
        })
        .collect()
}

/// wdgraph CLI 补全器，只补全行首的命令词
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let trimmed = line_to_cursor.trim_start();

        // 已经在输入参数
        if trimmed.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let start = pos - trimmed.len();
        if trimmed.starts_with(':') {
            return Ok((start, pairs(CONSOLE_COMMANDS, trimmed)));
        }
        Ok((start, pairs(GRAPH_COMMANDS, &trimmed.to_lowercase())))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
