//! wdgraph CLI 工具
//!
//! 交互式命令行界面，用于手动操作一张内存中的带权有向图

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wdgraph::cli::{CommandCompleter, CommandResult, ConsoleState};
use wdgraph::graph::Graph;

#[derive(Parser, Debug)]
#[command(name = "wdgraph-cli")]
#[command(about = "wdgraph 带权有向图命令行工具")]
struct Args {
    /// 执行单条命令后退出（可重复）
    #[arg(short = 'e', long)]
    execute: Vec<String>,

    /// 逐行执行脚本文件中的命令后退出
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// 历史记录文件
    #[arg(long)]
    history: Option<PathBuf>,

    /// 禁用彩色输出
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut graph = Graph::new();
    let mut state = ConsoleState::new();

    // 非交互模式
    if args.script.is_some() || !args.execute.is_empty() {
        let mut lines = args.execute.clone();
        if let Some(path) = &args.script {
            let content = fs::read_to_string(path)
                .with_context(|| format!("无法读取脚本 {}", path.display()))?;
            lines.extend(content.lines().map(str::to_string));
        }
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let result = state.handle_line(&mut graph, line);
            if !report(&mut state, result) {
                break;
            }
        }
        return Ok(());
    }

    println!("wdgraph CLI - 带权有向图");
    println!("========================");
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let history = args
        .history
        .or_else(|| dirs::home_dir().map(|home| home.join(".wdgraph_history")));

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));
    if let Some(path) = &history {
        // 首次运行时没有历史文件
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("wdgraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                let result = state.handle_line(&mut graph, line);
                if !report(&mut state, result) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(error = %e, path = %path.display(), "无法保存历史记录");
        }
    }

    println!("再见！");
    Ok(())
}

/// 输出命令结果，返回是否继续
fn report(state: &mut ConsoleState, result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(msg) => {
            let msg = if msg.ends_with('\n') { msg } else { msg + "\n" };
            state.write_output(&msg);
            true
        }
        CommandResult::Error(msg) => {
            eprintln!("{} {}", "错误:".red().bold(), msg);
            true
        }
    }
}
