//! 指し手生成ダイバージェンス検査ツール
//!
//! perft の中間局面ダンプ（`[{"fen", "moves"}]`）を読み、各局面の合法手を
//! shakmaty と突き合わせて、食い違った局面の FEN と unified diff を出力する。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use movegen_diff::{RunOptions, ShakmatyOracle, load, run_all};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare a perft move database against shakmaty legal moves")]
struct Cli {
    /// Move database (JSON array of {fen, moves}; `.gz` and `-` for stdin are accepted)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// 不正な FEN があれば即座に終了する
    #[arg(long, default_value_t = false)]
    fail_fast: bool,

    /// 手数カウンタ違いの重複局面をスキップする
    #[arg(long, default_value_t = false)]
    dedup: bool,

    /// castling を Chess960 表記（キング→ルーク）で出す
    #[arg(long, default_value_t = false)]
    chess960: bool,

    /// 進捗バーを表示しない
    #[arg(long, default_value_t = false)]
    no_progress: bool,
}

fn progress_bar(hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .context("invalid progress template")?,
    );
    Ok(progress)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let Some(path) = cli.file.as_deref() else {
        println!("error: move database file is required");
        std::process::exit(1);
    };

    let db = load(path)?;
    let oracle = if cli.chess960 { ShakmatyOracle::chess960() } else { ShakmatyOracle::default() };
    let options = RunOptions {
        fail_fast: cli.fail_fast,
        dedup: cli.dedup,
    };

    let progress = progress_bar(cli.no_progress)?;
    let summary = {
        let mut out = std::io::stdout().lock();
        run_all(&db, &oracle, &mut out, &progress, options)
            .with_context(|| format!("check aborted: {}", path.display()))?
    };

    log::info!(
        "checked {}/{} positions: {} divergent, {} invalid, {} duplicates skipped",
        summary.checked,
        summary.total,
        summary.divergent,
        summary.invalid,
        summary.duplicates
    );
    println!("done!");
    Ok(())
}
