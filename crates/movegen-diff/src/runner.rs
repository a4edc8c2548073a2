use std::io::Write;

use indicatif::ProgressBar;

use crate::database::{Database, PositionRecord};
use crate::dedup::FenDedup;
use crate::diff::compare;
use crate::error::{CheckError, CheckResult};
use crate::oracle::MoveOracle;

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// 不正な FEN で即座に中断する（既定は報告して続行）
    pub fail_fast: bool,
    /// 先頭 4 フィールドと指し手リストがともに同じレコードを 2 回目以降スキップする
    pub dedup: bool,
}

/// 1 パス分の集計。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub checked: usize,
    pub divergent: usize,
    pub invalid: usize,
    pub duplicates: usize,
}

enum Outcome {
    Match,
    Diverged(Vec<String>),
}

fn check_position<O: MoveOracle>(oracle: &O, record: &PositionRecord) -> CheckResult<Outcome> {
    let actual = oracle.legal_moves(&record.fen)?;
    log::debug!(
        "fen {}: expected {} moves, oracle {} moves",
        record.fen,
        record.moves.len(),
        actual.len()
    );
    let lines = compare(&record.moves, &actual);
    if lines.is_empty() { Ok(Outcome::Match) } else { Ok(Outcome::Diverged(lines)) }
}

fn write_divergence<W: Write>(out: &mut W, fen: &str, lines: &[String]) -> std::io::Result<()> {
    writeln!(out, "Move generation divergence (fen {fen}):")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// データベース全局面をファイル順に検査し、食い違いを `out` へ書き出す。
///
/// `progress` は 1 レコードごとに進め、書き出しは `suspend` 中に行って
/// バーの描画と混ざらないようにする。テストでは `ProgressBar::hidden()` を渡す。
pub fn run_all<O, W>(
    db: &Database,
    oracle: &O,
    out: &mut W,
    progress: &ProgressBar,
    options: RunOptions,
) -> CheckResult<RunSummary>
where
    O: MoveOracle,
    W: Write,
{
    let mut summary = RunSummary {
        total: db.len(),
        ..RunSummary::default()
    };
    let mut seen = FenDedup::new();
    progress.set_length(db.len() as u64);

    for (idx, record) in db.iter().enumerate() {
        progress.inc(1);
        if options.dedup && !seen.insert(&record.fen, &record.moves) {
            summary.duplicates += 1;
            continue;
        }
        summary.checked += 1;

        match check_position(oracle, record) {
            Ok(Outcome::Match) => {}
            Ok(Outcome::Diverged(lines)) => {
                summary.divergent += 1;
                progress.suspend(|| write_divergence(out, &record.fen, &lines))?;
            }
            Err(CheckError::Position { fen, reason }) => {
                summary.invalid += 1;
                if options.fail_fast {
                    progress.abandon();
                    return Err(CheckError::Position { fen, reason });
                }
                log::warn!("record {}: invalid position (fen {fen}): {reason}", idx + 1);
                progress.suspend(|| writeln!(out, "Invalid position (fen {fen}): {reason}"))?;
            }
            Err(err) => {
                progress.abandon();
                return Err(err);
            }
        }
    }

    out.flush()?;
    progress.finish();
    Ok(summary)
}
