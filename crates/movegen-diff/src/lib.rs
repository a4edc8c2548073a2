//! perft 指し手データベースと参照ライブラリ（shakmaty）の合法手を突き合わせる診断ツール群。
//!
//! データベースは `[{"fen": ..., "moves": [...]}, ...]` 形式の JSON 配列。
//! 各局面についてオラクルの合法手を求め、ソート済みリストが食い違えば
//! unified diff を出力する。

pub mod database;
pub mod dedup;
pub mod diff;
pub mod error;
pub mod io;
pub mod oracle;
pub mod runner;

pub use database::{Database, PositionRecord, load};
pub use diff::compare;
pub use error::{CheckError, CheckResult};
pub use oracle::{MoveOracle, ShakmatyOracle, compute_oracle_moves};
pub use runner::{RunOptions, RunSummary, run_all};
