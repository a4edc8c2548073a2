//! 合法手オラクル
//!
//! 指し手生成そのものは参照ライブラリ（shakmaty）に任せ、
//! ここでは FEN → 局面 → UCI 文字列列の変換だけを行う。

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position, PositionError};

use crate::error::{CheckError, CheckResult};

/// FEN から合法手一覧（UCI 表記、辞書順ソート済み）を返す参照実装。
pub trait MoveOracle {
    fn legal_moves(&self, fen: &str) -> CheckResult<Vec<String>>;
}

/// shakmaty を使ったオラクル。
#[derive(Clone, Copy, Debug)]
pub struct ShakmatyOracle {
    castling_mode: CastlingMode,
}

impl ShakmatyOracle {
    pub fn new(castling_mode: CastlingMode) -> Self {
        Self { castling_mode }
    }

    /// Chess960 表記では castling がキング→ルーク（`e1h1`）になる。
    pub fn chess960() -> Self {
        Self::new(CastlingMode::Chess960)
    }

    /// 古いキャスリング権や、直前に 2 マス進んだポーンのない ep マスは取り除いて受け入れる。
    /// キング不在など、それでも成立しない局面だけをエラーにする。
    fn position(&self, fen: &str) -> CheckResult<Chess> {
        let setup: Fen = fen.trim().parse().map_err(|e| CheckError::position(fen, e))?;
        setup
            .into_position(self.castling_mode)
            .or_else(PositionError::ignore_invalid_castling_rights)
            .or_else(PositionError::ignore_invalid_ep_square)
            .map_err(|e| CheckError::position(fen, e))
    }
}

impl Default for ShakmatyOracle {
    fn default() -> Self {
        Self::new(CastlingMode::Standard)
    }
}

impl MoveOracle for ShakmatyOracle {
    fn legal_moves(&self, fen: &str) -> CheckResult<Vec<String>> {
        let pos = self.position(fen)?;
        let mut moves: Vec<String> = pos
            .legal_moves()
            .iter()
            .map(|m| m.to_uci(self.castling_mode).to_string())
            .collect();
        moves.sort();
        Ok(moves)
    }
}

/// 標準 castling 表記でオラクルの合法手を求める。
pub fn compute_oracle_moves(fen: &str) -> CheckResult<Vec<String>> {
    ShakmatyOracle::default().legal_moves(fen)
}
