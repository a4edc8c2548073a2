use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CheckError, CheckResult};
use crate::io;

/// perft が保存した 1 局面分のレコード。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PositionRecord {
    pub fen: String,
    /// 参照生成器が出した合法手（UCI 表記、順不同）
    pub moves: Vec<String>,
}

/// ファイル順に並んだ局面レコード群。実行中は読み取り専用。
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Database {
    records: Vec<PositionRecord>,
}

impl Database {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<PositionRecord>> for Database {
    fn from(records: Vec<PositionRecord>) -> Self {
        Self { records }
    }
}

/// データベースファイルを丸ごと読み込んでパースする。
///
/// 読み込み失敗は [`CheckError::File`]、JSON の構文・形状の不一致は
/// [`CheckError::Parse`] になる。
pub fn load<P: AsRef<Path>>(path: P) -> CheckResult<Database> {
    let path = path.as_ref();
    let text = io::read_to_string(path).map_err(|source| CheckError::File {
        path: PathBuf::from(path),
        source,
    })?;
    let db = Database::from_json_str(&text).map_err(|source| CheckError::Parse {
        path: PathBuf::from(path),
        source,
    })?;
    log::info!("loaded {} positions from {}", db.len(), path.display());
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn parses_records_in_file_order_and_ignores_extra_fields() {
        let text = format!(
            r#"[
                {{"fen": "{START_FEN}", "moves": ["e2e4", "a2a3"], "depth": 1}},
                {{"fen": "8/8/8/8/8/8/8/k6K w - - 0 1", "moves": []}}
            ]"#
        );
        let db = Database::from_json_str(&text).expect("parse failed");
        assert_eq!(db.len(), 2);
        assert_eq!(db.records()[0].fen, START_FEN);
        assert_eq!(db.records()[0].moves, vec!["e2e4", "a2a3"]);
        assert!(db.records()[1].moves.is_empty());
    }

    #[test]
    fn empty_array_is_empty_database() {
        let db = Database::from_json_str("[]").expect("parse failed");
        assert!(db.is_empty());
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(Database::from_json_str("{\"fen\": \"x\", \"moves\": []}").is_err());
        assert!(Database::from_json_str("[{\"fen\": \"x\"}]").is_err());
        assert!(Database::from_json_str("[{\"moves\": []}]").is_err());
        assert!(Database::from_json_str("[{\"fen\": 1, \"moves\": []}]").is_err());
        assert!(Database::from_json_str("[{\"fen\": \"x\", \"moves\": \"e2e4\"}]").is_err());
        assert!(Database::from_json_str("[{").is_err());
    }

    #[test]
    fn load_maps_errors_to_file_and_parse() {
        let err = load("/nonexistent/movegen-diff/db.json").expect_err("missing file");
        assert!(matches!(err, CheckError::File { .. }));

        let dir = tempfile::tempdir().expect("tempdir");
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").expect("write");
        let err = load(&bad).expect_err("bad json");
        assert!(matches!(err, CheckError::Parse { ref path, .. } if path == &bad));
    }

    #[test]
    fn load_reads_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("db.json");
        std::fs::write(&path, format!(r#"[{{"fen": "{START_FEN}", "moves": ["e2e4"]}}]"#))
            .expect("write");
        let db = load(&path).expect("load failed");
        assert_eq!(db.len(), 1);
        assert_eq!(db.iter().next().map(|r| r.fen.as_str()), Some(START_FEN));
    }
}
