use std::collections::HashSet;

/// FEN の先頭 4 フィールド（駒配置・手番・キャスリング権・アンパッサン）。
/// 手数カウンタは合法手に影響しないので比較から外す。
pub fn normalize_4f(fen: &str) -> Option<String> {
    let fields: Vec<&str> = fen.split_whitespace().take(4).collect();
    if fields.is_empty() {
        return None;
    }
    Some(fields.join(" "))
}

/// In-memory de-duplicator keyed by the first four FEN fields plus the sorted move list.
///
/// 同じ局面でも手順によって参照生成器の出力が変わることがあるので、
/// 指し手リストが違うレコードは重複扱いにしない。
#[derive(Default)]
pub struct FenDedup {
    set: HashSet<String>,
}

impl FenDedup {
    pub fn new() -> Self {
        Self::default()
    }
    /// 初出なら true。空の FEN は重複扱いにせず常に true を返す。
    pub fn insert(&mut self, fen: &str, moves: &[String]) -> bool {
        let Some(mut key) = normalize_4f(fen) else {
            return true;
        };
        let mut sorted: Vec<&str> = moves.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        key.push('|');
        key.push_str(&sorted.join(" "));
        self.set.insert(key)
    }
    pub fn len(&self) -> usize {
        self.set.len()
    }
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
