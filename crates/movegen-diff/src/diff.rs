use similar::TextDiff;

const EXPECTED_HEADER: &str = "expected";
const ACTUAL_HEADER: &str = "actual";
const CONTEXT_RADIUS: usize = 3;

/// 2 つの指し手リストをそれぞれ辞書順ソートして比較する。
///
/// 一致すれば空、食い違えば `expected` → `actual` の unified diff を行単位で返す。
/// オラクルにしかない手は `+`、データベースにしかない手は `-` で出る。
pub fn compare(expected: &[String], actual: &[String]) -> Vec<String> {
    let expected = sorted(expected);
    let actual = sorted(actual);
    if expected == actual {
        return Vec::new();
    }

    let old = as_lines(&expected);
    let new = as_lines(&actual);
    let diff = TextDiff::from_lines(old.as_str(), new.as_str());
    diff.unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(EXPECTED_HEADER, ACTUAL_HEADER)
        .to_string()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn sorted(moves: &[String]) -> Vec<&str> {
    let mut v: Vec<&str> = moves.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}

fn as_lines(moves: &[&str]) -> String {
    let mut buf = String::with_capacity(moves.iter().map(|m| m.len() + 1).sum());
    for mv in moves {
        buf.push_str(mv);
        buf.push('\n');
    }
    buf
}
