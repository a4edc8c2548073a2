//! データベース入力ユーティリティ（gzip / stdin 対応）

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const READER_BUF_CAP: usize = 128 * 1024; // 128 KiB

/// `-` なら stdin、拡張子 `.gz` なら gzip 展開、それ以外は通常ファイルとして開く。
pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let p = path.as_ref();
    if is_stdin(p) {
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, io::stdin())));
    }
    let f = File::open(p)?;
    if is_gzip(p) {
        let dec = flate2::read::GzDecoder::new(f);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, f)))
}

/// 全内容を UTF-8 文字列として読み込む。
pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut reader = open_reader(path)?;
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

fn is_stdin(p: &Path) -> bool {
    p.to_string_lossy() == "-"
}

fn is_gzip(p: &Path) -> bool {
    p.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}
