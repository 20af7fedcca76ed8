#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Small fixture: branch 1 has three rows across three ISO weeks and
/// product 101 outsells product 102 (370 vs 200).
pub const SAMPLE_CSV: &str = "\
branch_id,date,product_id,sales_amount,price
1,2023-01-01,101,100,10
1,2023-01-08,101,150,10
1,2023-01-15,102,200,20
2,2023-01-01,101,120,10
";

/// Writes `contents` into a file under `dir` and returns the path.
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("create temp csv");
    file.write_all(contents.as_bytes())
        .expect("write temp csv contents");
    path
}
