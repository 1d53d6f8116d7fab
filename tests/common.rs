#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const BIRTH_DATE: &str = "2024-01-15";

/// Two days: the 10th has feedings and one stool, the 11th stools only.
pub const MONTHLY_EXPORT: &str = "【ぴよログ】2024年3月
----------
2024/03/10(日)
09:15   ミルク 120ml
10:00   おしっこ
12:30   うんち (多め)
15:00   ミルク 80ml
ミルク合計   2回 200ml

----------
2024/03/11(月)
01:30   うんち
08:00   うんち (ちょこっと)
";

pub const DAILY_EXPORT_12: &str = "【ぴよログ】2024/03/12(火)
09:15   ミルク 120ml
23:50   うんち (少なめ)
";

pub const DAILY_EXPORT_13: &str = "【ぴよログ】2024/03/13(水)
07:00   ミルク 100ml
";

/// Binary under test, isolated from the user's HOME and environment.
pub fn pst() -> Command {
    let home = env::temp_dir().join("piyostats_test_home");
    fs::create_dir_all(&home).ok();
    pst_in(&home)
}

/// Binary under test with its own HOME, for tests that write a config file.
pub fn pst_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("piyostats");
    cmd.env("HOME", home).env_remove("BABY_BIRTH_DATE");
    cmd
}

/// Fresh, empty HOME directory inside tempdir
pub fn temp_home(name: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("piyostats_{}_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create home dir");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_piyostats.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside tempdir
pub fn temp_data_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("piyostats_{}_data", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");
    dir
}

pub fn write_export(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).expect("write export file");
}

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    pst()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and ingest MONTHLY_EXPORT into it
pub fn init_db_with_monthly(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);

    let dir = temp_data_dir(name);
    write_export(&dir, "2024-03.txt", MONTHLY_EXPORT);

    pst()
        .args([
            "--db",
            &db_path,
            "ingest",
            "monthly",
            "--dir",
            &dir.to_string_lossy(),
            "--birth-date",
            BIRTH_DATE,
        ])
        .assert()
        .success();

    db_path
}
