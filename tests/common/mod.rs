#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch working directory holding a `data/` tree.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = match bin {
            "convert-mbti-to-json" => cargo_bin_cmd!("convert-mbti-to-json"),
            "generate-post-count" => cargo_bin_cmd!("generate-post-count"),
            "mbti-word-counts" => cargo_bin_cmd!("mbti-word-counts"),
            other => panic!("unknown binary {other}"),
        };
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn read_json(&self, rel: &str) -> Value {
        let content = fs::read_to_string(self.root.join(rel)).expect("read output");
        serde_json::from_str(&content).expect("valid json output")
    }

    pub fn write_posts(&self, posts: &Value) -> PathBuf {
        self.write(
            "data/rawJson/post/mbtiPost.json",
            serde_json::to_string_pretty(posts).expect("serialize posts"),
        )
    }
}
