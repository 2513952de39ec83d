//! Go source fixtures and on-disk corpora

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// The walkthrough function: two assignments around an `if` with a nested return
pub const WALKTHROUGH_GO: &str = r#"package demo

func walkthrough() int {
	x := 1
	if x > 0 {
		return x
	}
	y := 2
	return y
}
"#;

pub const SERVER_GO: &str = r#"package server

import "fmt"

type Server struct {
	Name string
}

// Start launches the worker and reports.
func (s *Server) Start(ch chan int) error {
	count := 0
	count++
	go s.work(ch)
	defer fmt.Println("started")
	ch <- count
	for i := range ch {
		total := i
		_ = total
	}
	return nil
}

func helper() {
	a := 1
	b := 2
	a, b = b, a
	fmt.Println(a, b)
}
"#;

pub const DUPLICATE_GO: &str = r#"package other

func helper() {
	return
}
"#;

/// Write `files` (relative path, content) into a fresh temp directory
pub fn go_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (rel, content) in files {
        write_file(dir.path(), rel, content);
    }
    dir
}

pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture");
}
