use std::{
    fs,
    path::{Path, PathBuf},
};

use xshell::Shell;

#[test]
fn tidy() {
    let sh = Shell::new().unwrap();
    let root = project_root();

    let mut problems = Vec::new();
    for dir in ["src", "tests", "demos", "xtask/src"] {
        for path in rust_files(&root.join(dir)) {
            let text = sh.read_file(&path).unwrap();
            check_text(&path, &text, &mut problems);
        }
    }

    if !problems.is_empty() {
        panic!("\n{}\n", problems.join("\n"));
    }
}

fn check_text(path: &Path, text: &str, problems: &mut Vec<String>) {
    let path = path.display();
    if !text.ends_with('\n') {
        problems.push(format!("{path}: missing trailing newline"));
    }
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.ends_with(char::is_whitespace) {
            problems.push(format!("{path}:{line_no}: trailing whitespace"));
        }
        if line.contains('\t') {
            problems.push(format!("{path}:{line_no}: tab character"));
        }
        if line.contains(concat!("dbg", "!(")) {
            problems.push(format!("{path}:{line_no}: leftover `dbg!`"));
        }
    }
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut res = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(it) => it,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().map_or(false, |it| it == "rs") {
                res.push(path);
            }
        }
    }
    res.sort();
    res
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().to_path_buf()
}
