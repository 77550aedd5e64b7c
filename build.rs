use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LLVM_CONFIG_NAMES: &[&str] = &[
    "llvm-config",
    "llvm-config-20",
    "llvm-config-19",
    "llvm-config-18",
    "llvm-config-17",
    "llvm-config-16",
    "llvm-config-15",
    "llvm-config-14",
    "llvm-config-13",
    "llvm-config-12",
    "llvm-config-11",
];

const FALLBACK_DIRS: &[&str] = &[
    "/usr/lib64",
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/local/lib",
    "/usr/lib",
    "/opt/homebrew/opt/llvm/lib",
    "/usr/local/opt/llvm/lib",
    "/Library/Developer/CommandLineTools/usr/lib",
    "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/lib",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBCLANG_PATH");
    println!("cargo:rerun-if-env-changed=LLVM_CONFIG_PATH");

    match find_libclang() {
        Some((dir, file)) => {
            println!("cargo:rustc-link-search=native={}", dir.display());
            if !cfg!(windows) {
                println!("cargo:rustc-link-arg=-Wl,-rpath,{}", dir.display());
            }
            println!("cargo:rustc-link-lib={}", link_directive(&file));
        }
        None => {
            println!("cargo:warning=libclang not found, set LIBCLANG_PATH to the directory holding it");
            println!("cargo:rustc-link-lib=dylib=clang");
        }
    }
}

/// Turns a library file name into the value of a `rustc-link-lib` directive.
fn link_directive(file: &str) -> String {
    let stem = file.strip_prefix("lib").unwrap_or(file);
    for ext in [".so", ".dylib", ".lib"] {
        if let Some(name) = stem.strip_suffix(ext) {
            return format!("dylib={name}");
        }
    }
    // versioned shared objects such as libclang.so.1 have no linker-friendly name
    format!("dylib:+verbatim={file}")
}

fn find_libclang() -> Option<(PathBuf, String)> {
    if let Ok(path) = env::var("LIBCLANG_PATH") {
        let path = PathBuf::from(path);
        if path.is_file() {
            let dir = path.parent()?.to_path_buf();
            let file = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, file));
        }
        if let Some(file) = libclang_in(&path) {
            return Some((path, file));
        }
    }

    if let Some(dir) = llvm_config_libdir() {
        if let Some(file) = libclang_in(&dir) {
            return Some((dir, file));
        }
    }

    for dir in versioned_llvm_dirs() {
        if let Some(file) = libclang_in(&dir) {
            return Some((dir, file));
        }
    }

    FALLBACK_DIRS.iter().map(PathBuf::from).find_map(|dir| {
        let file = libclang_in(&dir)?;
        Some((dir, file))
    })
}

fn llvm_config_libdir() -> Option<PathBuf> {
    let mut candidates: Vec<String> = Vec::new();
    if let Ok(path) = env::var("LLVM_CONFIG_PATH") {
        candidates.push(path);
    }
    candidates.extend(LLVM_CONFIG_NAMES.iter().map(|s| s.to_string()));

    candidates.into_iter().find_map(|program| {
        let output = Command::new(&program).arg("--libdir").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    })
}

/// `/usr/lib/llvm-N/lib`, newest first.
fn versioned_llvm_dirs() -> Vec<PathBuf> {
    let mut found: Vec<(u32, PathBuf)> = Vec::new();
    if let Ok(entries) = fs::read_dir("/usr/lib") {
        for entry in entries.filter_map(|e| e.ok()) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(version) = name.strip_prefix("llvm-") {
                if let Ok(version) = version.parse::<u32>() {
                    found.push((version, entry.path().join("lib")));
                }
            }
        }
    }
    found.sort_by(|a, b| b.0.cmp(&a.0));
    found.into_iter().map(|(_, dir)| dir).collect()
}

fn libclang_in(dir: &Path) -> Option<String> {
    let entries = fs::read_dir(dir).ok()?;
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| is_libclang(name))
        .collect();
    if names.is_empty() {
        return None;
    }
    // prefer the unversioned development symlink
    names.sort_by_key(|name| (rank(name), std::cmp::Reverse(name.clone())));
    names.into_iter().next()
}

fn rank(name: &str) -> u8 {
    match name {
        "libclang.so" | "libclang.dylib" | "libclang.lib" => 0,
        n if n.ends_with(".so") || n.ends_with(".dylib") => 1,
        _ => 2,
    }
}

fn is_libclang(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("libclang") else {
        return false;
    };
    // libclang-cpp, libclang_rt and friends are different libraries
    if rest.starts_with("-cpp") || rest.starts_with('_') {
        return false;
    }
    if !(rest.is_empty() || rest.starts_with('.') || rest.starts_with('-')) {
        return false;
    }
    name.ends_with(".so") || name.contains(".so.") || name.ends_with(".dylib") || name.ends_with(".lib")
}
