use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use clang_index::dump::{dump_text, AstNode, DumpOptions, Visitor};
use clang_index::{
    clang_version, dump_paths, traverse_ast, CompilationDatabase, Index, TranslationUnitFlags, UnsavedFiles,
};
use regex::Regex;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "inspect C/C++ sources through libclang", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Extra compiler arguments, whitespace separated
    #[arg(long, env = "CLANG_INDEX_ARGS", global = true)]
    clang_index_args: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the cursor tree of files or directories
    Dump(DumpArgs),
    /// Print the commands of DIR/compile_commands.json
    Compdb {
        dir: PathBuf,
    },
    /// Print compiler diagnostics; fails if there are errors
    Diagnostics(DiagnosticsArgs),
    /// Print the libclang version
    Version,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Print one JSON report per file
    #[arg(long)]
    json: bool,
    /// Recurse into every cursor, not only records, enums and namespaces
    #[arg(long)]
    all: bool,
    /// Skip cursors from included files
    #[arg(long)]
    main_file_only: bool,
    /// Keep only cursors whose spelling matches
    #[arg(long)]
    filter: Option<Regex>,
    /// Arguments passed to clang, after `--`
    #[arg(last = true)]
    clang_args: Vec<String>,
}

#[derive(Args, Debug)]
struct DiagnosticsArgs {
    file: PathBuf,
    #[arg(last = true)]
    clang_args: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn compiler_args(env_args: Option<&str>, trailing: &[String]) -> Vec<String> {
    env_args
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .chain(trailing.iter().cloned())
        .collect()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let env_args = cli.clang_index_args.as_deref();
    match cli.command {
        Commands::Dump(args) => {
            let clang_args = compiler_args(env_args, &args.clang_args);
            run_dump(args, &clang_args)
        }
        Commands::Compdb { dir } => run_compdb(&dir),
        Commands::Diagnostics(args) => {
            let clang_args = compiler_args(env_args, &args.clang_args);
            run_diagnostics(&args.file, &clang_args)
        }
        Commands::Version => {
            println!("{}", clang_version());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_dump(args: DumpArgs, clang_args: &[String]) -> Result<ExitCode> {
    let options = DumpOptions { full_depth: args.all, main_file_only: args.main_file_only, filter: args.filter };
    let clang_args: Vec<&str> = clang_args.iter().map(String::as_str).collect();
    debug!(paths = args.paths.len(), args = ?clang_args, "dump");

    if !args.json && args.paths.len() == 1 && args.paths[0].is_file() {
        return dump_single(&args.paths[0], &clang_args, &options);
    }

    let mut failed = false;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (path, report) in dump_paths(&args.paths, &clang_args, &options) {
        let report = match report {
            Ok(report) => report,
            Err(err) => {
                warn!(file = %path.display(), %err, "dump failed");
                eprintln!("error: {}: {}", path.display(), err);
                failed = true;
                continue;
            }
        };
        if args.json {
            let json = serde_json::to_string(&report).context("serialize report")?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "== {} ==", report.file)?;
            let mut printer = LinePrinter { out: &mut out, depth: 0, result: Ok(()) };
            traverse_ast(&report.root, &mut printer);
            printer.result?;
        }
    }
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Prints a built tree in the same line format as [`dump_text`].
struct LinePrinter<'a, W: Write> {
    out: &'a mut W,
    depth: usize,
    result: io::Result<()>,
}

impl<W: Write> Visitor for LinePrinter<'_, W> {
    fn enter(&mut self, node: &AstNode) {
        // the root is the translation unit itself
        if self.depth > 0 && self.result.is_ok() {
            self.result = writeln!(self.out, "{}: {} ({})", node.kind, node.spelling, node.usr);
        }
        self.depth += 1;
    }

    fn exit(&mut self, _node: &AstNode) {
        self.depth -= 1;
    }
}

fn dump_single(path: &Path, clang_args: &[&str], options: &DumpOptions) -> Result<ExitCode> {
    let index = Index::new(false, true);
    let tu = index
        .parse_path(path, clang_args, &UnsavedFiles::new(), TranslationUnitFlags::NONE)
        .with_context(|| format!("parse {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let cursor = tu.cursor();
    writeln!(out, "tu: {}", tu.spelling())?;
    writeln!(out, "cursor-isnull: {}", cursor.is_null())?;
    writeln!(out, "cursor: {}", cursor.spelling())?;
    writeln!(out, "cursor-kind: {}", cursor.kind())?;
    let tu_fname = tu.file(path)?.map(|f| f.name()).unwrap_or_default();
    writeln!(out, "tu-fname: {}", tu_fname)?;
    dump_text(&cursor, options, &mut out)?;
    Ok(ExitCode::SUCCESS)
}

fn run_compdb(dir: &Path) -> Result<ExitCode> {
    println!(":: inspecting [{}]...", dir.display());
    let fname = dir.join("compile_commands.json");
    if !fname.is_file() {
        bail!("could not open file [{}]", fname.display());
    }
    let db = CompilationDatabase::from_directory(dir)
        .with_context(|| format!("could not open compilation database at [{}]", dir.display()))?;

    let commands = db.all_compile_commands();
    println!(":: got {} compile commands", commands.len());
    for (i, cmd) in commands.iter().enumerate() {
        println!("::  --- cmd={} ---", i);
        println!("::  dir= {:?}", cmd.directory());
        println!("::  nargs= {}", cmd.num_args());
        let quoted: Vec<String> = cmd.arguments().iter().map(|a| format!("{:?}", a)).collect();
        println!("::  args= {{{}}}", quoted.join(", "));
        if i + 1 != commands.len() {
            println!("::");
        }
    }
    println!(":: inspecting [{}]... [done]", dir.display());
    Ok(ExitCode::SUCCESS)
}

fn run_diagnostics(file: &Path, clang_args: &[String]) -> Result<ExitCode> {
    let clang_args: Vec<&str> = clang_args.iter().map(String::as_str).collect();
    let index = Index::new(false, false);
    let tu = index
        .parse_path(file, &clang_args, &UnsavedFiles::new(), TranslationUnitFlags::NONE)
        .with_context(|| format!("parse {}", file.display()))?;

    let mut errors = 0;
    for diagnostic in tu.diagnostics() {
        println!("{}", diagnostic);
        if diagnostic.severity().is_error() {
            errors += 1;
        }
    }
    debug!(file = %file.display(), errors, "diagnostics");
    Ok(if errors > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
