use std::path::Path;

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::dump::{self, DumpOptions, DumpRequest};
use crate::index::Index;

fn borrow_args(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

/// `options_json` is a [`DumpRequest`]; its `index` member picks the
/// flags the index is created with.
#[napi]
pub fn dump_file(path: String, args: Vec<String>, options_json: Option<String>) -> Result<String> {
    let request: DumpRequest = match options_json {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| Error::from_reason(format!("invalid options json: {}", e)))?,
        None => DumpRequest::default(),
    };
    let options = request
        .dump_options()
        .map_err(|e| Error::from_reason(format!("invalid filter: {}", e)))?;
    let index = Index::with_options(&request.index);
    let report = dump::dump_with_index(&index, Path::new(&path), &borrow_args(&args), &options)
        .map_err(|e| Error::from_reason(format!("parse error: {}", e)))?;
    serde_json::to_string(&report).map_err(|e| Error::from_reason(format!("serialize report failed: {}", e)))
}

#[napi(object)]
pub struct TraverseStats {
    pub nodes_visited: u32,
}

#[napi]
pub fn count_cursors(path: String, args: Vec<String>) -> Result<TraverseStats> {
    let options = DumpOptions { full_depth: true, ..Default::default() };
    let report = dump::parse_file(Path::new(&path), &borrow_args(&args), &options)
        .map_err(|e| Error::from_reason(format!("parse error: {}", e)))?;
    Ok(TraverseStats { nodes_visited: report.node_count() })
}

#[napi]
pub fn clang_version() -> String {
    crate::clang_version()
}
