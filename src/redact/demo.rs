//! Embedded demo blocks.
//!
//! The documentation article's example command output is captured verbatim
//! under `demos/` and embedded at compile time. Blocks are emitted in the
//! order declared here, not in directory order.

use include_dir::{include_dir, Dir};

static DEMO_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/demos");

/// Block order for the article. Directory listing order is not stable enough
/// to rely on.
const DEMO_ORDER: &[&str] = &[
    "scan-sites.txt",
    "check-bound.txt",
    "search-pattern.txt",
    "export-delimited.txt",
];

/// The built-in example blocks, in article order.
pub fn demo_blocks() -> Vec<String> {
    DEMO_ORDER
        .iter()
        .filter_map(|name| DEMO_DIR.get_file(name))
        .filter_map(|file| file.contents_utf8())
        .map(str::to_string)
        .collect()
}
