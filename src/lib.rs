//! Chess board for two players sharing one keyboard.
//!
//! The core is the move generator ([`chess::movegen`]): given a piece, its
//! square and the board, it produces the squares the piece may move to under
//! the movement geometry of chess pieces. King safety, castling and en passant
//! are not part of the rules; pawns reaching the farthest rank always become
//! queens.

// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]

pub mod chess;
pub mod game;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Build profile and target. Produced by `build.rs`.
const BUILD_TYPE: &str = include_str!(concat!(env!("OUT_DIR"), "/build_type"));

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the version, the build and the repository on
/// startup.
pub fn print_engine_info() {
    println!("{} {}", build::PROJECT_NAME, version());
    println!("Build: {BUILD_TYPE}");
    if !build::GIT_CLEAN {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
