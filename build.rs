//! Embeds the git commit into `ansilog --version` for development builds.
//!
//! Official builds enable the `release` feature and print the bare package
//! version, so nothing is emitted for them.

#[cfg(not(feature = "release"))]
fn main() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });

    // Source tarballs have no .git; cli.rs still needs the variable
    if let Err(e) = emitted {
        println!("cargo:warning=ansilog: no git commit for --version: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

#[cfg(feature = "release")]
fn main() {}
