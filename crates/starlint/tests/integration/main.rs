/// Integration tests for the starlint CLI
///
/// Directory structure inspired by:
/// https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
///
/// Resolves problems with:
/// - Compilation times, by only having 1 integration test binary
/// - Dead code analysis of integration test helpers https://github.com/rust-lang/rust/issues/46379
mod allow_dirty;
mod allow_no_vcs;
mod help;
mod helpers;
mod output_format;
mod toml;
