/// Path to the `starlint` binary under test, provided by Cargo.
pub fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_starlint")
}
