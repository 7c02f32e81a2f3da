//! SigTest binary entry point.

fn main() -> anyhow::Result<()> {
    sigtest_cli::run()
}
