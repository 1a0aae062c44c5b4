use anyhow::Result;
use tabel::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
