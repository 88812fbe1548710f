use duke::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
