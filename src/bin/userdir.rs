fn main() -> anyhow::Result<()> {
    userdir::log()?;
    userdir::cli::CLI::run()
}
