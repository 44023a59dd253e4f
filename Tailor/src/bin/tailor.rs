fn main() -> anyhow::Result<()> {
    tailor::cli::run_cli()
}
