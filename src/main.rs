fn main() -> anyhow::Result<()> {
    docs_assistant::cli::run()
}
