use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = notimon_cashbook::args::parse();
    notimon_cashbook::cli::main(args)
}
