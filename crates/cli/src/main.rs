use std::io;

use pizzeria_cli::Config;

fn main() -> anyhow::Result<()> {
    pizzeria_observability::init();

    let config = Config::from_env()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    pizzeria_cli::run(&config, stdin.lock(), io::stderr(), &mut stdout)?;
    Ok(())
}
