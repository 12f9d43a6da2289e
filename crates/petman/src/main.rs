mod cli;
mod gpu;
mod paths;
mod run;
mod window;

use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::parse();
    run::run(args)
}
