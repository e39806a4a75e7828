use anime_explorer::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // One UI thread; fetches interleave cooperatively.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}
