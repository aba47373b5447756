//! Render demo
//!
//! Mounts the appendix page, renders it twice and prints the markup.
//! Set `RUST_LOG=fos_static=debug` to watch the static cache at work.

use std::sync::Arc;

use fos_static::RenderData;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let component = Arc::new(fos_docs::appendix_a());
    let mut state = fos_static::create_instance_state(&component);
    let data = RenderData::new();

    let first = fos_static::render(&mut state, &data)?;
    let second = fos_static::render(&mut state, &data)?;
    anyhow::ensure!(first == second, "re-render changed {}", component.name());

    println!("{}", second.to_html());

    let stats = state.stats();
    tracing::info!(
        "{}: {}/{} statics cached, {} builds, {} hits",
        component.name(),
        stats.cached,
        stats.slots,
        stats.builds,
        stats.hits
    );
    fos_static::destroy_instance_state(state);
    Ok(())
}
