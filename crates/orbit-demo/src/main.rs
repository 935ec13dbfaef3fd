#![forbid(unsafe_code)]

//! Orbit demo binary entry point.

use std::process;
use std::time::Duration;

use orbit::LocaleContext;
use orbit_demo::app::{self, App};
use orbit_demo::{cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file {}: {e}", path.display());
        process::exit(1);
    }

    let tree = match app::load_tree(opts.tree.as_deref()) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Failed to load tree: {e}");
            process::exit(1);
        }
    };

    let locale = match opts.locale {
        Some(locale) => LocaleContext::new(locale),
        None => LocaleContext::system(),
    };
    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));

    let mut app = App::new(tree, locale);
    if let Some(snapshot) = opts.state.as_deref().and_then(app::load_snapshot) {
        app.restore(&snapshot);
    }
    if let Err(e) = app::run(&mut app, opts.mouse, exit_after) {
        eprintln!("Runtime error: {e}");
        process::exit(1);
    }
    if let Some(path) = &opts.state
        && let Err(e) = app::save_snapshot(path, &app.snapshot())
    {
        eprintln!("Failed to save state to {}: {e}", path.display());
        process::exit(1);
    }
}
