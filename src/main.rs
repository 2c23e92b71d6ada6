//! Binary entry point: read grid dimensions from the environment, log hover
//! reports, and hand control to the app shell.

use memgrid::input::HoverCallback;
use memgrid::simulation::GridConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = grid_config_from_env();
    let on_hover: HoverCallback = Box::new(|hover| match hover {
        Some(h) => log::debug!(
            "hover cell ({}, {}) at ({:.0}, {:.0})",
            h.row,
            h.col,
            h.x,
            h.y
        ),
        None => log::trace!("hover cleared"),
    });

    match memgrid::app::run(config, Some(on_hover)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn grid_config_from_env() -> GridConfig {
    let mut config = GridConfig::default();
    if let Some(rows) = dimension_from_env("MEMGRID_ROWS") {
        config.rows = rows;
    }
    if let Some(cols) = dimension_from_env("MEMGRID_COLS") {
        config.cols = cols;
    }
    config
}

fn dimension_from_env(key: &str) -> Option<usize> {
    let value = std::env::var(key).ok()?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            log::warn!("ignoring {key}={value}: expected a positive integer");
            None
        }
    }
}
