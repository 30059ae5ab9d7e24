use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::params::NeighbourhoodParams;
use simulation::tiling::TilingConfig;

mod web_query;

const STATS_FLAG: &str = "--stats";
const DRAW_SCALE_ENV: &str = "NEIGHBOURHOOD_DRAW_SCALE";

/// Command-line options: an optional query string (e.g. `low=12&st=4`) and
/// the headless statistics flag.
struct Options {
    params: NeighbourhoodParams,
    stats_only: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Options {
    #[cfg(target_arch = "wasm32")]
    let mut params = web_query::page_query()
        .map(|query| NeighbourhoodParams::from_query(&query))
        .unwrap_or_default();
    #[cfg(not(target_arch = "wasm32"))]
    let mut params = NeighbourhoodParams::default();
    let mut stats_only = false;
    for arg in args {
        if arg == STATS_FLAG {
            stats_only = true;
        } else {
            params = NeighbourhoodParams::from_query(&arg);
        }
    }
    Options { params, stats_only }
}

fn tiling_config_from_env() -> TilingConfig {
    let mut config = TilingConfig::default();
    if let Ok(raw) = std::env::var(DRAW_SCALE_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(scale) if scale.is_finite() && scale > 0.0 => config.draw_scale = scale,
            _ => eprintln!(
                "Ignoring {DRAW_SCALE_ENV}={raw}: expected a positive number, using {}",
                config.draw_scale
            ),
        }
    }
    config
}

/// Print the statistics for `params` as JSON and report whether they were valid.
fn print_stats(params: &NeighbourhoodParams) -> bool {
    match simulation::recompute(params) {
        Ok(stats) => match serde_json::to_string_pretty(&stats) {
            Ok(json) => {
                println!("{json}");
                true
            }
            Err(err) => {
                eprintln!("Failed to serialize statistics: {err}");
                false
            }
        },
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let options = parse_args(std::env::args().skip(1));

    if options.stats_only {
        if !print_stats(&options.params) {
            std::process::exit(1);
        }
        return;
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Neighbourhood Visualizer".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(options.params)
    .insert_resource(tiling_config_from_env())
    .add_plugins((simulation::SimulationPlugin, ui::UiPlugin))
    .add_systems(Startup, setup_camera);

    info!("Starting neighbourhood visualizer");
    app.run();
}
