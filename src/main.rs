use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crossroads::{
    IntervalSource, RenderSurface, Scene, SceneError, SimRng, SimulationConfig, TraceSurface,
};

#[derive(Parser, Debug)]
#[command(
    name = "crossroads",
    version,
    about = "Four-way intersection with alternating signals"
)]
struct Cli {
    /// Virtual seconds to simulate in headless mode.
    #[arg(long, default_value_t = 60)]
    duration: u64,

    /// Virtual second at which the intersection is stopped.
    #[arg(long, value_name = "SECS")]
    stop_at: Option<u64>,

    /// Seed for the spawn interval generator (random when absent).
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_name = "MS", default_value_t = 7000)]
    alternation_ms: u64,

    #[arg(long, value_name = "MS", default_value_t = 1000)]
    min_spawn_ms: u64,

    /// Exclusive upper bound of a lane's spawn interval.
    #[arg(long, value_name = "MS", default_value_t = 6000)]
    max_spawn_ms: u64,

    /// Time a vehicle takes to cross the scene.
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    travel_ms: u64,

    /// Open an SDL2 window instead of running headless.
    #[arg(long)]
    window: bool,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            alternation_period: Duration::from_millis(self.alternation_ms),
            min_spawn_interval: Duration::from_millis(self.min_spawn_ms),
            max_spawn_interval: Duration::from_millis(self.max_spawn_ms),
            travel_time: Duration::from_millis(self.travel_ms),
        }
    }

    fn rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::from_seed_u64(seed),
            None => SimRng::from_entropy(),
        }
    }
}

fn level_from_verbosity(verbosity: u8) -> tracing::metadata::LevelFilter {
    match verbosity {
        0 => tracing::metadata::LevelFilter::WARN,
        1 => tracing::metadata::LevelFilter::INFO,
        _ => tracing::metadata::LevelFilter::DEBUG,
    }
}

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var("LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn main() -> Result<(), SceneError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    config.validate()?;

    if cli.window {
        return run_window(&cli, config);
    }
    run_headless(&cli, config)
}

fn run_headless(cli: &Cli, config: SimulationConfig) -> Result<(), SceneError> {
    let mut surface = TraceSurface::default();
    let mut scene = Scene::new(config, cli.rng(), &mut surface)?;
    let total = Duration::from_secs(cli.duration);

    simulate(
        &mut scene,
        &mut surface,
        total,
        cli.stop_at.map(Duration::from_secs),
    );

    tracing::info!(
        active = scene.active_vehicles(),
        running = scene.controller().is_running(),
        "simulation finished"
    );
    println!("{}", scene.statistics());
    Ok(())
}

/// Runs the scene for `total`. A stop time at or past the end still stops
/// the intersection once the run is over.
fn simulate<R: IntervalSource>(
    scene: &mut Scene<R>,
    surface: &mut dyn RenderSurface,
    total: Duration,
    stop_at: Option<Duration>,
) {
    scene.start();
    match stop_at {
        Some(stop_at) if stop_at < total => {
            scene.advance(stop_at, surface);
            scene.stop(surface);
            scene.advance(total - stop_at, surface);
        }
        Some(_) => {
            scene.advance(total, surface);
            scene.stop(surface);
        }
        None => scene.advance(total, surface),
    }
}

#[cfg(not(feature = "window"))]
fn run_window(_cli: &Cli, _config: SimulationConfig) -> Result<(), SceneError> {
    Err(SceneError::InvalidConfig(
        "this build has no window support; rebuild with `--features window`".to_string(),
    ))
}

#[cfg(feature = "window")]
fn run_window(cli: &Cli, config: SimulationConfig) -> Result<(), SceneError> {
    use std::time::Instant;

    use crossroads::constants::{FRAME_DURATION, WINDOW_SIZE};
    use crossroads::renderer::Renderer;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;

    let sdl_context = sdl2::init().map_err(SceneError::Render)?;
    let video_subsystem = sdl_context.video().map_err(SceneError::Render)?;

    let window = video_subsystem
        .window("Crossroads", WINDOW_SIZE, WINDOW_SIZE)
        .position_centered()
        .build()
        .map_err(|e| SceneError::Render(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| SceneError::Render(e.to_string()))?;

    let mut renderer = Renderer::new();
    let mut scene = Scene::new(config, cli.rng(), &mut renderer)?;
    let mut event_pump = sdl_context.event_pump().map_err(SceneError::Render)?;
    let mut last_frame = Instant::now();

    println!("=== CONTROLS ===");
    println!("S:      Start the signal cycle");
    println!("P/Space: Stop (all signals red)");
    println!("Esc:    Exit and show final statistics");

    'running: loop {
        let now = Instant::now();
        let delta = now.duration_since(last_frame);
        last_frame = now;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::S),
                    repeat: false,
                    ..
                } => scene.start(),
                Event::KeyDown {
                    keycode: Some(Keycode::P | Keycode::Space),
                    repeat: false,
                    ..
                } => scene.stop(&mut renderer),
                _ => {}
            }
        }

        scene.advance(delta, &mut renderer);
        renderer
            .render(&mut canvas, &scene)
            .map_err(SceneError::Render)?;

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    println!("{}", scene.statistics());
    Ok(())
}
