use ascii_spin::{
    config::{create_clap_command, handle_clap_matches, AppConfig},
    renderers::terminal::{Engine, TerminalRenderer},
    Error, Renderer, Result,
};
use log::info;
use simplelog::{Config, WriteLogger};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = create_clap_command().get_matches();
    let terminal_size = crossterm::terminal::size()
        .ok()
        .map(|(w, h)| (w as usize, h as usize));

    let config = match handle_clap_matches(&matches, terminal_size) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    WriteLogger::init(config.log_level, Config::default(), log_file)
        .map_err(|e| Error::Logger(e.to_string()))
}

fn run(config: AppConfig) -> Result<()> {
    init_logging(&config)?;
    info!(
        "starting: shape = {}, screen = {}x{}, step = {}",
        config.shape,
        config.projection.screen_width,
        config.projection.screen_height,
        config.render.sampling_step
    );

    let mut renderer = Renderer::new(
        config.shape.geometry(),
        config.projection,
        config.light,
        config.render,
    );

    if config.once {
        let (angle_x, angle_y) = config.animation.angles();
        let frame = renderer.render_frame(angle_x, angle_y);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", frame)?;
        stdout.flush()?;
        return Ok(());
    }

    let mut terminal = TerminalRenderer::new()?;
    let metrics = Engine::new(renderer, config.animation)
        .with_frame_limit(config.frames)
        .run(&mut terminal)?;
    drop(terminal);

    info!("{}", metrics);
    Ok(())
}
