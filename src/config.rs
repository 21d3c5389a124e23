use crate::animation::Animation;
use crate::core::{PointLight, ProjectionConfig, Shape};
use crate::error::{Error, Result};
use crate::pipeline::RenderConfig;
use clap::{Arg, ArgAction, ArgMatches, Command};
use glam::DVec3;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WIDTH: usize = 180;
pub const DEFAULT_HEIGHT: usize = 50;

/// Everything the binary needs, resolved from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub shape: Shape,
    pub projection: ProjectionConfig,
    pub render: RenderConfig,
    pub light: PointLight,
    pub animation: Animation,
    /// Stop after this many displayed frames.
    pub frames: Option<u64>,
    /// Print one frame to stdout and exit.
    pub once: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

pub fn create_clap_command() -> Command {
    Command::new("ascii_spin")
        .about("Spin a low-poly shape in the terminal as colored ASCII")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("shape")
                .short('s')
                .long("shape")
                .value_name("SHAPE")
                .help("Which built-in shape to render")
                .value_parser(["cube", "prism", "logo"])
                .default_value("logo"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("COLS")
                .help("Screen width in cells. Defaults to the terminal width")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("ROWS")
                .help("Screen height in cells. Defaults to the terminal height")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("z-offset")
                .long("z-offset")
                .value_name("DIST")
                .help("Camera distance from the origin")
                .value_parser(clap::value_parser!(f64))
                .default_value("5.0"),
        )
        .arg(
            Arg::new("scale")
                .long("scale")
                .value_name("SCALE")
                .help("Horizontal projection scale (vertical is half of it)")
                .value_parser(clap::value_parser!(f64))
                .default_value("140.0"),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_name("STEP")
                .help("Sampling step across each face, in (0, 2]")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.025"),
        )
        .arg(
            Arg::new("min-brightness")
                .long("min-brightness")
                .value_name("FACTOR")
                .help("Color multiplier for unlit surfaces, in [0, 1]")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.85"),
        )
        .arg(
            Arg::new("speed-x")
                .long("speed-x")
                .value_name("RAD")
                .help("Rotation about X per frame")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0.02"),
        )
        .arg(
            Arg::new("speed-y")
                .long("speed-y")
                .value_name("RAD")
                .help("Rotation about Y per frame")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("0.012"),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_name("MS")
                .help("Delay between rendered frames")
                .value_parser(clap::value_parser!(u64))
                .default_value("16"),
        )
        .arg(
            Arg::new("light")
                .long("light")
                .value_name("X,Y,Z")
                .help("Direction towards the light")
                .allow_hyphen_values(true)
                .default_value("1,1,-1"),
        )
        .arg(
            Arg::new("light-distance")
                .long("light-distance")
                .value_name("DIST")
                .help("How far out along the direction the light sits")
                .value_parser(clap::value_parser!(f64))
                .default_value("10000"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Sample faces in parallel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("N")
                .help("Exit after N frames")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Print a single frame to stdout and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Where to write logs")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("ascii_spin.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging, repeatable")
                .action(ArgAction::Count),
        )
}

/// Resolves parsed arguments. `terminal_size` fills in missing width/height.
pub fn handle_clap_matches(
    matches: &ArgMatches,
    terminal_size: Option<(usize, usize)>,
) -> Result<AppConfig> {
    let shape: Shape = matches
        .get_one::<String>("shape")
        .map(|s| s.as_str())
        .unwrap_or("logo")
        .parse()
        .map_err(Error::InvalidConfig)?;

    let (term_w, term_h) = terminal_size.unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT));
    let width = matches.get_one::<usize>("width").copied().unwrap_or(term_w);
    let height = matches.get_one::<usize>("height").copied().unwrap_or(term_h);

    let float = |id: &str| matches.get_one::<f64>(id).copied().unwrap_or_default();

    let projection = ProjectionConfig::new(float("z-offset"), float("scale"), width, height);
    let render = RenderConfig {
        min_color_brightness: float("min-brightness"),
        sampling_step: float("step"),
        parallel: matches.get_flag("parallel"),
    };

    let direction = matches
        .get_one::<String>("light")
        .map(|s| parse_vec3(s))
        .transpose()?
        .unwrap_or(DVec3::new(1.0, 1.0, -1.0));
    let light = PointLight::far_along(direction, float("light-distance"));

    let delay = matches.get_one::<u64>("delay-ms").copied().unwrap_or(16);
    let animation = Animation::new(
        float("speed-x"),
        float("speed-y"),
        Duration::from_millis(delay),
    );

    let log_level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = AppConfig {
        shape,
        projection,
        render,
        light,
        animation,
        frames: matches.get_one::<u64>("frames").copied(),
        once: matches.get_flag("once"),
        log_file: matches
            .get_one::<PathBuf>("log-file")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("ascii_spin.log")),
        log_level,
    };
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Checks the values the render core would otherwise panic on.
    pub fn validate(&self) -> Result<()> {
        let p = &self.projection;
        if p.screen_width == 0 || p.screen_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "screen must be non-empty, got {}x{}",
                p.screen_width, p.screen_height
            )));
        }
        if !(p.z_offset.is_finite() && p.z_offset > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "z-offset must be positive, got {}",
                p.z_offset
            )));
        }
        let radius = self.shape.geometry().bounding_radius();
        if p.z_offset <= radius {
            return Err(Error::InvalidConfig(format!(
                "z-offset must exceed the {} radius of {:.3}, got {}",
                self.shape, radius, p.z_offset
            )));
        }
        if !(p.scale_x.is_finite() && p.scale_x > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "scale must be positive, got {}",
                p.scale_x
            )));
        }
        let step = self.render.sampling_step;
        if !(step > 0.0 && step <= 2.0) {
            return Err(Error::InvalidConfig(format!(
                "step must be in (0, 2], got {}",
                step
            )));
        }
        let floor = self.render.min_color_brightness;
        if !(0.0..=1.0).contains(&floor) {
            return Err(Error::InvalidConfig(format!(
                "min-brightness must be in [0, 1], got {}",
                floor
            )));
        }
        if self.light.position.length_squared() == 0.0 {
            return Err(Error::InvalidConfig(
                "light must not sit at the origin".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_vec3(s: &str) -> Result<DVec3> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::InvalidConfig(format!("bad vector '{}': {}", s, e)))?;

    match parts.as_slice() {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(Error::InvalidConfig(format!(
            "expected three comma separated numbers, got '{}'",
            s
        ))),
    }
}
