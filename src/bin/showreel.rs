use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use showreel::{
    CarouselConfig, CarouselSession, Catalog, ClickTarget, GoTo, Intent, Outcome, Route,
    ViewportProvider, resolve_detail, slugify,
};

#[derive(Parser, Debug)]
#[command(name = "showreel", version)]
struct Cli {
    /// Log to stderr (filter with RUST_LOG, default `showreel=debug`).
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the slug of each title.
    Slug(SlugArgs),
    /// Resolve a site path against a catalog and print the view as JSON.
    Route(RouteArgs),
    /// Drive a carousel through a list of steps and print one JSON line per step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SlugArgs {
    /// Titles to slug.
    #[arg(required = true)]
    titles: Vec<String>,
}

#[derive(Parser, Debug)]
struct RouteArgs {
    /// Path to resolve, e.g. `/proyectos/proyecto-madero`.
    path: String,

    /// Catalog JSON (defaults to the bundled projects).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Catalog JSON (defaults to the bundled projects).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Carousel config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial viewport width in pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Engine steps per second used by `wait`.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Steps: next, prev, goto:N, click:N, resize:W, wait:SECS, settle.
    #[arg(required = true)]
    steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Intent(Intent),
    Resize(f64),
    Wait(f64),
    Settle,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = s.split_once(':').unwrap_or((s, ""));
        let num = |what: &str| -> Result<f64, String> {
            arg.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| format!("step '{s}' needs a non-negative {what}"))
        };
        let index = || -> Result<usize, String> {
            arg.parse::<usize>()
                .map_err(|_| format!("step '{s}' needs a slide index"))
        };
        match name {
            "next" => Ok(Self::Intent(Intent::Next)),
            "prev" => Ok(Self::Intent(Intent::Prev)),
            "goto" | "dot" => Ok(Self::Intent(Intent::Dot(index()?))),
            "click" => Ok(Self::Intent(Intent::Click {
                index: index()?,
                target: ClickTarget::Content,
            })),
            "resize" => Ok(Self::Resize(num("width")?)),
            "wait" => Ok(Self::Wait(num("duration")?)),
            "settle" => Ok(Self::Settle),
            _ => Err(format!("unknown step '{s}'")),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.log {
        init_logging();
    }
    match cli.cmd {
        Command::Slug(args) => cmd_slug(args),
        Command::Route(args) => cmd_route(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showreel=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(p) => Catalog::from_path(p).with_context(|| format!("load catalog '{}'", p.display())),
        None => Catalog::bundled().context("load bundled catalog"),
    }
}

fn cmd_slug(args: SlugArgs) -> anyhow::Result<()> {
    for title in &args.titles {
        println!("{}", slugify(title));
    }
    Ok(())
}

fn cmd_route(args: RouteArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let route = Route::parse(&args.path);
    let out = match &route {
        Route::Project(slug) => serde_json::to_value(resolve_detail(&catalog, slug))?,
        other => serde_json::json!({ "view": "page", "route": other }),
    };
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let config = match &args.config {
        Some(p) => CarouselConfig::from_path(p)
            .with_context(|| format!("load carousel config '{}'", p.display()))?,
        None => CarouselConfig::default(),
    };
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let dt = 1.0 / f64::from(args.fps);

    let mut viewport = ViewportProvider::new(config.breakpoint, args.width);
    let mut session = CarouselSession::mount_with_engine(catalog, config, &mut viewport);

    for (i, step) in args.steps.iter().enumerate() {
        let result = match *step {
            Step::Intent(intent) => describe_outcome(&session.handle(intent)),
            Step::Resize(width) => {
                viewport.resize(width);
                session.sync_viewport();
                serde_json::json!({ "resized": width })
            }
            Step::Wait(secs) => {
                let frames = (secs / dt).round() as u64;
                let mut completed = 0usize;
                for _ in 0..frames {
                    completed += session.advance(dt).len();
                }
                serde_json::json!({ "waited": secs, "completed": completed })
            }
            Step::Settle => {
                let completed = session.settle(dt).len();
                serde_json::json!({ "completed": completed })
            }
        };

        let c = session.controller();
        let line = serde_json::json!({
            "step": i,
            "result": result,
            "index": c.current_index(),
            "animating": c.is_animating(),
            "viewport": c.viewport_class(),
            "controls": c.controls(),
            "visual": c.visual(),
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    let _catalog = session.unmount(&mut viewport);
    Ok(())
}

fn describe_outcome(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Move(GoTo::Started { from, to }) => {
            serde_json::json!({ "move": "started", "from": from, "to": to })
        }
        Outcome::Move(GoTo::Ignored(reason)) => {
            serde_json::json!({ "move": "ignored", "reason": format!("{reason:?}") })
        }
        Outcome::Navigate(route) => serde_json::json!({ "navigate": route.to_path() }),
        Outcome::Nothing => serde_json::Value::Null,
    }
}

