use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use findash::config::{DATA_PATH_ENV, DEFAULT_DATA_PATH, Settings};
use findash::{Dashboard, Indicator, Region, SelectionState, Session, UpdateRequest};
use findash::{cards, series, storage, viz};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "findash",
    version,
    about = "Chart & summarize country financial indicators from a cleaned World Bank table"
)]
struct Cli {
    /// Cleaned indicator table (CSV: Country Name, Series Name, one column per year).
    #[arg(long, global = true, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the indicator keys and the dataset series they map to.
    Indicators,
    /// List the country pick groups.
    Regions,
    /// List every country in the data file.
    Countries,
    /// Show chart and summary cards for an indicator and countries.
    Show(ShowArgs),
    /// Feed JSON-lines update requests through one session and print JSON-lines responses.
    Replay(ReplayArgs),
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
enum OutFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Indicator key, e.g. "Consumer Prices Inflation" (see `findash indicators`).
    #[arg(short, long, default_value_t = Indicator::default().label().to_string())]
    indicator: String,
    /// Country to add to the selection; repeat for several (names may contain commas).
    #[arg(short, long = "country")]
    countries: Vec<String>,
    /// Start from an empty selection instead of the default country.
    #[arg(long, default_value_t = false)]
    fresh: bool,
    /// Output format for stdout.
    #[arg(long, value_enum, default_value_t = OutFormat::Text)]
    format: OutFormat,
    /// Number formatting locale (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Save the extracted series as CSV.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Save the full response (figure + cards) as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON-lines file with one update request per line; `-` reads stdin.
    #[arg(long, default_value = "-")]
    events: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = Settings {
        data_path: cli.data,
        ..Settings::default()
    };
    match cli.cmd {
        Command::Indicators => cmd_indicators(),
        Command::Regions => cmd_regions(),
        Command::Countries => cmd_countries(&settings),
        Command::Show(args) => cmd_show(settings, args),
        Command::Replay(args) => cmd_replay(&settings, args),
    }
}

fn load(settings: &Settings) -> Result<Dashboard> {
    Dashboard::load(&settings.data_path)
        .with_context(|| format!("cannot start without {}", settings.data_path.display()))
}

fn cmd_indicators() -> Result<()> {
    for i in Indicator::ALL {
        println!("{}\t{}", i.label(), i.series_name());
    }
    Ok(())
}

fn cmd_regions() -> Result<()> {
    for r in Region::ALL {
        println!("{}: {}", r.label(), r.countries().join("; "));
    }
    Ok(())
}

fn cmd_countries(settings: &Settings) -> Result<()> {
    let dashboard = load(settings)?;
    for c in dashboard.table().countries() {
        println!("{c}");
    }
    Ok(())
}

fn cmd_show(mut settings: Settings, args: ShowArgs) -> Result<()> {
    settings.locale = args.locale;
    settings.plot_width = args.width;
    settings.plot_height = args.height;
    settings.indicator = args.indicator.parse()?;

    let dashboard = load(&settings)?;
    let session = Session::new(
        dashboard,
        SelectionState::new(settings.initial_countries.iter().cloned()),
    );

    let indicator = settings.indicator.label().to_string();
    if args.fresh {
        // a reset event adds no picks, so the picks follow in a second event
        session.update(&UpdateRequest {
            indicator: indicator.clone(),
            picks: Vec::new(),
            reset_clicks: Some(1),
        })?;
    }
    let response = session.update(&UpdateRequest {
        indicator,
        picks: vec![args.countries],
        reset_clicks: args.fresh.then_some(1),
    })?;

    match args.format {
        OutFormat::Text => {
            println!("{}", response.figure.title);
            print!("{}", cards::render_cards(&response.cards, &settings.locale));
        }
        OutFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    if let Some(path) = args.out.as_ref() {
        let data = series::extract_indicator(
            session.dashboard().table(),
            response.indicator,
            &response.selection,
        );
        storage::save_series_csv(response.indicator, &data, path)?;
        eprintln!("Saved {} series to {}", data.len(), path.display());
    }

    if let Some(path) = args.json.as_ref() {
        storage::save_json(&response, path)?;
        eprintln!("Saved response to {}", path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_figure(
            &response.figure,
            plot_path,
            settings.plot_width,
            settings.plot_height,
            &settings.locale,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    Ok(())
}

fn cmd_replay(settings: &Settings, args: ReplayArgs) -> Result<()> {
    let dashboard = load(settings)?;
    let session = Session::new(
        dashboard,
        SelectionState::new(settings.initial_countries.iter().cloned()),
    );

    let input: Box<dyn BufRead> = if args.events == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let f = std::fs::File::open(&args.events)
            .with_context(|| format!("open {}", args.events))?;
        Box::new(BufReader::new(f))
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request: UpdateRequest = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid update request", n + 1))?;
        match session.update(&request) {
            Ok(response) => serde_json::to_writer(&mut out, &response)?,
            // rejected requests leave the selection untouched; report and go on
            Err(e) => {
                serde_json::to_writer(&mut out, &serde_json::json!({ "error": e.to_string() }))?
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
