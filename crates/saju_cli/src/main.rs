use std::path::PathBuf;

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use saju_rs::{
    ALL_POSITIONS, FourPillars, LunarDateRecord, MonthPillarConvention, ProfileError,
    SajuConfig, SajuProfile, SolarTermRecord, SpiritBasis, ZiHourConvention,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "saju", version, about = "Four Pillars (四柱) calculator")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Take month pillars from the lunar month instead of the Jie terms
    #[arg(long, global = true)]
    lunar_month: bool,

    /// Start the day at 23:00 (早子時) instead of midnight
    #[arg(long, global = true)]
    early_zi: bool,

    /// Anchor the trine spirits on the day branch instead of the year branch
    #[arg(long, global = true)]
    day_basis: bool,

    /// Use local mean time at this longitude (degrees east)
    #[arg(long, global = true, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Reject instants within this many seconds of a Jie term
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full profile: pillars, hidden stems, Ten Gods, spirits, elements
    Profile {
        /// Timestamp with UTC offset (e.g. 2023-10-15T12:00:00+09:00)
        timestamp: String,
    },
    /// The four pillars only
    Pillars {
        /// Timestamp with UTC offset (e.g. 2023-10-15T12:00:00+09:00)
        timestamp: String,
    },
    /// The 24 solar terms opening with a year's 立春
    SolarTerms {
        /// Gregorian year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Lunar date of a civil date
    Lunar {
        /// Civil date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Pillars at a fixed wall-clock time for a range of days
    Days {
        /// First civil date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last civil date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Wall-clock time (HH:MM:SS)
        #[arg(long, default_value = "12:00:00")]
        time: NaiveTime,
        /// UTC offset of the wall clock
        #[arg(long, default_value = "+09:00", allow_hyphen_values = true)]
        offset: FixedOffset,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ProfileError> {
    let config = load_config(&cli)?;
    saju_rs::init(config)?;

    match cli.command {
        Commands::Profile { timestamp } => {
            let profile = saju_rs::profile_str(&timestamp)?;
            if cli.json {
                println!("{}", profile.to_json_pretty()?);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Pillars { timestamp } => {
            let ts = saju_rs::timestamp_from_str(&timestamp)?;
            let pillars = saju_rs::pillars(&ts)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pillars_json(&pillars))?);
            } else {
                println!("{pillars}");
            }
        }

        Commands::SolarTerms { year } => {
            let table = saju_rs::solar_terms(year)?;
            if cli.json {
                let records: Vec<SolarTermRecord> =
                    table.moments().iter().map(SolarTermRecord::from).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for m in table.moments() {
                    println!(
                        "{:>2}  {}  {:<12} {:>5.1}°  {}",
                        m.term.index(),
                        m.term.hanja(),
                        m.term.name(),
                        m.term.longitude_deg(),
                        m.utc.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
            }
        }

        Commands::Lunar { date } => {
            let lunar = saju_rs::lunar_date(date)?;
            if cli.json {
                let record = LunarDateRecord::from(lunar);
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{date} -> {lunar}");
            }
        }

        Commands::Days {
            start,
            end,
            time,
            offset,
        } => {
            let days = saju_rs::pillars_for_days(start, end, time, offset)?;
            if cli.json {
                let rows: Vec<serde_json::Value> = days
                    .iter()
                    .map(|(date, p)| {
                        let mut row = pillars_json(p);
                        row["date"] = serde_json::json!(date.to_string());
                        row
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (date, p) in &days {
                    println!("{date}  {p}");
                }
            }
        }
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<SajuConfig, ProfileError> {
    let mut config = match &cli.config {
        Some(path) => SajuConfig::load(path)?,
        None => SajuConfig::default(),
    };
    if cli.lunar_month {
        config.options.month_convention = MonthPillarConvention::LunarMonth;
    }
    if cli.early_zi {
        config.options.zi_hour = ZiHourConvention::Early23;
    }
    if cli.day_basis {
        config.derive.spirit_basis = SpiritBasis::Day;
    }
    if let Some(lon) = cli.longitude {
        config.options.local_mean_time_longitude = Some(lon);
    }
    if let Some(tol) = cli.tolerance {
        config.options.boundary_tolerance_seconds = tol;
    }
    debug!(?config, "effective configuration");
    Ok(config)
}

fn pillars_json(p: &FourPillars) -> serde_json::Value {
    serde_json::json!({
        "year": p.year().to_string(),
        "month": p.month().to_string(),
        "day": p.day().to_string(),
        "hour": p.hour().to_string(),
    })
}

fn print_profile(profile: &SajuProfile) {
    let record = profile.to_record();
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_owned());
    let pillars = [
        &record.pillars.year,
        &record.pillars.month,
        &record.pillars.day,
        &record.pillars.hour,
    ];

    println!("Timestamp:   {}", profile.timestamp().to_rfc3339());
    println!("Local time:  {}", profile.local_datetime());
    println!("Lunar date:  {}", profile.lunar_date());
    println!(
        "Month term:  {} {} ({})",
        record.month_term.hanja,
        record.month_term.name,
        record.month_term.utc.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    println!("{:<10}{}", "", ALL_POSITIONS.map(|p| p.hanja()).join("\t"));
    let row = |label: &str, cells: [String; 4]| println!("{label:<10}{}", cells.join("\t"));
    row("Pillar", pillars.map(|p| p.full_stem_branch.clone()));
    row("Hidden", pillars.map(|p| p.hidden_stems.concat()));
    let tg = &record.ten_gods;
    row(
        "Ten God",
        [
            opt(&tg.year),
            opt(&tg.month),
            "日主".to_owned(),
            opt(&tg.hour),
        ],
    );
    let btg = &record.branch_ten_gods;
    row(
        "Branch",
        [opt(&btg.year), opt(&btg.month), opt(&btg.day), opt(&btg.hour)],
    );
    let sp = &record.twelve_spirits;
    row(
        "Spirit",
        [opt(&sp.year), opt(&sp.month), opt(&sp.day), opt(&sp.hour)],
    );
    let ss = &record.shen_sha;
    row(
        "Shen sha",
        [opt(&ss.year), opt(&ss.month), opt(&ss.day), opt(&ss.hour)],
    );
    println!();

    println!(
        "Day master:  {} ({} {})",
        profile.day_master().hanja(),
        record.yin_yang,
        record.main_element
    );
    println!(
        "Secondary:   {}",
        record.secondary_element.as_deref().unwrap_or("-")
    );
    let b = &record.element_balance;
    println!(
        "Balance:     Wood {} Fire {} Earth {} Metal {} Water {}",
        b.wood, b.fire, b.earth, b.metal, b.water
    );
    for i in &record.branch_interactions {
        println!(
            "Interaction: {}-{} {}",
            i.first,
            i.second,
            i.relations.join(", ")
        );
    }
}
