mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use saju_core::attributes::{IljuProfile, Naeum};
use saju_core::validation::{parse_date, validate_branch, validate_pillar, validate_stem};
use saju_core::{
    BirthDataInput, BirthFacts, Branch, DaeunCycle, EngineConfig, Element, EventType,
    FourPillars, HyeongchungAnalysis, MonthAlignment, NatalBranches, PredictionRequest,
    ProgressionContext, SajuError, Stem, analyze, analyze_transit, best_days, daeun, gongmang,
    iljin, ilju, naeum, predict, saeun, try_validate_birth_data, validate_birth_data, wolun,
    year_pillar,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "saju", about = "Stem-branch calendar, luck cycles and event timing")]
struct Cli {
    /// Config file (TOML); falls back to $SAJU_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Language for error messages (en, ko)
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Birth time, e.g. 14:30, 2:30 PM, 오후 2:30
    #[arg(long)]
    time: Option<String>,

    /// male / female (m, f, 남, 여)
    #[arg(long)]
    gender: String,
}

impl BirthArgs {
    fn input(&self) -> BirthDataInput {
        BirthDataInput {
            date: self.date.clone(),
            time: self.time.clone(),
            gender: self.gender.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a pillar by stem and branch
    Pillar { stem: String, branch: String },

    /// Pillar of a calendar year
    Year { year: i32 },

    /// Four pillars, day-pillar attributes, decade cycle and interactions (JSON)
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },

    /// Decade luck cycle
    Daeun {
        #[command(flatten)]
        birth: BirthArgs,
    },

    /// Annual luck cycle
    Saeun {
        start: i32,
        count: usize,
        #[arg(long)]
        day_master: String,
    },

    /// Monthly luck cycle of a year
    Wolun {
        year: i32,
        #[arg(long)]
        day_master: String,
        /// Align month windows to solar terms
        #[arg(long)]
        solar_terms: bool,
    },

    /// Daily luck cycle of a month
    Iljin {
        year: i32,
        month: u8,
        #[arg(long)]
        day_master: String,
    },

    /// Branch interactions of a chart, optionally against a transit branch
    Interactions {
        #[arg(long)]
        year: String,
        #[arg(long)]
        month: String,
        #[arg(long)]
        day: String,
        #[arg(long)]
        hour: Option<String>,
        #[arg(long)]
        transit: Option<String>,
    },

    /// Score one target date for an event
    Score {
        #[arg(long)]
        event: String,
        #[command(flatten)]
        birth: BirthArgs,
        /// Target date, YYYY-MM-DD
        #[arg(long)]
        target: String,
        #[arg(long)]
        yongsin: Option<String>,
        #[arg(long)]
        kisin: Option<String>,
        /// JSON progression record from a chart provider
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Best days of a month for an event
    BestDays {
        #[arg(long)]
        event: String,
        #[command(flatten)]
        birth: BirthArgs,
        year: i32,
        month: u8,
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Validate birth data
    Validate {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, &cli.lang);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Pillar { stem, branch } => cmd_pillar(cli, stem, branch),
        Commands::Year { year } => cmd_year(cli, *year),
        Commands::Chart { birth } => cmd_chart(&config, birth),
        Commands::Daeun { birth } => cmd_daeun(cli, &config, birth),
        Commands::Saeun {
            start,
            count,
            day_master,
        } => cmd_saeun(cli, *start, *count, day_master),
        Commands::Wolun {
            year,
            day_master,
            solar_terms,
        } => cmd_wolun(cli, &config, *year, day_master, *solar_terms),
        Commands::Iljin {
            year,
            month,
            day_master,
        } => cmd_iljin(cli, *year, *month, day_master),
        Commands::Interactions {
            year,
            month,
            day,
            hour,
            transit,
        } => cmd_interactions(cli, year, month, day, hour.as_deref(), transit.as_deref()),
        Commands::Score {
            event,
            birth,
            target,
            yongsin,
            kisin,
            chart,
        } => cmd_score(
            cli,
            &config,
            ScoreArgs {
                event,
                birth,
                target,
                yongsin: yongsin.as_deref(),
                kisin: kisin.as_deref(),
                chart: chart.as_deref(),
            },
        ),
        Commands::BestDays {
            event,
            birth,
            year,
            month,
            top,
        } => cmd_best_days(cli, &config, event, birth, *year, *month, *top),
        Commands::Validate { birth } => cmd_validate(cli, &config, birth),
    }
}

fn report_error(err: &anyhow::Error, lang: &str) {
    match err.chain().find_map(|c| c.downcast_ref::<SajuError>()) {
        Some(saju) => {
            eprintln!("error: [{}] {}", saju.code, saju.localized(lang));
            for inner in &saju.errors {
                let field = inner.field.as_deref().unwrap_or("-");
                eprintln!("  {field}: [{}] {}", inner.code, inner.localized(lang));
            }
        }
        None => eprintln!("error: {err:#}"),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn day_master(input: &str) -> Result<Stem> {
    validate_stem(input).context("invalid --day-master")
}

fn branch_arg(input: &str, flag: &str) -> Result<Branch> {
    validate_branch(input).with_context(|| format!("invalid --{flag}"))
}

fn element_arg(input: Option<&str>, flag: &str) -> Result<Option<Element>> {
    input
        .map(|s| Element::parse(s).ok_or_else(|| anyhow!("invalid --{flag} '{s}': expected an element")))
        .transpose()
}

fn event_arg(input: &str) -> Result<EventType> {
    EventType::parse(input).ok_or_else(|| {
        anyhow!("unknown event '{input}': expected career, marriage, business, investment, moving or exam")
    })
}

fn birth_facts(config: &EngineConfig, birth: &BirthArgs) -> Result<BirthFacts> {
    Ok(validate_birth_data(&birth.input(), config)?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_pillar(cli: &Cli, stem: &str, branch: &str) -> Result<()> {
    let pillar = validate_pillar(stem, branch)?;
    if cli.json {
        return print_json(&pillar);
    }
    println!("{} {} {}", pillar.index(), pillar.hanja(), pillar.hangul());
    Ok(())
}

fn cmd_year(cli: &Cli, year: i32) -> Result<()> {
    let pillar = year_pillar(year);
    if cli.json {
        return print_json(&pillar);
    }
    println!("{year} {} {} #{}", pillar.hanja(), pillar.hangul(), pillar.index());
    Ok(())
}

#[derive(Serialize)]
struct ChartReport<'a> {
    birth: &'a BirthFacts,
    pillars: FourPillars,
    day_master: Stem,
    ilju: &'static IljuProfile,
    naeum: &'static Naeum,
    gongmang: [Branch; 2],
    daeun: DaeunCycle,
    interactions: HyeongchungAnalysis,
}

fn cmd_chart(config: &EngineConfig, birth: &BirthArgs) -> Result<()> {
    let facts = birth_facts(config, birth)?;
    let pillars = FourPillars::compute(&facts.moment, config.zi_hour);
    let (void_a, void_b) = gongmang(pillars.day);

    let report = ChartReport {
        birth: &facts,
        pillars,
        day_master: pillars.day_master(),
        ilju: ilju(pillars.day),
        naeum: naeum(pillars.day),
        gongmang: [void_a, void_b],
        daeun: daeun(Some(&facts.moment), Some(facts.gender), Some(&pillars)),
        interactions: analyze(&NatalBranches::from_pillars(&pillars)),
    };
    print_json(&report)
}

fn cmd_daeun(cli: &Cli, config: &EngineConfig, birth: &BirthArgs) -> Result<()> {
    let facts = birth_facts(config, birth)?;
    let pillars = FourPillars::compute(&facts.moment, config.zi_hour);
    let cycle = daeun(Some(&facts.moment), Some(facts.gender), Some(&pillars));
    if cli.json {
        return print_json(&cycle);
    }

    let direction = match cycle.direction {
        Some(saju_core::Direction::Forward) => "forward",
        Some(saju_core::Direction::Backward) => "backward",
        None => "-",
    };
    println!("daeunsu {} ({direction})", cycle.daeunsu);
    for e in &cycle.entries {
        println!(
            "{:>3}-{:<3} {} {} {}/{} {}",
            e.start_age,
            e.end_age,
            e.start_year,
            e.pillar.hanja(),
            e.sibsin.heavenly.hangul(),
            e.sibsin.earthly.hangul(),
            e.stage.hangul()
        );
    }
    Ok(())
}

fn cmd_saeun(cli: &Cli, start: i32, count: usize, dm: &str) -> Result<()> {
    let cycle = saeun(start, count, day_master(dm)?);
    if cli.json {
        return print_json(&cycle);
    }
    for e in &cycle {
        println!(
            "{} {} {}/{}",
            e.year,
            e.pillar.hanja(),
            e.sibsin.heavenly.hangul(),
            e.sibsin.earthly.hangul()
        );
    }
    Ok(())
}

fn cmd_wolun(cli: &Cli, config: &EngineConfig, year: i32, dm: &str, solar_terms: bool) -> Result<()> {
    let alignment = if solar_terms {
        MonthAlignment::SolarTerm
    } else {
        config.month_alignment
    };
    let cycle = wolun(year, day_master(dm)?, alignment);
    if cli.json {
        return print_json(&cycle);
    }
    for e in &cycle {
        println!(
            "{:>2} {} {}..{} {} {}/{}",
            e.month_index,
            e.pillar.hanja(),
            e.window.start,
            e.window.end,
            e.jie.hangul(),
            e.sibsin.heavenly.hangul(),
            e.sibsin.earthly.hangul()
        );
    }
    Ok(())
}

fn cmd_iljin(cli: &Cli, year: i32, month: u8, dm: &str) -> Result<()> {
    let cycle = iljin(year, month, day_master(dm)?);
    if cli.json {
        return print_json(&cycle);
    }
    for e in &cycle {
        let mark = if e.cheoneul { " 천을귀인" } else { "" };
        println!(
            "{} {} {}/{}{mark}",
            e.date,
            e.pillar.hanja(),
            e.sibsin.heavenly.hangul(),
            e.sibsin.earthly.hangul()
        );
    }
    Ok(())
}

fn cmd_interactions(
    cli: &Cli,
    year: &str,
    month: &str,
    day: &str,
    hour: Option<&str>,
    transit: Option<&str>,
) -> Result<()> {
    let natal = NatalBranches {
        year: branch_arg(year, "year")?,
        month: branch_arg(month, "month")?,
        day: branch_arg(day, "day")?,
        hour: hour.map(|h| branch_arg(h, "hour")).transpose()?,
    };
    let analysis = match transit {
        Some(t) => analyze_transit(&natal, branch_arg(t, "transit")?),
        None => analyze(&natal),
    };
    if cli.json {
        return print_json(&analysis);
    }

    for i in &analysis.interactions {
        let positions: Vec<&str> = i.positions.iter().map(|p| p.hangul()).collect();
        println!(
            "{} {} [{}] {}",
            i.kind.hangul(),
            i.glyphs(),
            positions.join(","),
            i.strength
        );
    }
    let s = &analysis.summary;
    println!(
        "total +{} / -{} net {:?} dominant {}",
        s.total_positive,
        s.total_negative,
        s.net_effect,
        s.dominant_interaction.map_or("-", |k| k.hangul())
    );
    for w in &analysis.warnings {
        println!("warning: {w}");
    }
    Ok(())
}

struct ScoreArgs<'a> {
    event: &'a str,
    birth: &'a BirthArgs,
    target: &'a str,
    yongsin: Option<&'a str>,
    kisin: Option<&'a str>,
    chart: Option<&'a Path>,
}

fn load_progression(path: &Path) -> Result<ProgressionContext> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chart {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid chart JSON {}", path.display()))
}

fn cmd_score(cli: &Cli, config: &EngineConfig, args: ScoreArgs<'_>) -> Result<()> {
    let event = event_arg(args.event)?;
    let facts = birth_facts(config, args.birth)?;
    let target = parse_date(args.target, config).context("invalid --target")?;

    let mut req = PredictionRequest::new(facts, target);
    req.zi_hour = config.zi_hour;
    req.yongsin = element_arg(args.yongsin, "yongsin")?;
    req.kisin = element_arg(args.kisin, "kisin")?;
    req.progression = args.chart.map(load_progression).transpose()?;

    let prediction = predict(event, &req);
    if cli.json {
        return print_json(&prediction);
    }

    let s = &prediction.standardized;
    println!(
        "{event} {target} {} {} ({} / {})",
        s.score, s.grade, s.label, s.label_en
    );
    for r in &prediction.result.reasons {
        println!("  + {r}");
    }
    for r in &prediction.result.avoid_reasons {
        println!("  - {r}");
    }
    Ok(())
}

fn cmd_best_days(
    cli: &Cli,
    config: &EngineConfig,
    event: &str,
    birth: &BirthArgs,
    year: i32,
    month: u8,
    top: usize,
) -> Result<()> {
    let event = event_arg(event)?;
    let facts = birth_facts(config, birth)?;
    let first = parse_date(&format!("{year:04}-{month:02}-01"), config).context("invalid year/month")?;

    let mut req = PredictionRequest::new(facts, first);
    req.zi_hour = config.zi_hour;
    let days = best_days(event, &req, year, month, top);
    if cli.json {
        return print_json(&days);
    }
    for p in &days {
        println!(
            "{} {} {} {}",
            p.date,
            p.context.day_pillar.hanja(),
            p.standardized.score,
            p.standardized.grade
        );
    }
    Ok(())
}

fn cmd_validate(cli: &Cli, config: &EngineConfig, birth: &BirthArgs) -> Result<()> {
    let report = try_validate_birth_data(&birth.input(), config);
    if cli.json {
        print_json(&report)?;
    } else if report.is_valid() {
        println!("valid");
    } else {
        for e in &report.errors {
            let field = e.field.as_deref().unwrap_or("-");
            println!("{field}: [{}] {}", e.code, e.localized(&cli.lang));
        }
    }
    if report.is_valid() {
        Ok(())
    } else {
        Err(SajuError::validation_failed(report.errors).into())
    }
}
