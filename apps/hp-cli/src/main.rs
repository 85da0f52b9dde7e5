use clap::{Parser, Subcommand, ValueEnum};
use hp_app::{
    AppResult, AuditRequest, Engine, EngineConfig, ExpertRequest, HmtRequest, NpshdRequest,
    PerformanceRequest, load_config, load_document,
};
use hp_results::CalculationKind;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hp-cli")]
#[command(about = "Hydropump CLI - pump sizing and diagnostic calculator", long_about = None)]
struct Cli {
    /// Engine configuration file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record the calculation in the history directory
    #[arg(long, global = true)]
    save: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Available NPSH at the pump inlet and cavitation risk
    Npshd {
        /// Request document (YAML or JSON)
        request: PathBuf,
    },
    /// Total dynamic head of an installation
    Hmt {
        /// Request document (YAML or JSON)
        request: PathBuf,
    },
    /// Powers, current, electrical sizing and curves at a duty point
    Performance {
        /// Request document (YAML or JSON)
        request: PathBuf,
    },
    /// Full analysis with prioritized recommendations
    Expert {
        /// Request document (YAML or JSON)
        request: PathBuf,
    },
    /// Score an installed pump from field measurements
    Audit {
        /// Request document (YAML or JSON)
        request: PathBuf,
    },
    /// List the supported fluids
    Fluids,
    /// List pipe materials
    Materials {
        /// Annotate each material with its compatibility with this fluid
        #[arg(long)]
        fluid: Option<String>,
    },
    /// List fitting loss coefficients
    Fittings,
    /// List solar irradiation regions
    SolarRegions,
    /// Browse saved calculations
    #[command(subcommand)]
    History(HistoryCommands),
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List saved calculations, oldest first
    List {
        /// Only show one kind of calculation
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Print a saved calculation
    Show {
        /// Record id or unique prefix
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Npshd,
    Hmt,
    Performance,
    Expert,
    Audit,
}

impl From<KindArg> for CalculationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Npshd => CalculationKind::Npshd,
            KindArg::Hmt => CalculationKind::Hmt,
            KindArg::Performance => CalculationKind::Performance,
            KindArg::Expert => CalculationKind::Expert,
            KindArg::Audit => CalculationKind::Audit,
        }
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let needs_history = cli.save || matches!(cli.command, Commands::History(_));
    let engine = if needs_history {
        Engine::with_history(config)?
    } else {
        Engine::new(config)
    };

    match cli.command {
        Commands::Npshd { request } => {
            let req: NpshdRequest = load_document(&request)?;
            print_json(&engine.npshd(&req)?)
        }
        Commands::Hmt { request } => {
            let req: HmtRequest = load_document(&request)?;
            print_json(&engine.hmt(&req)?)
        }
        Commands::Performance { request } => {
            let req: PerformanceRequest = load_document(&request)?;
            print_json(&engine.performance(&req)?)
        }
        Commands::Expert { request } => {
            let req: ExpertRequest = load_document(&request)?;
            print_json(&engine.expert(&req)?)
        }
        Commands::Audit { request } => {
            let req: AuditRequest = load_document(&request)?;
            print_json(&engine.audit(&req)?)
        }
        Commands::Fluids => print_json(&hp_app::fluids()),
        Commands::Materials { fluid } => print_json(&hp_app::pipe_materials(fluid.as_deref())?),
        Commands::Fittings => print_json(&hp_app::fittings()),
        Commands::SolarRegions => print_json(&hp_app::solar_region_list()),
        Commands::History(HistoryCommands::List { kind }) => cmd_history_list(&engine, kind),
        Commands::History(HistoryCommands::Show { id }) => {
            print_json(&engine.show_history(&id)?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_history_list(engine: &Engine, kind: Option<KindArg>) -> AppResult<()> {
    let records = engine.list_history(kind.map(CalculationKind::from))?;
    let dir = engine
        .history()
        .map_or_else(|| Path::new("-").to_path_buf(), |s| s.root_dir().to_path_buf());

    if records.is_empty() {
        println!("No saved calculations in {}", dir.display());
    } else {
        println!("Saved calculations in {}:", dir.display());
        for record in records {
            println!(
                "  {}  {:<12} {}",
                &record.id[..12.min(record.id.len())],
                record.kind.label(),
                record.timestamp
            );
        }
    }
    Ok(())
}
