use clap::{Parser, Subcommand};
use ent_project::{CaseDef, ProjectResult, ReportDef, load_case, run_case};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ent-cli")]
#[command(about = "Liquid entrainment fraction in annular gas-liquid pipe flow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Compute the entrainment fraction for a case
    Run {
        /// Path to the case file (YAML or JSON); the reference case if omitted
        case_path: Option<PathBuf>,
        /// Print the report as JSON instead of a narrated summary
        #[arg(long)]
        json: bool,
    },
    /// Print the reference case as YAML
    Reference,
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Run { case_path, json } => cmd_run(case_path.as_deref(), json),
        Commands::Reference => cmd_reference(),
    }
}

fn cmd_validate(case_path: &Path) -> ProjectResult<()> {
    println!("Validating case: {}", case_path.display());
    load_case(case_path)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_run(case_path: Option<&Path>, json: bool) -> ProjectResult<()> {
    let case = match case_path {
        Some(path) => load_case(path)?,
        None => CaseDef::reference(),
    };
    tracing::info!(case = case.name.as_deref().unwrap_or("<unnamed>"), "running case");

    let report = run_case(&case)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn cmd_reference() -> ProjectResult<()> {
    print!("{}", serde_yaml::to_string(&CaseDef::reference())?);
    Ok(())
}

fn print_report(report: &ReportDef) {
    let rule = "-".repeat(40);

    if let Some(name) = &report.name {
        println!("Case: {name}");
    }
    println!("{rule}");
    println!("Drop diameter (d):           {:.6} m", report.droplet_diameter);
    println!("{rule}");
    if report.converged {
        println!("Converged after {} iterations.", report.iterations);
    } else {
        println!(
            "Warning: did not converge within {} iterations.",
            report.iterations
        );
    }
    println!("Reynolds number (Re_p):      {:.6}", report.reynolds_number);
    println!("Drag coefficient (Cd):       {:.6}", report.drag_coefficient);
    println!(
        "Exponent (m):                {:.6} ({})",
        report.regime_exponent, report.regime
    );
    println!("{rule}");
    println!("Omega (ω):                   {:.6}", report.omega);
    println!("Re_LFC:                      {:.6}", report.critical_reynolds);
    println!("E_M:                         {:.6}", report.onset_fraction);
    println!("{rule}");
    println!("Entrainment fraction (E):    {:.6}", report.entrainment_fraction);

    for warning in &report.warnings {
        println!("Warning: {warning}");
    }
}
