use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use fc_core::{Quantity, parse_quantity};
use fc_thermo::{
    FixedChemPotPhase, PropertySnapshot, ThermoPhase, ThermoResult, parse_chemical_potential,
};

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(about = "Fixed chemical potential phases - build, inspect and export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a phase document and print its properties
    Show {
        /// Path to the phase document (YAML or JSON)
        document: PathBuf,
        /// Phase id (defaults to the first phase)
        #[arg(long)]
        phase: Option<String>,
        /// Temperature, e.g. "500 K" or "25 C"
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<String>,
        /// Pressure, e.g. "2 bar"
        #[arg(long)]
        pressure: Option<String>,
    },
    /// Build a phase from an element symbol and print its properties
    Element {
        /// Element symbol, e.g. Na
        symbol: String,
        /// Chemical potential, e.g. "-261 kJ/mol" (bare numbers are J/mol)
        #[arg(allow_hyphen_values = true)]
        chem_pot: String,
        /// Temperature, e.g. "500 K"
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<String>,
    },
    /// Build a phase from an element symbol and write it as a document
    Export {
        /// Element symbol, e.g. Na
        symbol: String,
        /// Chemical potential, e.g. "-261 kJ/mol" (bare numbers are J/mol)
        #[arg(allow_hyphen_values = true)]
        chem_pot: String,
        /// Output path; `.json` writes JSON, anything else YAML
        output: PathBuf,
    },
    /// Validate phase document syntax and structure
    Validate {
        /// Path to the phase document (YAML or JSON)
        document: PathBuf,
    },
}

fn main() -> ThermoResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            document,
            phase,
            temperature,
            pressure,
        } => cmd_show(
            &document,
            phase.as_deref(),
            temperature.as_deref(),
            pressure.as_deref(),
        ),
        Commands::Element {
            symbol,
            chem_pot,
            temperature,
        } => cmd_element(&symbol, &chem_pot, temperature.as_deref()),
        Commands::Export {
            symbol,
            chem_pot,
            output,
        } => cmd_export(&symbol, &chem_pot, &output),
        Commands::Validate { document } => cmd_validate(&document),
    }
}

fn cmd_show(
    document: &Path,
    phase_id: Option<&str>,
    temperature: Option<&str>,
    pressure: Option<&str>,
) -> ThermoResult<()> {
    let mut phase = FixedChemPotPhase::from_file(document, phase_id)?;
    if let Some(t) = temperature {
        phase.set_temperature(parse_quantity(t, Quantity::Temperature)?)?;
    }
    if let Some(p) = pressure {
        phase.set_pressure(parse_quantity(p, Quantity::Pressure)?);
    }
    print_phase(&phase);
    Ok(())
}

fn cmd_element(symbol: &str, chem_pot: &str, temperature: Option<&str>) -> ThermoResult<()> {
    let mut phase = FixedChemPotPhase::from_element(symbol, parse_chemical_potential(chem_pot)?)?;
    if let Some(t) = temperature {
        phase.set_temperature(parse_quantity(t, Quantity::Temperature)?)?;
    }
    print_phase(&phase);
    Ok(())
}

fn cmd_export(symbol: &str, chem_pot: &str, output: &Path) -> ThermoResult<()> {
    let phase = FixedChemPotPhase::from_element(symbol, parse_chemical_potential(chem_pot)?)?;
    fc_project::save(output, &phase.to_document()?)?;
    println!("✓ Wrote {} to {}", phase.id(), output.display());
    Ok(())
}

fn cmd_validate(document: &Path) -> ThermoResult<()> {
    println!("Validating document: {}", document.display());
    let doc = fc_project::load(document)?;
    println!("✓ Document is valid");
    for phase in &doc.phases {
        let model = phase
            .thermo
            .as_ref()
            .map(|t| t.model.as_str())
            .unwrap_or("<none>");
        println!(
            "  {} - {} ({} species, model {})",
            phase.id,
            phase.display_name(),
            phase.species.len(),
            model
        );
    }
    Ok(())
}

fn print_phase(phase: &FixedChemPotPhase) {
    let snapshot = PropertySnapshot::capture(phase);
    tracing::debug!("{}", snapshot.summary());

    println!("Phase: {} ({})", phase.name(), snapshot.eos_type);
    println!("  Temperature: {:.2} K", snapshot.temperature);
    println!("  Pressure: {:.1} Pa", snapshot.pressure);
    println!("  Molecular weight: {:.4} kg/kmol", phase.molecular_weight());
    println!("  Chemical potential: {:.3} J/mol", phase.chemical_potential());
    println!("  Compressibility: {} 1/Pa", snapshot.isothermal_compressibility);
    println!("  Expansion coefficient: {} 1/K", snapshot.thermal_expansion_coeff);
    for (label, values) in snapshot.rows() {
        let text: Vec<String> = values.iter().map(|v| format!("{:.6e}", v)).collect();
        println!("  {:<36} {}", label, text.join(" "));
    }
}
