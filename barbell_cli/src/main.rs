use barbell_core::{default_catalog, Barbell, Config, Error, Result, WeightUnit};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barload")]
#[command(about = "Barbell plate loading calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the total weight of a loaded bar (default)
    Total {
        /// Bar weight (defaults to the configured bar)
        #[arg(long, allow_negative_numbers = true)]
        bar: Option<f64>,

        /// Unit the bar weight is expressed in
        #[arg(long)]
        bar_unit: Option<String>,

        /// Plate on one side of the bar (repeatable)
        #[arg(long = "plate")]
        plates: Vec<f64>,

        /// Unit the plates are denominated in
        #[arg(long)]
        plate_unit: Option<String>,

        /// Unit to report the total in
        #[arg(long, default_value = "kg")]
        unit: String,
    },

    /// Load plates to approach a target weight without exceeding it
    Fill {
        /// Target total weight
        #[arg(allow_negative_numbers = true)]
        target: f64,

        /// Unit the target is expressed in
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Bar weight (defaults to the configured bar)
        #[arg(long, allow_negative_numbers = true)]
        bar: Option<f64>,

        /// Unit the bar weight is expressed in
        #[arg(long)]
        bar_unit: Option<String>,

        /// Plate already on the bar (repeatable)
        #[arg(long = "plate")]
        plates: Vec<f64>,

        /// Unit of the plates to attach and load
        #[arg(long)]
        plate_unit: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the plate denominations the catalog knows about
    Plates,
}

fn main() -> Result<()> {
    // Initialize logging
    barbell_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let errors = default_catalog().validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("invalid plate catalog".into()));
    }

    match cli.command {
        Some(Commands::Total {
            bar,
            bar_unit,
            plates,
            plate_unit,
            unit,
        }) => cmd_total(&config, bar, bar_unit, &plates, plate_unit, &unit),
        Some(Commands::Fill {
            target,
            unit,
            bar,
            bar_unit,
            plates,
            plate_unit,
            json,
        }) => cmd_fill(&config, target, &unit, bar, bar_unit, &plates, plate_unit, json),
        Some(Commands::Plates) => {
            cmd_plates();
            Ok(())
        }
        None => {
            // Default to showing the configured bar's total
            cmd_total(&config, None, None, &[], None, "kg")
        }
    }
}

fn cmd_total(
    config: &Config,
    bar: Option<f64>,
    bar_unit: Option<String>,
    plates: &[f64],
    plate_unit: Option<String>,
    unit: &str,
) -> Result<()> {
    let unit: WeightUnit = unit.parse()?;
    let plate_unit = match plate_unit.as_deref() {
        Some(token) => Some(token.parse()?),
        None => None,
    };
    let barbell = build_barbell(config, bar, bar_unit, plates, plate_unit)?;

    for plate in barbell.attached_plates() {
        println!("  - {} (x2)", plate);
    }
    println!("Total: {} {}", rounded(barbell.total_weight(unit)), unit);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_fill(
    config: &Config,
    target: f64,
    unit: &str,
    bar: Option<f64>,
    bar_unit: Option<String>,
    plates: &[f64],
    plate_unit: Option<String>,
    json: bool,
) -> Result<()> {
    let target_unit: WeightUnit = unit.parse()?;
    let fill_unit = parse_unit_or(plate_unit.as_deref(), config.fill.plate_unit)?;
    let mut barbell = build_barbell(config, bar, bar_unit, plates, Some(fill_unit))?;

    let added = barbell.fill_to_target(target, target_unit, fill_unit);
    tracing::debug!(
        "fill command added {} {} plates towards {} {}",
        added.len(),
        fill_unit,
        target,
        target_unit
    );

    if json {
        let payload = serde_json::json!({
            "target": { "weight": target, "unit": target_unit },
            "added_plates": added,
            "plate_count": added.len(),
            "total": {
                "kilograms": rounded(barbell.total_weight(WeightUnit::Kilograms)),
                "pounds": rounded(barbell.total_weight(WeightUnit::Pounds)),
            },
        });
        println!("{}", payload);
        return Ok(());
    }

    if added.is_empty() {
        println!("No plates added (target already met).");
    } else {
        println!("Added plates (per side):");
        for plate in &added {
            println!("  - {}", plate);
        }
    }
    println!(
        "Total: {} {} ({} {})",
        rounded(barbell.total_weight(target_unit)),
        target_unit,
        rounded(barbell.total_weight(other_unit(target_unit))),
        other_unit(target_unit)
    );

    Ok(())
}

fn cmd_plates() {
    let catalog = default_catalog();
    for unit in [WeightUnit::Kilograms, WeightUnit::Pounds] {
        println!("Available {} plates:", unit);
        for spec in catalog.denominations(unit) {
            println!("  {:>6} {}  [{}]", spec.weight, unit, spec.image);
        }
    }
}

/// Build the starting barbell from CLI arguments, falling back to the
/// configured defaults.
fn build_barbell(
    config: &Config,
    bar: Option<f64>,
    bar_unit: Option<String>,
    plates: &[f64],
    plate_unit: Option<WeightUnit>,
) -> Result<Barbell> {
    let bar_unit = parse_unit_or(bar_unit.as_deref(), config.barbell.unit)?;
    let bar_weight = bar.unwrap_or(config.barbell.weight);
    let mut barbell = Barbell::new(bar_weight, bar_unit)?;

    let plate_unit = plate_unit.unwrap_or(config.fill.plate_unit);
    for &weight in plates {
        barbell.add_plate(weight, plate_unit)?;
    }

    Ok(barbell)
}

fn parse_unit_or(arg: Option<&str>, fallback: WeightUnit) -> Result<WeightUnit> {
    match arg {
        Some(token) => token.parse(),
        None => Ok(fallback),
    }
}

fn other_unit(unit: WeightUnit) -> WeightUnit {
    match unit {
        WeightUnit::Kilograms => WeightUnit::Pounds,
        WeightUnit::Pounds => WeightUnit::Kilograms,
    }
}

/// Round to two decimals for display; totals stay floats internally.
fn rounded(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}
