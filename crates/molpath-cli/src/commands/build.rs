use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use molpath::core::io::export::write_graph;
use molpath::core::io::molfile::load_molecule;
use molpath::core::oracles::chemistry::ElementPropertyOracle;
use molpath::graphs::config::GraphConfig;
use molpath::graphs::error::GraphError;
use molpath::workflows::path_complex;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: BuildArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(?config, "Resolved pipeline configuration.");

    std::fs::create_dir_all(&args.output)?;

    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
    )
    .map_err(|e| CliError::Config(format!("invalid progress template: {e}")))?;
    let progress = ProgressBar::new(args.input.len() as u64).with_style(style);

    let chemistry = ElementPropertyOracle::new();
    let mut built = 0usize;
    let mut skipped = 0usize;
    let mut without_torsions = 0usize;

    for input in &args.input {
        let label = molecule_label(input);
        progress.set_message(label.clone());

        let file = load_molecule(input)?;
        let result = path_complex::run(&file.molecule, &file.geometry, &chemistry, &config);
        let complex = match result {
            Ok(complex) => complex,
            Err(error @ (GraphError::TooLarge { .. } | GraphError::Embedding { .. })) => {
                warn!(molecule = %label, %error, "Skipping molecule.");
                skipped += 1;
                progress.inc(1);
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        let molecule_dir = args.output.join(&label);
        std::fs::create_dir_all(&molecule_dir)?;
        write_graph(complex.atom_bond.graph(), &molecule_dir, "atom_bond")?;
        write_graph(complex.bond_angle.graph(), &molecule_dir, "bond_angle")?;
        match &complex.dihedral {
            Some(dihedral) => write_graph(dihedral.graph(), &molecule_dir, "dihedral")?,
            None => {
                info!(molecule = %label, "No qualifying torsion; dihedral CSVs omitted.");
                without_torsions += 1;
            }
        }

        built += 1;
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "Built {built} molecule(s) into '{}' ({skipped} skipped, {without_torsions} without torsions).",
        args.output.display()
    );
    Ok(())
}

fn resolve_config(args: &BuildArgs) -> Result<GraphConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| CliError::Config(format!("'{}': {e}", path.display())))?
        }
        None => GraphConfig::default(),
    };

    if let Some(scheme) = &args.atom_scheme {
        config.atom_scheme = scheme.clone();
    }
    if let Some(mode) = &args.triangle_mode {
        config.triangle_mode = mode
            .parse()
            .map_err(|e| CliError::Argument(format!("{e}")))?;
    }
    if let Some(mode) = &args.dihedral_mode {
        config.dihedral_mode = mode
            .parse()
            .map_err(|e| CliError::Argument(format!("{e}")))?;
    }
    if let Some(cutoff) = args.cutoff {
        if cutoff <= 0.0 {
            return Err(CliError::Argument(format!(
                "cutoff must be positive, got {cutoff}"
            )));
        }
        config.cutoff = cutoff;
    }
    if let Some(max_atoms) = args.max_atoms {
        config.max_atoms = max_atoms;
    }
    Ok(config)
}

fn molecule_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("molecule")
        .to_string()
}
