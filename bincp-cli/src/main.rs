use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use bincp::encoder::encode_and_solve;
use bincp::io::{export, import, select_instance};
use bincp::solver::PumpkinBackend;
use bincp_cli::config::CliConfig;
use bincp_cli::io::cli::Cli;
use bincp_cli::io::layout_to_svg::layout_to_svg;
use bincp_cli::io::output::BPOutput;
use bincp_cli::{EPOCH, io};
use clap::Parser as ClapParser;
use log::{error, info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    main_bpp(args).inspect_err(|e| error!("[MAIN] {e:#}"))
}

fn main_bpp(args: Cli) -> Result<()> {
    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(max_bins) = args.max_bins {
        config.encoder.max_bins = max_bins;
    }
    if let Some(params) = &args.params {
        config.solver = config
            .solver
            .with_overlay(params)
            .context("invalid solver parameters")?;
    }
    info!("[MAIN] successfully parsed config: {config:?}");

    let instance_set = io::read_instance_set(&args.input_file)?;
    let ext_instance = select_instance(&instance_set, args.instance)?;
    let instance = import(ext_instance)?;
    info!(
        "[MAIN] successfully loaded instance {:?} ({}/{}) with {} items",
        ext_instance.name,
        args.instance,
        instance_set.instances.len(),
        instance.n_items()
    );

    let (model, response) =
        encode_and_solve(&instance, &config.encoder, &config.solver, &PumpkinBackend)?;
    let solution = model.decode(&instance, &response);

    match solution.has_solution() {
        true => info!(
            "[MAIN] {}: {} bins used (lower bound {}), density {:.3}%",
            solution.status,
            solution.n_bins(),
            model.lower_bound,
            solution.density(&instance) * 100.0
        ),
        false => warn!(
            "[MAIN] {}: no packing found within {} bins",
            solution.status, model.n_slots
        ),
    }

    let Some(solution_folder) = &args.solution_folder else {
        return Ok(());
    };
    if !solution_folder.exists() {
        fs::create_dir_all(solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                solution_folder.display()
            )
        })?;
    }
    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("instance");
    let output_stem = format!("sol_{input_stem}_{}", args.instance);

    {
        let output = BPOutput {
            instance: ext_instance.clone(),
            solution: export(&instance, &model, &solution, EPOCH.elapsed().as_secs_f64()),
            config: config.clone(),
        };
        let solution_path = solution_folder.join(format!("{output_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for layout in &solution.layouts {
        let svg_path = solution_folder.join(format!("{output_stem}_{}.svg", layout.slot));
        let svg = layout_to_svg(
            layout,
            &instance,
            config.svg_draw_options,
            &ext_instance.name,
        );
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
