//! Tri-state CA CLI - Run automata from JSON configuration.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use tristate_ca::{
    compute::{SpacetimeStats, parse_steps},
    schema::{AutomatonConfig, OutputFormat},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a tri-state cellular automaton from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration file");
        eprintln!("  steps        Number of steps (default: config value)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: AutomatonConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let steps = match args.get(2) {
        Some(s) => parse_steps(s).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => config.steps,
    };

    let mut engine = config.build_engine().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    log::info!(
        "rule {} table {:?} width {} steps {}",
        engine.rule(),
        engine.table().outputs(),
        engine.width(),
        steps
    );

    let start = Instant::now();
    if let Err(e) = engine.evolve(steps) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    log::info!("evolved in {:.3}s", start.elapsed().as_secs_f32());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = match &config.output {
        OutputFormat::Digits => write_rows(&mut out, engine.history(), &['0', '1', '2']),
        OutputFormat::Glyphs { glyphs } => write_rows(&mut out, engine.history(), glyphs),
        OutputFormat::Json => serde_json::to_writer(&mut out, &engine.record())
            .map_err(io::Error::from)
            .and_then(|_| writeln!(out)),
        OutputFormat::Summary => {
            let stats = SpacetimeStats::from_history(engine.history());
            write_summary(&mut out, &stats)
        }
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

fn write_rows<W: Write>(out: &mut W, history: &[Vec<u8>], glyphs: &[char; 3]) -> io::Result<()> {
    let mut line = String::new();
    for row in history {
        line.clear();
        line.extend(row.iter().map(|&v| glyphs[v as usize]));
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, stats: &SpacetimeStats) -> io::Result<()> {
    writeln!(out, "Tri-state CA Run")?;
    writeln!(out, "================")?;
    writeln!(out, "Width: {}", stats.width)?;
    writeln!(out, "Generations: {}", stats.generations)?;
    writeln!(out, "Initial counts (0/1/2): {:?}", stats.initial_counts)?;
    writeln!(out, "Final counts (0/1/2): {:?}", stats.final_counts)?;
    writeln!(out, "Final activity: {:.2}%", stats.final_activity() * 100.0)?;
    match stats.cycle {
        Some(cycle) => writeln!(
            out,
            "Cycle: period {} entered at generation {}",
            cycle.period, cycle.start
        ),
        None => writeln!(out, "Cycle: none within history"),
    }
}

fn print_example_config() {
    let config = AutomatonConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}
