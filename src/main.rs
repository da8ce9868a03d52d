//! Solar sizing CLI — scenario loading, validation, and report printing.

use std::path::Path;
use std::process;

use pv_sizer::catalog::{ApplianceCatalog, Catalogs};
use pv_sizer::engine;
use pv_sizer::io::export::{export_appliances_csv, export_production_csv};
use pv_sizer::scenario::SiteScenario;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    production_out: Option<String>,
    appliances_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("pv-sizer — household PV sizing and economics estimator");
    eprintln!();
    eprintln!("Usage: pv-sizer [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load a site scenario from a TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (apartment, family_home, offgrid_farm)");
    eprintln!("  --production-out <path>  Export the monthly production series to CSV");
    eprintln!("  --appliances-out <path>  Export the appliance breakdown to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the REST API server instead of printing a report");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the family_home preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        production_out: None,
        appliances_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--production-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --production-out requires a path argument");
                    process::exit(1);
                }
                cli.production_out = Some(args[i].clone());
            }
            "--appliances-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --appliances-out requires a path argument");
                    process::exit(1);
                }
                cli.appliances_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load the scenario: --scenario takes priority, then --preset, then the
    // family_home default.
    let scenario = if let Some(ref path) = cli.scenario_path {
        match SiteScenario::from_toml_file(Path::new(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match SiteScenario::from_preset(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        SiteScenario::family_home()
    };

    // Resolve partial appliance entries against the shipped catalog.
    let defaults = ApplianceCatalog::lebanese_household();
    let (profile, appliances) = match scenario.resolve(&defaults) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // Screen the inputs before calculating.
    let issues = engine::validate(&profile, &appliances);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{issue}");
        }
        process::exit(1);
    }

    let catalogs = Catalogs::lebanon();
    let bundle = match engine::calculate(&profile, &appliances, &catalogs) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(pv_sizer::api::AppState {
            catalogs,
            appliance_defaults: defaults,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("error: failed to create tokio runtime: {e}");
                process::exit(1);
            }
        };
        rt.block_on(pv_sizer::api::serve(state, addr));
        return;
    }

    // Print the full report.
    println!("{bundle}");

    // Export CSVs if requested.
    if let Some(ref path) = cli.production_out {
        if let Err(e) = export_production_csv(&bundle.monthly_production, Path::new(path)) {
            eprintln!("error: failed to write production CSV: {e}");
            process::exit(1);
        }
        eprintln!("Production series written to {path}");
    }
    if let Some(ref path) = cli.appliances_out {
        if let Err(e) = export_appliances_csv(&bundle.appliances, Path::new(path)) {
            eprintln!("error: failed to write appliance CSV: {e}");
            process::exit(1);
        }
        eprintln!("Appliance breakdown written to {path}");
    }
}
