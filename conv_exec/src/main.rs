//! # Converter Executable
//!
//! Reads the output of a multi-agent pathfinding solver and writes, for every
//! agent, a file of relative movement commands:
//!
//!     - Load parameters (file, then command line overrides)
//!     - Extract the last table confirmed as a valid execution
//!     - Translate each agent's path into relative commands
//!     - Write `<output_base>-<agent>.txt` for each agent
//!
//! No command file is written unless a valid solution is found.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

// Internal
use conv_lib::{
    convert::convert,
    heading::{InitialHeading, TransitionTable},
    output,
    params::ConvExecParams,
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Convert MAPF solver output into per-agent robot commands.
#[derive(Debug, StructOpt)]
#[structopt(name = "conv_exec")]
struct Opts {
    /// Solver output to convert (overrides `input_path`)
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Parameter file to load instead of `params/conv_exec.toml`
    #[structopt(long, parse(from_os_str))]
    params: Option<PathBuf>,

    /// Whether the solver grid is double resolution and must be contracted, `true` or `false`
    #[structopt(long)]
    contract: Option<bool>,

    /// Initial heading of every agent, `left`, `top`, `right`, `bottom` or `detect`
    #[structopt(long)]
    heading: Option<InitialHeading>,

    /// Start each agent facing the direction of its first move (same as `--heading detect`)
    #[structopt(long, conflicts_with = "heading")]
    detect_heading: bool,

    /// Transition table to use, `legacy` or `rotational`
    #[structopt(long)]
    table: Option<TransitionTable>,

    /// Base name of the command files
    #[structopt(short, long)]
    output_base: Option<String>,

    /// Log at trace level
    #[structopt(short, long)]
    verbose: bool,
}

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("conv_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    let level = if opts.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    logger_init(level, &session).wrap_err("Failed to initialise logging")?;

    info!("MAPF Solution Converter\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params = load_params(&opts)?;

    info!("Parameters loaded");
    info!("    Input: {:?}", params.input_path);
    info!("    Output base: {}", params.output_base);
    info!("    Contract: {}", params.contract);
    info!("    Initial heading: {:?}", params.initial_heading);
    info!("    Transition table: {:?}", params.transition_table);

    // ---- CONVERT ----

    let text = fs::read_to_string(&params.input_path)
        .wrap_err_with(|| format!("Failed to read solver output {:?}", params.input_path))?;

    let heading = params.heading_params();
    let conversion = match convert(&text, params.contract, heading) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            session.exit();
            return Err(e).wrap_err("Conversion failed, no command files written");
        }
    };

    // ---- WRITE OUTPUT ----

    let outputs = output::write_all(&params.output_base, &conversion.agent_cmds());

    let num_agents = outputs.len();
    let num_failed = outputs.iter().filter(|o| o.error.is_some()).count();

    let summary = conversion.summarise(params.input_path.clone(), params.contract, heading, outputs);
    session.save("summary.json", summary);

    if num_failed > 0 {
        warn!("{} of {} command files could not be written", num_failed, num_agents);
    } else {
        info!("Conversion complete, {} command files written", num_agents);
    }

    session.exit();

    if num_failed > 0 {
        return Err(eyre!(
            "{} of {} command files could not be written",
            num_failed,
            num_agents
        ));
    }

    Ok(())
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Load the parameter file and apply command line overrides.
///
/// Without `--params` the file is `conv_exec.toml` in the software root's
/// `params` directory.
fn load_params(opts: &Opts) -> Result<ConvExecParams> {
    let params: ConvExecParams = match opts.params {
        Some(ref path) => util::params::load_from(path)
            .wrap_err_with(|| format!("Could not load parameters from {:?}", path))?,
        None => util::params::load("conv_exec.toml").wrap_err("Could not load parameters")?,
    };

    Ok(apply_overrides(params, opts))
}

/// Replace parameter values with those given on the command line.
fn apply_overrides(mut params: ConvExecParams, opts: &Opts) -> ConvExecParams {
    if let Some(ref input) = opts.input {
        params.input_path = input.clone();
    }
    if let Some(ref base) = opts.output_base {
        params.output_base = base.clone();
    }
    if let Some(contract) = opts.contract {
        params.contract = contract;
    }
    if let Some(heading) = opts.heading {
        params.initial_heading = heading;
    }
    if opts.detect_heading {
        params.initial_heading = InitialHeading::Detect;
    }
    if let Some(table) = opts.table {
        params.transition_table = table;
    }

    params
}
