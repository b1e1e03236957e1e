use clap::{Args, Parser, Subcommand};
use tracing::info;

use arbiter_core::rng::Mulberry32;
use arbiter_sim::{simulate_hybrid, simulate_logistic, simulate_opposed};

#[derive(Parser)]
#[command(name = "arbiter", version, about = "Monte Carlo simulation of tabletop skill checks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate d20 hybrid checks (skill + modifiers vs DC, crit/fumble rules)
    Hybrid(HybridArgs),
    /// Simulate logistic (probability-based, diceless) checks
    Logistic(LogisticArgs),
    /// Simulate opposed roll-offs between attacker and defender
    Opposed(OpposedArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Number of Monte Carlo trials
    #[arg(short = 'n', long, default_value_t = 100_000)]
    pub iterations: u32,
    /// RNG seed; omit for a fresh entropy-derived seed (echoed on stderr)
    #[arg(short, long)]
    pub seed: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct HybridArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Skill value added to each roll
    #[arg(long, default_value_t = 5)]
    pub skill: i32,
    /// Situational modifiers added to each roll
    #[arg(long, default_value_t = 0)]
    pub mods: i32,
    /// Difficulty class each total must meet or exceed
    #[arg(long, default_value_t = 15)]
    pub dc: i32,
}

#[derive(Args, Debug, Clone)]
pub struct LogisticArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Skill value
    #[arg(long, default_value_t = 5)]
    pub skill: i32,
    /// Situational modifiers
    #[arg(long, default_value_t = 0)]
    pub mods: i32,
    /// Difficulty class
    #[arg(long, default_value_t = 15)]
    pub dc: i32,
    /// Steepness of the logistic success curve
    #[arg(long, default_value_t = 0.5)]
    pub k: f64,
}

#[derive(Args, Debug, Clone)]
pub struct OpposedArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Attacker skill
    #[arg(long, default_value_t = 5)]
    pub att_skill: i32,
    /// Attacker modifiers
    #[arg(long, default_value_t = 0)]
    pub att_mods: i32,
    /// Defender skill
    #[arg(long, default_value_t = 4)]
    pub def_skill: i32,
    /// Defender modifiers
    #[arg(long, default_value_t = 0)]
    pub def_mods: i32,
}

fn rng_for(common: &CommonArgs) -> Mulberry32 {
    match common.seed {
        Some(seed) => Mulberry32::new(seed),
        None => Mulberry32::from_entropy(),
    }
}

/// Execute the parsed command, printing the aggregate result as pretty JSON
/// on stdout.
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Hybrid(args) => {
            let mut rng = rng_for(&args.common);
            info!(
                seed = rng.seed(),
                iterations = args.common.iterations,
                skill = args.skill,
                mods = args.mods,
                dc = args.dc,
                "running hybrid simulation"
            );
            let result = simulate_hybrid(
                &mut rng,
                args.common.iterations,
                args.skill,
                args.mods,
                args.dc,
            )?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Logistic(args) => {
            let mut rng = rng_for(&args.common);
            info!(
                seed = rng.seed(),
                iterations = args.common.iterations,
                skill = args.skill,
                mods = args.mods,
                dc = args.dc,
                k = args.k,
                "running logistic simulation"
            );
            let result = simulate_logistic(
                &mut rng,
                args.common.iterations,
                args.skill,
                args.mods,
                args.dc,
                args.k,
            )?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Opposed(args) => {
            let mut rng = rng_for(&args.common);
            info!(
                seed = rng.seed(),
                iterations = args.common.iterations,
                att_skill = args.att_skill,
                att_mods = args.att_mods,
                def_skill = args.def_skill,
                def_mods = args.def_mods,
                "running opposed simulation"
            );
            let result = simulate_opposed(
                &mut rng,
                args.common.iterations,
                args.att_skill,
                args.att_mods,
                args.def_skill,
                args.def_mods,
            )?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
