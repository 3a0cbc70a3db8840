// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for driving agents through their decision
// hooks on a fixture board.
// ═══════════════════════════════════════════════════════════════════════

use catan_agents::{Agent, GeneCategory, GeneProfile, GeneWeights, RandomAgent, StrategyAgent};
use catan_engine::materials::{Hand, Materials};
use catan_engine::trade::TradeOffer;
use catan_engine::types::PlayerId;
use catan_engine::StaticBoard;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(name = "catan-runner", about = "Catan Strategy Lab")]
struct Cli {
    /// Optional JSON gene-weight file for the strategy agent
    #[arg(short, long)]
    genes: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk one agent through every decision hook on the demo board
    Demo {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Agent type: "strategy" or "random"
        #[arg(short, long, default_value = "strategy")]
        agent: String,
    },
    /// Print empirical gene-sampling frequencies against the weights
    Sample {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 10_000)]
        draws: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let genes = match load_genes(cli.genes.as_deref()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Gene configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Demo { seed, agent } => cmd_demo(seed, &agent, genes),
        Commands::Sample { seed, draws } => cmd_sample(seed, draws, &genes),
    }
}

fn load_genes(path: Option<&str>) -> Result<GeneProfile, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)?;
            let weights: GeneWeights = serde_json::from_str(&raw)?;
            Ok(GeneProfile::new(weights)?)
        }
        None => Ok(GeneProfile::default_profile()),
    }
}

/// The two demo-able agents behind one seam: hooks through `as_agent`,
/// hand grants through `hand_mut`.
enum DemoAgent {
    Strategy(StrategyAgent),
    Random(RandomAgent),
}

impl DemoAgent {
    fn new(kind: &str, player: PlayerId, seed: u64, genes: GeneProfile) -> DemoAgent {
        match kind {
            "random" => DemoAgent::Random(RandomAgent::new(player, seed)),
            _ => DemoAgent::Strategy(StrategyAgent::with_genes(player, seed, genes)),
        }
    }

    fn as_agent(&mut self) -> &mut dyn Agent {
        match self {
            DemoAgent::Strategy(a) => a,
            DemoAgent::Random(a) => a,
        }
    }

    fn hand_mut(&mut self) -> &mut Hand {
        match self {
            DemoAgent::Strategy(a) => a.hand_mut(),
            DemoAgent::Random(a) => a.hand_mut(),
        }
    }
}

fn cmd_demo(seed: u64, agent_type: &str, genes: GeneProfile) {
    println!("=== Catan Strategy Lab ===\n");
    println!("Running demo: seed={}, agent={}\n", seed, agent_type);

    let me = PlayerId(0);
    let opponent = PlayerId(1);
    let board = StaticBoard::demo(me, opponent);
    let mut agent = DemoAgent::new(agent_type, me, seed, genes);

    match agent.as_agent().on_game_start(&board) {
        Some((node, road_to)) => {
            println!("Opening placement: settlement at node {}, road to node {}", node.0, road_to.0)
        }
        None => println!("Opening placement: no legal starting node"),
    }

    // Simulate a few rounds of dice income, then build
    agent.hand_mut().receive(&Materials::from_counts(1, 0, 2, 2, 1));
    println!("Hand after income: {} cards", agent.hand_mut().total());
    match agent.as_agent().on_build_phase(&board) {
        Some(action) => println!("Build decision: {:?}", action),
        None => println!("Build decision: pass"),
    }

    match agent.as_agent().on_commerce_phase() {
        Some(offer) => println!("Commerce proposal: {}", format_offer(&offer)),
        None => println!("Commerce proposal: none"),
    }

    let incoming = TradeOffer::new(
        Materials::from_counts(0, 0, 2, 0, 0),
        Materials::from_counts(0, 0, 1, 0, 0),
    );
    let response = agent.as_agent().on_trade_offer(&board, &incoming, opponent);
    println!("Incoming offer ({}): {:?}", format_offer(&incoming), response);

    let thief = agent.as_agent().on_moving_thief();
    match thief.steal_from {
        Some(victim) => println!("Thief move: tile {}, stealing from {}", thief.tile.0, victim),
        None => println!("Thief move: tile {}, no theft", thief.tile.0),
    }

    // Overfill the hand and trigger the discard hook
    agent.hand_mut().receive(&Materials::from_counts(2, 2, 2, 2, 2));
    match agent.as_agent().on_having_more_than_seven_materials() {
        Some(kept) => println!("Discard on seven: keeps {} cards", kept.total()),
        None => println!("Discard on seven: left to the director"),
    }
}

fn format_offer(offer: &TradeOffer) -> String {
    let side = |m: &Materials| {
        m.iter()
            .filter(|&(_, c)| c > 0)
            .map(|(r, c)| format!("{} {}", c, r))
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("gives {} for {}", side(&offer.gives), side(&offer.receives))
}

fn cmd_sample(seed: u64, draws: u32, genes: &GeneProfile) {
    println!("=== Gene sampling: {} draws, seed {} ===\n", draws, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for category in GeneCategory::ALL {
        let mut counts = vec![0u32; genes.len(category)];
        for _ in 0..draws {
            counts[genes.sample(category, &mut rng)] += 1;
        }
        println!("{}", category);
        for (i, (&count, &weight)) in counts.iter().zip(genes.weights(category)).enumerate() {
            let freq = f64::from(count) / f64::from(draws);
            println!("  [{}] weight {:.3} -> observed {:.3}", i, weight, freq);
        }
        println!();
    }
}
