use clap::{Parser, Subcommand};
use sl_app::{AppResult, LastRun, Session};
use sl_client::SimClient;
use sl_topology::default_topology;

#[derive(Parser)]
#[command(name = "sl-cli")]
#[command(about = "ScaleLab CLI - capacity-planning simulation client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger simulation runs against the evaluation service
    Run {
        /// Base URL of the evaluation service
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        base_url: String,
        /// Traffic level in requests per second
        #[arg(long, default_value_t = 8000.0)]
        traffic: f64,
        /// Number of successive runs to trigger
        #[arg(long, default_value_t = 1)]
        repeat: u32,
    },
    /// Print the seeded lab topology
    Topology,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            base_url,
            traffic,
            repeat,
        } => cmd_run(&base_url, traffic, repeat).await,
        Commands::Topology => cmd_topology(),
    }
}

fn cmd_topology() -> AppResult<()> {
    let store = default_topology();

    println!("Nodes:");
    for node in store.nodes() {
        println!(
            "  {} [{}] capacity {} - {}",
            node.id, node.kind, node.capacity, node.label
        );
    }
    println!("Edges:");
    for edge in store.edges() {
        println!("  {} -> {}", edge.source, edge.target);
    }
    Ok(())
}

async fn cmd_run(base_url: &str, traffic: f64, repeat: u32) -> AppResult<()> {
    println!("Evaluating {} RPS against {}", traffic, base_url);

    let mut session = Session::new(default_topology(), SimClient::new(base_url));

    for run in 1..=repeat {
        match session.trigger(traffic).await {
            Ok(report) => println!(
                "✓ Run {}: total latency {:.2} ms, db load {:.0} rps, system {:?}",
                run, report.total_latency, report.db_traffic, report.system_status
            ),
            Err(err) => println!("✗ Run {} failed: {}", run, err),
        }
    }

    print_state(&session);
    Ok(())
}

fn print_state(session: &Session) {
    println!("\nNodes:");
    for node in session.store().nodes() {
        println!(
            "  {:8} {:10} {:>8.2} ms  {}",
            node.id, node.status, node.latency, node.label
        );
    }

    println!("Edges:");
    for edge in session.store().edges() {
        let heat = if edge.style.is_hot() { "HOT" } else { "cool" };
        println!("  {} -> {} [{}]", edge.source, edge.target, heat);
    }

    if !session.history().is_empty() {
        println!("History (latest {} runs):", session.history().len());
        for sample in session.history().samples() {
            println!("  {}  {:.2} ms", sample.timestamp, sample.latency);
        }
    }

    if let LastRun::Failed(message) = session.last_run() {
        println!("Last run failed: {}", message);
    }
}
