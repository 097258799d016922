use metro_planner::network::sample_network;
use metro_planner::planner::{Planner, SearchConfig};
use metro_planner::web::{AppState, ServerConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Queries run against the sample network at startup.
const DEMO_QUERIES: [(&str, &str); 5] = [
    ("A", "F"),
    ("A", "C"),
    ("B", "E"),
    ("A", "A"),
    ("X", "F"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env()?;
    let search_config = SearchConfig::default();
    let network = sample_network()?;

    info!(
        stations = network.len(),
        connections = network.connection_count(),
        "Loaded sample network"
    );

    let planner = Planner::new(&network, &search_config);
    for (start, goal) in DEMO_QUERIES {
        let bfs = planner.bfs(start, goal);
        let (a_star, cost) = planner.a_star(start, goal);
        info!(start, goal, ?bfs, "BFS path");
        info!(start, goal, ?a_star, cost, "A* path");
    }

    let state = AppState::new(network, search_config);
    let app = create_router(state);

    let addr = server_config.addr;
    info!("Metro planner listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /api/network");
    info!("  GET /api/route/bfs?from=A&to=F");
    info!("  GET /api/route/astar?from=A&to=F");
    info!("  GET /api/route/compare?from=A&to=F");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
