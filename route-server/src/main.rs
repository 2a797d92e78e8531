use route_server::config::ServerConfig;
use route_server::directions::OrsClient;
use route_server::geocode::NominatimClient;
use route_server::pipeline::RouteAggregator;
use route_server::safety::{OverpassClient, SafetyProbe};
use route_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let geocoder =
        NominatimClient::new(config.nominatim()).expect("Failed to create geocoding client");
    let router = OrsClient::new(config.directions()).expect("Failed to create directions client");
    let overpass =
        OverpassClient::new(config.overpass()).expect("Failed to create Overpass client");

    let aggregator = RouteAggregator::new(
        geocoder,
        router,
        SafetyProbe::new(overpass, config.score_seed),
        config.pipeline(),
    );

    let app = create_router(AppState::new(aggregator));

    let addr = config.bind_addr;
    info!("Safe route planner listening on http://{addr}");
    info!("  GET  /health      - Health check");
    info!("  POST /api/routes  - Plan routes between two places");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
