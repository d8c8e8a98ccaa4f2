use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stock_agent_api::{
    api::{run_server, AppState},
    config::AppConfig,
    constants,
    data::YahooFinanceClient,
    llm::LLMClient,
    tools::{StockPriceTool, ToolRegistry},
    StockAgent,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Stock Agent API...");
    info!(
        "Ollama URL from env: {}",
        std::env::var(constants::env::OLLAMA_HOST).unwrap_or_else(|_| "not set".to_string())
    );

    // Load Configuration
    let config = AppConfig::load()?;
    info!("Loaded Configuration: {:?}", config);

    // Initialize Clients
    info!("Using LLM Model: {} at {}", config.llm.model, config.llm.base_url);
    let llm = LLMClient::from_config(&config.llm);

    let market_data = YahooFinanceClient::new(&config.market_data)?;
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(StockPriceTool::new(market_data)));
    info!("Registered tools: {:?}", tools.list());

    // Agent is built once and shared read-only by every request
    let agent = StockAgent::new(Arc::new(llm), tools, config.agent.max_tool_rounds);
    let app_state = Arc::new(AppState::new(Arc::new(agent)));

    // Start API Server
    info!("Initializing API Server...");
    run_server(app_state, &config.bind_addr()).await?;

    Ok(())
}
