use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::data::YahooFinanceClient;
use crate::error::ToolError;

pub const TOOL_NAME: &str = "get_current_stock_price";

pub struct StockPriceTool {
    client: YahooFinanceClient,
}

impl StockPriceTool {
    pub fn new(client: YahooFinanceClient) -> Self {
        Self { client }
    }
}

/// Trimmed, upper-cased ticker from the `symbol` argument.
pub fn parse_symbol(arguments: &Value) -> Result<String, ToolError> {
    let symbol = arguments
        .get("symbol")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_uppercase())
        .unwrap_or_default();

    if symbol.is_empty() {
        return Err(ToolError::InvalidArguments {
            tool: TOOL_NAME.to_string(),
            reason: "expected a non-empty 'symbol' string".to_string(),
        });
    }
    Ok(symbol)
}

#[async_trait]
impl Tool for StockPriceTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Get the current stock price for a given ticker symbol, e.g. AAPL or PETR4.SA"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "The stock ticker symbol"
                }
            },
            "required": ["symbol"]
        })
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let symbol = parse_symbol(arguments)?;
        let price = self.client.get_current_price(&symbol).await?;
        Ok(format!("{:.4}", price))
    }
}
