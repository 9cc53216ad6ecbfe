/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

/// Production REST endpoint of the Binance spot API
pub const DEFAULT_REST_BASE_URL: &str = "https://api.binance.com";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Milliseconds a signed request stays valid after its timestamp
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;
/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = concat!("clinance/", env!("CARGO_PKG_VERSION"));
/// Header carrying the API key on signed and user-data endpoints
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BINANCE_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "BINANCE_SECRET";

/// Default number of requests allowed per rate limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 20;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default number of requests allowed in a burst
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// Default number of retries after a 429/418 answer
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default delay in seconds between retries when the server sends no `Retry-After`
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;

/// Depth sizes accepted by `GET /api/v3/depth`
pub const VALID_DEPTH_LIMITS: [u32; 8] = [5, 10, 20, 50, 100, 500, 1000, 5000];
/// Page size of `GET /api/v3/myTrades`
pub const MAX_USER_TRADES: u32 = 1000;
/// Most candles `GET /api/v3/klines` returns in one call
pub const MAX_KLINES_LIMIT: u32 = 1000;
/// Candles requested for indicator calculations
pub const DEFAULT_KLINES_LIMIT: u32 = 500;
/// Public trades fetched to read the current price
pub const RECENT_TRADES_LIMIT: u32 = 5;
/// Quote assets used to split a bare Binance id such as `ETHBTC`, longest first
pub const KNOWN_QUOTE_ASSETS: [&str; 14] = [
    "FDUSD", "USDT", "USDC", "BUSD", "TUSD", "DAI", "BTC", "ETH", "BNB", "EUR", "TRY", "BRL",
    "GBP", "JPY",
];
/// Asset every balance is valued against in detailed mode
pub const VALUATION_ASSET: &str = "BTC";
