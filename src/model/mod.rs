/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
/// Trading pair notation
pub mod symbol;
