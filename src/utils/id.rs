/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

/// Prefix marking orders placed by this client
pub const CLIENT_ORDER_ID_PREFIX: &str = "clinance-";

/// Generates a client order id accepted by Binance (`^[.A-Z:/a-z0-9_-]{1,36}$`).
///
/// The id is the [`CLIENT_ORDER_ID_PREFIX`] followed by 20 random characters
/// from `A-Z0-9`, generated with the `nanoid` crate.
///
/// # Examples
/// ```
/// use clinance::utils::id::new_client_order_id;
/// let id = new_client_order_id();
/// assert!(id.starts_with("clinance-"));
/// assert!(id.len() <= 36);
/// ```
pub fn new_client_order_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    format!("{CLIENT_ORDER_ID_PREFIX}{}", nanoid::nanoid!(20, &alphabet))
}
