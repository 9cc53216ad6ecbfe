use clinance::utils::id::{CLIENT_ORDER_ID_PREFIX, new_client_order_id};

#[test]
fn test_client_order_id_prefix_and_length() {
    let id = new_client_order_id();
    assert!(id.starts_with(CLIENT_ORDER_ID_PREFIX));
    assert_eq!(id.len(), CLIENT_ORDER_ID_PREFIX.len() + 20);
    assert!(id.len() <= 36);
}

#[test]
fn test_client_order_id_contains_valid_chars() {
    let id = new_client_order_id();
    let suffix = &id[CLIENT_ORDER_ID_PREFIX.len()..];
    let valid_chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    for c in suffix.chars() {
        assert!(valid_chars.contains(c), "Invalid character: {}", c);
    }
}

#[test]
fn test_client_order_id_uniqueness() {
    let id1 = new_client_order_id();
    let id2 = new_client_order_id();
    assert_ne!(id1, id2);
}
