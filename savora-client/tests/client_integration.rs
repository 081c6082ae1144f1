// savora-client/tests/client_integration.rs

use savora_client::{Cart, ClientConfig, Role, SessionPatch, SessionStore};
use shared::models::order::{Fulfillment, OrderItem};
use tempfile::TempDir;

fn line(menu_item_id: &str, price: f64, quantity: i32) -> OrderItem {
    OrderItem {
        menu_item_id: menu_item_id.to_string(),
        name: format!("item-{}", menu_item_id),
        price,
        quantity,
        modifiers: vec![],
    }
}

#[tokio::test]
async fn test_http_client_creation() {
    let config = ClientConfig::new("http://localhost:3000");
    assert_eq!(config.timeout, 10);

    let client = config.build_http_client();
    assert!(client.token().is_none());

    let client = client.with_token("secret");
    assert_eq!(client.token(), Some("secret"));
}

#[test]
fn test_session_store_defaults_to_guest() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    let session = store.load();
    assert_eq!(session.role, Role::Guest);
    assert!(session.token.is_none());
    assert!(!session.is_logged_in());
}

#[test]
fn test_session_store_merges_patches() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    store.save(SessionPatch {
        token: Some("tok-1".to_string()),
        role: Some(Role::Customer),
        name: Some("Ada".to_string()),
        ..Default::default()
    });

    // A later partial save must not touch other fields
    let session = store.save(SessionPatch {
        selected_location: Some("Home".to_string()),
        ..Default::default()
    });

    assert_eq!(session.token.as_deref(), Some("tok-1"));
    assert_eq!(session.role, Role::Customer);
    assert_eq!(session.name.as_deref(), Some("Ada"));
    assert_eq!(session.selected_location.as_deref(), Some("Home"));

    // And it survives a reload through a fresh store
    let reloaded = SessionStore::new(temp_dir.path()).load();
    assert_eq!(reloaded, session);
}

#[test]
fn test_session_store_clear_resets_to_guest() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    store.save(SessionPatch {
        token: Some("tok-1".to_string()),
        role: Some(Role::Partner),
        partner_active: Some(true),
        ..Default::default()
    });

    let session = store.clear();
    assert_eq!(session.role, Role::Guest);
    assert!(!store.file_path().exists());
    assert_eq!(store.load().role, Role::Guest);
}

#[test]
fn test_session_store_corrupt_file_falls_open_to_guest() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    std::fs::write(store.file_path(), "{not json").unwrap();

    let session = store.load();
    assert_eq!(session.role, Role::Guest);
    assert!(session.token.is_none());
}

#[test]
fn test_cart_totals() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 2));
    cart.add_item("rest-1", line("2", 3.0, 1));
    assert_eq!(cart.total(), 13.0);

    cart.remove_item("1");
    assert_eq!(cart.total(), 3.0);
}

#[test]
fn test_cart_defaults_quantity_to_one() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 0));
    assert_eq!(cart.items()[0].quantity, 1);
}

#[test]
fn test_cart_keeps_duplicate_lines() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 1));
    cart.add_item("rest-1", line("1", 5.0, 1));
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn test_cart_switching_restaurant_clears_items() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 2));
    assert_eq!(cart.restaurant_id(), Some("rest-1"));

    cart.add_item("rest-2", line("9", 7.5, 1));
    assert_eq!(cart.restaurant_id(), Some("rest-2"));
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total(), 7.5);
}

#[test]
fn test_cart_clear_unsets_scope() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 1));

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.restaurant_id(), None);
    assert!(cart.checkout_request(Fulfillment::Pickup, None).is_none());
}

#[test]
fn test_cart_set_quantity_does_not_clamp() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 1));

    // The container applies the value verbatim; clamping is the caller's
    // documented responsibility
    cart.set_quantity("1", 4);
    assert_eq!(cart.items()[0].quantity, 4);
}

#[test]
fn test_cart_checkout_request() {
    let mut cart = Cart::new();
    cart.add_item("rest-1", line("1", 5.0, 2));

    let request = cart
        .checkout_request(Fulfillment::Delivery, Some("addr-1".to_string()))
        .unwrap();
    assert_eq!(request.restaurant_id, "rest-1");
    assert_eq!(request.items.len(), 1);
    assert_eq!(request.address_id.as_deref(), Some("addr-1"));
}
