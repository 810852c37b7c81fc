use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn local_store_is_inert_outside_browser() {
    let store = LocalStore;
    store.set("authToken", "t");
    assert_eq!(store.get("authToken"), None);
    store.remove("authToken");
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::default();
    let loaded: Option<serde_json::Value> = load_json(&store, "userData").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_json_reports_malformed_text() {
    let store = MemoryStore::default();
    store.set("userData", "{not json");
    assert!(load_json::<serde_json::Value>(&store, "userData").is_err());
}

#[test]
fn save_json_then_load_json() {
    let store = MemoryStore::default();
    save_json(&store, "userData", &serde_json::json!({ "name": "Ada" }));
    let loaded: Option<serde_json::Value> = load_json(&store, "userData").unwrap();
    assert_eq!(loaded, Some(serde_json::json!({ "name": "Ada" })));
}
