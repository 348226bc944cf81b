use crate::storage::BrowserSessionStore;
use shared::session::{AUTH_TOKEN_KEY, PERSISTENT_TOKEN, SESSION_TOKEN, persist_sign_in};
use shared::{Router, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset() -> BrowserSessionStore {
    let mut store = BrowserSessionStore;
    store.clear_token();
    store.forget_email();
    store
}

#[wasm_bindgen_test]
fn remembered_sign_in_survives_reload() {
    let mut store = reset();
    persist_sign_in(&mut store, "ada@stu.cu.edu.ng", true);

    let reloaded = BrowserSessionStore;
    assert_eq!(reloaded.token().as_deref(), Some(PERSISTENT_TOKEN));
    assert_eq!(
        reloaded.remembered_email().as_deref(),
        Some("ada@stu.cu.edu.ng")
    );
    assert!(Router::restore(&reloaded).is_logged_in());
}

#[wasm_bindgen_test]
fn session_sign_in_forgets_email() {
    let mut store = reset();
    store.remember_email("old@stu.cu.edu.ng");
    persist_sign_in(&mut store, "ada@stu.cu.edu.ng", false);

    assert_eq!(store.token().as_deref(), Some(SESSION_TOKEN));
    assert_eq!(store.remembered_email(), None);
}

#[wasm_bindgen_test]
fn values_are_stored_raw() {
    let mut store = reset();
    store.save_token(PERSISTENT_TOKEN);
    let raw = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten());
    assert_eq!(raw.as_deref(), Some(PERSISTENT_TOKEN));
}

#[wasm_bindgen_test]
fn logout_clears_token() {
    let mut store = reset();
    store.save_token(PERSISTENT_TOKEN);
    let mut router = Router::restore(&store);
    router.logout(&mut store);

    assert!(!router.is_logged_in());
    assert_eq!(store.token(), None);
}
