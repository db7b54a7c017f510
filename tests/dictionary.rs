//! End-to-end dictionary tests through the public facade.

use std::sync::Arc;

use lexicon::{
    DictionaryHandler, Dispatcher, LexiconError, Request, Response, StoreConfig, TermStore,
    Whitelist,
};
use tempfile::TempDir;

/// Test: chat commands → restart → definitions still answered
#[test]
fn test_commands_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path());
    let whitelist = Arc::new(Whitelist::new(["op!*@*"]).unwrap());

    {
        let store = Arc::new(TermStore::open(&config).unwrap());
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(DictionaryHandler::new(store, whitelist.clone()));

        let request =
            Request::parse("!", "op", "op!op@host", "#chan", "!add-define x y and z").unwrap();
        let mut out = Vec::new();
        assert!(dispatcher.dispatch(&request, &mut out).unwrap());
    }

    let store = Arc::new(TermStore::open(&config).unwrap());
    assert_eq!(store.define("X").unwrap(), "y and z");

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(DictionaryHandler::new(store.clone(), whitelist));
    let request = Request::parse("!", "someone", "someone!s@elsewhere", "#chan", "!define x").unwrap();
    let mut out = Vec::new();
    dispatcher.dispatch(&request, &mut out).unwrap();
    assert_eq!(out, vec![Response::new("#chan", "someone: y and z")]);

    store.remove_define("x").unwrap();
    assert!(matches!(store.define("x"), Err(LexiconError::NotFound { .. })));
}
