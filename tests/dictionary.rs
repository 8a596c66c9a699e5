use std::cmp::Ordering;
use std::collections::HashMap;

use verborum::loader::{EmbeddedLoader, SessionLoader};
use verborum::search::{highlight, to_marked_text};
use verborum::utils::UCollator;
use verborum::{DictionaryBrowser, DictionaryConfig, Entry, EntryStore, QueryEngine, Session};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn embedded_store() -> EntryStore {
    init_logger();
    DictionaryConfig::default().open().expect("embedded lexicon opens")
}

fn amor_bellum() -> EntryStore {
    init_logger();
    let sessions = vec![
        Session::numbered(1, vec![Entry::new("amor", "love", None::<&str>).unwrap()]).unwrap(),
        Session::numbered(2, vec![Entry::new("bellum", "war", Some("bellum gerere")).unwrap()]).unwrap(),
    ];
    EntryStore::new(sessions, UCollator::try_from("en").unwrap()).unwrap()
}

#[test]
fn amor_bellum_scenario() {
    let store = amor_bellum();
    let engine = QueryEngine::new(&store);

    assert_eq!(store.total_entry_count(), 2);
    let all: Vec<&str> = store.all_entries().iter().map(Entry::word).collect();
    assert_eq!(all, vec!["amor", "bellum"]);

    let found: Vec<&str> = engine.search_dictionary("bel").into_iter().map(Entry::word).collect();
    assert_eq!(found, vec!["bellum"]);
    assert!(engine.search_session(1, "war").is_empty());
    let found: Vec<&str> = engine.search_session(2, "gerere").into_iter().map(Entry::word).collect();
    assert_eq!(found, vec!["bellum"]);
}

#[test]
fn embedded_lexicon_matches_its_sources() {
    let store = embedded_store();
    let sources = EmbeddedLoader.load_sessions().unwrap();
    let source_total: usize = sources.iter().map(|session| session.entries().len()).sum();
    assert_eq!(store.total_entry_count(), source_total);

    for (info, source) in store.available_sessions().iter().zip(&sources) {
        assert_eq!(info.number, source.number());
        assert_eq!(info.name, source.name());
        assert_eq!(info.entry_count, source.entries().len());
    }
}

#[test]
fn embedded_views_are_sorted_and_partitioned() {
    let store = embedded_store();
    let collator = store.collator();
    let is_sorted = |entries: &[Entry]| {
        entries
            .windows(2)
            .all(|pair| collator.compare(pair[0].word(), pair[1].word()) != Ordering::Greater)
    };
    assert!(is_sorted(store.all_entries()));

    let mut balance: HashMap<&Entry, i64> = HashMap::new();
    for entry in store.all_entries() {
        *balance.entry(entry).or_default() += 1;
    }
    for info in store.available_sessions() {
        let entries = store.session_entries(info.number);
        assert!(is_sorted(entries));
        for entry in entries {
            *balance.entry(entry).or_default() -= 1;
        }
    }
    assert!(balance.values().all(|count| *count == 0));
}

#[test]
fn clear_cache_then_reload_is_idempotent() {
    let mut store = embedded_store();
    let first = store.all_entries().to_vec();
    store.clear_cache();
    for _ in 0..5 {
        assert_eq!(store.all_entries(), first.as_slice());
    }
}

#[test]
fn empty_query_asymmetry() {
    let store = embedded_store();
    let engine = QueryEngine::new(&store);
    assert!(engine.search_dictionary("").is_empty());
    let session: Vec<&Entry> = store.session_entries(1).iter().collect();
    assert_eq!(engine.search_session(1, ""), session);
}

#[test]
fn search_finds_example_text() {
    let store = embedded_store();
    let engine = QueryEngine::new(&store);
    let found: Vec<&str> = engine
        .search_dictionary("POST MURUM")
        .into_iter()
        .map(Entry::word)
        .collect();
    assert_eq!(found, vec!["Pomerium"]);
}

#[test]
fn browser_renders_highlighted_results() {
    let mut browser = DictionaryBrowser::new(embedded_store());
    browser.set_query("lustrum");
    browser.toggle_session(2);
    let results = browser.highlighted_results();
    assert_eq!(results.len(), 1);
    assert_eq!(to_marked_text(&results[0].word, "*", "*"), "*Lustrum*");
    assert_eq!(browser.summary(), "1 entry found");
}

#[test]
fn highlight_round_trip_on_every_definition() {
    let store = embedded_store();
    for entry in store.all_entries() {
        for query in ["a", "THE", "um", " "] {
            let text: String = highlight(entry.definition(), query)
                .iter()
                .map(|fragment| fragment.text)
                .collect();
            assert_eq!(text, entry.definition());
        }
    }
}
