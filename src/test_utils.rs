use crate::storage::{Entry, EntryStore, Session, SessionNumber};
use crate::utils::UCollator;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn entry(word: &str, definition: &str, example: Option<&str>) -> Entry {
    Entry::new(word, definition, example).expect("valid test entry")
}

pub fn session(number: SessionNumber, entries: Vec<Entry>) -> Session {
    Session::numbered(number, entries).expect("valid test session")
}

pub fn store(sessions: Vec<Session>) -> EntryStore {
    init_logger();
    let collator = UCollator::try_from("en").expect("english collator");
    EntryStore::new(sessions, collator).expect("valid test store")
}

/// Session 1 holds `amor`, session 2 holds `bellum` with an example.
pub fn amor_bellum_store() -> EntryStore {
    store(vec![
        session(1, vec![entry("amor", "love", None)]),
        session(2, vec![entry("bellum", "war", Some("bellum gerere"))]),
    ])
}

/// Three unsorted sessions with mixed case and an example-only match target.
pub fn latin_store() -> EntryStore {
    store(vec![
        session(1, vec![
            entry("Comitium", "place of assembly", Some("coibant eo comitiorum causa")),
            entry("augur", "priest who reads the birds", None),
            entry("Bidental", "place struck by lightning", Some("bidentibus hostiis")),
        ]),
        session(2, vec![
            entry("hostis", "stranger, later an enemy", Some("quem nunc peregrinum dicimus")),
            entry("Flamen", "priest of a single god", None),
            entry("fas", "what divine law permits", Some("")),
        ]),
        session(3, vec![
            entry("Pomerium", "sacred boundary behind the walls", Some("quasi post murum")),
            entry("lustrum", "five-yearly purification", None),
        ]),
    ])
}

pub fn words<'a, I: IntoIterator<Item = &'a Entry>>(entries: I) -> Vec<&'a str> {
    entries.into_iter().map(Entry::word).collect()
}
