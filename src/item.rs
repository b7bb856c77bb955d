/// A named thing with a score.  Built once at startup and never changed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_new::new,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{name} ({score})")]
pub struct Item {
    name: String,
    score: i64,
}

/// The sample data handed to the [`crate::App`] on startup.
pub fn roster() -> Vec<Item> {
    vec![
        Item::new("Sally".to_string(), 50),
        Item::new("Barry".to_string(), 10),
        Item::new("Frank".to_string(), 30),
    ]
}
