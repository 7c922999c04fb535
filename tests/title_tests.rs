// Host-side tests for the document title manager.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod title {
        include!("../src/core/title.rs");
    }
}

use crate::core::title::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn section_titles() {
    assert_eq!(title_for_section("home").as_deref(), Some("Vignesh B | Home"));
    assert_eq!(title_for_section("contact").as_deref(), Some("Vignesh B | Contact"));
    assert_eq!(title_for_section("tactical"), None);
}

#[test]
fn hidden_then_visible_restores_title() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut t = TitleState::default();
    let away = t.on_hidden("Vignesh B | Skills", &mut rng);
    assert!(AWAY_MESSAGES.contains(&away));
    assert_eq!(t.on_visible().as_deref(), Some("Vignesh B | Skills"));
    assert_eq!(t.on_visible(), None);
}

#[test]
fn repeated_hidden_keeps_original_title() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut t = TitleState::default();
    let away = t.on_hidden("Vignesh B | Home", &mut rng);
    t.on_hidden(away, &mut rng);
    assert_eq!(t.on_visible().as_deref(), Some("Vignesh B | Home"));
}

#[test]
fn section_change_while_hidden_updates_restore_target() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut t = TitleState::default();
    assert_eq!(
        t.on_section("Vignesh B | About".into()).as_deref(),
        Some("Vignesh B | About")
    );
    t.on_hidden("Vignesh B | About", &mut rng);
    assert_eq!(t.on_section("Vignesh B | Projects".into()), None);
    assert_eq!(t.on_visible().as_deref(), Some("Vignesh B | Projects"));
}

#[test]
fn away_messages_cover_every_entry() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        let mut t = TitleState::default();
        seen.insert(t.on_hidden("x", &mut rng));
    }
    assert_eq!(seen.len(), AWAY_MESSAGES.len());
}
