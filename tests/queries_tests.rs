use chrono::NaiveDate;
use clubroster::model::*;
use clubroster::ops::*;
use clubroster::queries::{self, club_queries, membership_queries, person_queries};
use clubroster::roster::Roster;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 8, 6)
}

fn setup() -> Roster {
    let mut roster = Roster::new();
    person_ops::add_person(
        &mut roster,
        "Alice Tan",
        "91234567",
        "alice@example.com",
        "",
        &["swimmer", "captain"],
    )
    .unwrap();
    person_ops::add_person(&mut roster, "Bob Lee", "", "bob@example.com", "", &[]).unwrap();
    club_ops::add_club(&mut roster, "Chess Club", "", "chess@club.org", "", &["board-games"]).unwrap();
    club_ops::add_club(&mut roster, "Swim Club", "", "swim@club.org", "", &["swimmer"]).unwrap();
    roster
}

fn alice(roster: &Roster) -> Person {
    roster.find_person_by_email("alice@example.com").unwrap().clone()
}

fn bob(roster: &Roster) -> Person {
    roster.find_person_by_email("bob@example.com").unwrap().clone()
}

fn chess(roster: &Roster) -> Club {
    roster.find_club_by_name("Chess Club").unwrap().clone()
}

fn swim(roster: &Roster) -> Club {
    roster.find_club_by_name("Swim Club").unwrap().clone()
}

// ==========================================================================
// LOOKUP TESTS
// ==========================================================================

#[test]
fn find_by_email_is_case_insensitive() {
    let roster = setup();
    let found = person_queries::find_by_email(&roster, "ALICE@Example.Com").unwrap();
    assert_eq!(found.name.as_str(), "Alice Tan");
}

#[test]
fn find_club_by_name_uses_normalized_key() {
    let roster = setup();
    let found = club_queries::find_by_name(&roster, "  chess   CLUB ").unwrap();
    assert_eq!(found.name.as_str(), "Chess Club");
}

#[test]
fn search_matches_name_fragments_case_insensitively() {
    let roster = setup();
    let hits = person_queries::search(&roster, "ali");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.as_str(), "Alice Tan");

    assert!(person_queries::search(&roster, "zzz").is_empty());
    assert!(person_queries::search(&roster, "").is_empty());
}

#[test]
fn tag_predicates_work_for_both_entity_kinds() {
    let roster = setup();
    assert_eq!(person_queries::tagged(&roster, "SWIMMER").len(), 1);
    assert_eq!(club_queries::tagged(&roster, "swimmer").len(), 1);
    assert!(person_queries::tagged(&roster, "chess").is_empty());

    // The same predicate serves persons and clubs through Profile.
    assert!(queries::has_tag(&alice(&roster), "captain"));
    assert!(queries::name_matches(&chess(&roster), "chess"));
}

// ==========================================================================
// MEMBERSHIP QUERY TESTS
// ==========================================================================

#[test]
fn active_excludes_lapsed_and_cancelled_memberships() {
    let mut roster = setup();

    // Running membership.
    let alice_m = alice(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &alice_m, &chess_m, 6, today()).unwrap();
    // Lapsed long ago.
    let bob_m = bob(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &bob_m, &chess_m, 1, date(2025, 1, 1))
        .unwrap();
    // Pending cancellation.
    let alice_m = alice(&roster);
    let swim_m = swim(&roster);
    let id = membership_ops::join(&mut roster, &alice_m, &swim_m, 6, today())
        .unwrap();
    membership_ops::cancel(&mut roster, id, today()).unwrap();

    let active = membership_queries::active(&roster, today());
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].person_id, alice(&roster).id);
    assert_eq!(active[0].club_id, chess(&roster).id);

    assert_eq!(membership_queries::all(&roster).len(), 3);
}

#[test]
fn for_person_resolves_every_handle() {
    let mut roster = setup();
    let alice_m = alice(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &alice_m, &chess_m, 6, today()).unwrap();
    let alice_m = alice(&roster);
    let swim_m = swim(&roster);
    membership_ops::join(&mut roster, &alice_m, &swim_m, 3, today()).unwrap();

    let memberships = membership_queries::for_person(&roster, &alice(&roster));
    assert_eq!(memberships.len(), 2);
    assert!(membership_queries::for_person(&roster, &bob(&roster)).is_empty());
}

#[test]
fn for_club_resolves_every_handle() {
    let mut roster = setup();
    let alice_m = alice(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &alice_m, &chess_m, 6, today()).unwrap();
    let bob_m = bob(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &bob_m, &chess_m, 6, today()).unwrap();

    assert_eq!(membership_queries::for_club(&roster, &chess(&roster)).len(), 2);
    assert!(membership_queries::for_club(&roster, &swim(&roster)).is_empty());
}

#[test]
fn between_finds_the_pair_membership() {
    let mut roster = setup();
    let alice_m = alice(&roster);
    let chess_m = chess(&roster);
    membership_ops::join(&mut roster, &alice_m, &chess_m, 6, today()).unwrap();

    assert!(membership_queries::between(&roster, &alice(&roster), &chess(&roster)).is_some());
    assert!(membership_queries::between(&roster, &alice(&roster), &swim(&roster)).is_none());
    assert!(membership_queries::between(&roster, &bob(&roster), &chess(&roster)).is_none());
}

#[test]
fn ordered_views_preserve_insertion_order() {
    let roster = setup();
    let person_names: Vec<&str> = person_queries::all(&roster)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(person_names, vec!["Alice Tan", "Bob Lee"]);

    let club_names: Vec<&str> = club_queries::all(&roster)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(club_names, vec!["Chess Club", "Swim Club"]);
}
