use crate::model::Club;
use crate::roster::Roster;

pub fn all(roster: &Roster) -> &[Club] {
    roster.clubs()
}

pub fn find_by_name<'a>(roster: &'a Roster, name: &str) -> Option<&'a Club> {
    roster.find_club_by_name(name)
}

pub fn search<'a>(roster: &'a Roster, fragment: &str) -> Vec<&'a Club> {
    roster
        .clubs()
        .iter()
        .filter(|c| super::name_matches(*c, fragment))
        .collect()
}

pub fn tagged<'a>(roster: &'a Roster, tag: &str) -> Vec<&'a Club> {
    roster
        .clubs()
        .iter()
        .filter(|c| super::has_tag(*c, tag))
        .collect()
}
