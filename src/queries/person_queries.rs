use crate::model::Person;
use crate::roster::Roster;

pub fn all(roster: &Roster) -> &[Person] {
    roster.persons()
}

pub fn find_by_email<'a>(roster: &'a Roster, email: &str) -> Option<&'a Person> {
    roster.find_person_by_email(email)
}

pub fn search<'a>(roster: &'a Roster, fragment: &str) -> Vec<&'a Person> {
    roster
        .persons()
        .iter()
        .filter(|p| super::name_matches(*p, fragment))
        .collect()
}

pub fn tagged<'a>(roster: &'a Roster, tag: &str) -> Vec<&'a Person> {
    roster
        .persons()
        .iter()
        .filter(|p| super::has_tag(*p, tag))
        .collect()
}
