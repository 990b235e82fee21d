use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::error::RosterError;
use crate::model::{Club, Person};
use crate::queries::{club_queries, person_queries};
use crate::roster::Roster;
use crate::storage;
use crate::validation::identity_key;

pub struct CliContext {
    pub roster: Roster,
    pub path: PathBuf,
}

impl CliContext {
    pub fn new(roster: Roster, path: PathBuf) -> Self {
        Self { roster, path }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Find a person by name fragment. Prints an error if nothing matches or
    /// the fragment is ambiguous; an exact (normalized) name wins a tie.
    pub fn find_person(&self, args: &str) -> Option<Person> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = person_queries::search(&self.roster, query);
        match matches.len() {
            0 => {
                println!("No person found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                let key = identity_key(query);
                if let Some(exact) = matches.iter().find(|p| p.name.key() == key) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for p in &matches {
                    println!("  {}", p.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Find a club by name fragment, with the same tie-break rule.
    pub fn find_club(&self, args: &str) -> Option<Club> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = club_queries::search(&self.roster, query);
        match matches.len() {
            0 => {
                println!("No club found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                let key = identity_key(query);
                if let Some(exact) = matches.iter().find(|c| c.name.key() == key) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for c in &matches {
                    println!("  {}", c.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &RosterError) {
        println!("Error: {}", e);
    }

    /// Persist the roster if any mutation committed since the last save.
    pub fn autosave(&mut self) {
        if !self.roster.has_pending_events() {
            return;
        }
        self.roster.take_events();
        if let Err(e) = storage::save(&self.roster, &self.path) {
            println!("Warning: could not save {}: {}", self.path.display(), e);
        }
    }
}
