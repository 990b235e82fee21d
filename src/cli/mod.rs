pub mod club_commands;
pub mod context;
pub mod membership_commands;
pub mod person_commands;

use std::path::Path;

use crate::model::Profile;
use crate::queries::{club_queries, person_queries};
use crate::storage;

use context::CliContext;

/// Run the interactive REPL against the roster stored at `store_path`.
pub fn run(store_path: &Path) {
    println!("Club Roster");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let roster = match storage::load_or_default(store_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading {}: {}", store_path.display(), e);
            return;
        }
    };

    if !roster.persons().is_empty() || !roster.clubs().is_empty() {
        println!(
            "Loaded {} person(s), {} club(s), {} membership(s).",
            roster.persons().len(),
            roster.clubs().len(),
            roster.memberships().len()
        );
        println!();
    }

    let mut ctx = CliContext::new(roster, store_path.to_path_buf());
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CliContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "persons" => person_commands::list(ctx),
            "add-person" => person_commands::add(ctx, args),
            "show-person" => person_commands::show(ctx, args),
            "edit-person" => person_commands::edit(ctx, args),
            "remove-person" => person_commands::remove(ctx, args),

            "clubs" => club_commands::list(ctx),
            "add-club" => club_commands::add(ctx, args),
            "show-club" => club_commands::show(ctx, args),
            "edit-club" => club_commands::edit(ctx, args),
            "remove-club" => club_commands::remove(ctx, args),

            "join" => membership_commands::join(ctx, args),
            "renew" => membership_commands::renew(ctx, args),
            "cancel" => membership_commands::cancel(ctx, args),
            "reactivate" => membership_commands::reactivate(ctx, args),
            "finalize" => membership_commands::finalize(ctx, args),
            "unlink" => membership_commands::unlink(ctx, args),
            "history" => membership_commands::history(ctx, args),
            "active" => membership_commands::active(ctx),

            "find" => find(ctx, args),
            "tagged" => tagged(ctx, args),
            "save" => save(ctx),

            other => println!("Unknown command: '{}'. Type 'help' for commands.", other),
        }

        ctx.autosave();
    }
    println!("Bye.");
}

fn parse_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (input, ""),
    }
}

fn find(ctx: &CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: find <name fragment>");
        return;
    }
    let persons = person_queries::search(&ctx.roster, args);
    let clubs = club_queries::search(&ctx.roster, args);
    if persons.is_empty() && clubs.is_empty() {
        println!("Nothing matches '{}'.", args);
        return;
    }
    for p in persons {
        println!("  person: {} <{}>", p.name(), p.email());
    }
    for c in clubs {
        println!("  club: {}", c.name());
    }
}

fn tagged(ctx: &CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: tagged <tag>");
        return;
    }
    let persons = person_queries::tagged(&ctx.roster, args);
    let clubs = club_queries::tagged(&ctx.roster, args);
    if persons.is_empty() && clubs.is_empty() {
        println!("Nothing is tagged '{}'.", args);
        return;
    }
    for p in persons {
        println!("  person: {} <{}>", p.name(), p.email());
    }
    for c in clubs {
        println!("  club: {}", c.name());
    }
}

fn save(ctx: &CliContext) {
    match storage::save(&ctx.roster, &ctx.path) {
        Ok(()) => println!("Saved to {}.", ctx.path.display()),
        Err(e) => ctx.print_error(&e),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  persons                    List all persons");
    println!("  add-person [name]          Add a person");
    println!("  show-person <name>         Show a person and their memberships");
    println!("  edit-person <name>         Edit a person's fields");
    println!("  remove-person <name>       Remove a person (must have no memberships)");
    println!();
    println!("  clubs                      List all clubs");
    println!("  add-club [name]            Add a club");
    println!("  show-club <name>           Show a club and its members");
    println!("  edit-club <name>           Edit a club's fields");
    println!("  remove-club <name>         Remove a club (must have no memberships)");
    println!();
    println!("  join [person]              Join a person to a club");
    println!("  renew [person]             Renew a membership (extends from current expiry)");
    println!("  cancel [person]            Request cancellation (reversible)");
    println!("  reactivate [person]        Reactivate an expired or cancelling membership");
    println!("  finalize [person]          Make a pending cancellation permanent");
    println!("  unlink [person]            Remove a membership and its history");
    println!("  history [person]           Show a membership's event history");
    println!("  active                     List active memberships");
    println!();
    println!("  find <fragment>            Search persons and clubs by name");
    println!("  tagged <tag>               List persons and clubs with a tag");
    println!("  save                       Write the roster to disk now");
    println!("  help, exit");
}
