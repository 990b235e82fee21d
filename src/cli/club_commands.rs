use crate::cli::context::CliContext;
use crate::ops::club_ops;
use crate::queries::{club_queries, membership_queries};

pub fn list(ctx: &CliContext) {
    let clubs = club_queries::all(&ctx.roster);
    if clubs.is_empty() {
        println!("No clubs yet. Use 'add-club' to create one.");
        return;
    }
    println!("Clubs ({}):", clubs.len());
    for c in clubs {
        println!("  {} ({} membership(s))", c.name, c.membership_ids.len());
    }
}

pub fn add(ctx: &mut CliContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Club name: ") {
            Some(s) if !s.is_empty() => s,
            _ => {
                println!("Name cannot be empty.");
                return;
            }
        }
    };

    let email = ctx.prompt("Email: ").unwrap_or_default();
    let phone = ctx.prompt("Phone (optional): ").unwrap_or_default();
    let address = ctx.prompt("Address (optional): ").unwrap_or_default();
    let tags_line = ctx.prompt("Tags (space-separated, optional): ").unwrap_or_default();
    let tags: Vec<&str> = tags_line.split_whitespace().collect();

    match club_ops::add_club(&mut ctx.roster, &name, &phone, &email, &address, &tags) {
        Ok(c) => println!("Added club {}", c.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show-club <name>");
        return;
    }
    let club = match ctx.find_club(args) {
        Some(c) => c,
        None => return,
    };

    println!();
    println!("Name: {}", club.name);
    println!("Email: {}", club.email);
    println!("Phone: {}", if club.phone.is_present() { club.phone.as_str() } else { "(none)" });
    println!("Address: {}", if club.address.is_present() { club.address.as_str() } else { "(none)" });
    if club.tags.is_empty() {
        println!("Tags: (none)");
    } else {
        let tags: Vec<&str> = club.tags.iter().map(|t| t.as_str()).collect();
        println!("Tags: {}", tags.join(", "));
    }

    let memberships = membership_queries::for_club(&ctx.roster, &club);
    if memberships.is_empty() {
        println!("Members: (none)");
    } else {
        println!("Members:");
        let today = CliContext::today();
        for m in memberships {
            let person = ctx
                .roster
                .person(m.person_id)
                .map(|p| p.name.as_str().to_string())
                .unwrap_or_else(|| m.person_id.to_string());
            println!(
                "  {} — {} (expires {})",
                person,
                m.effective_status(today),
                m.expiry_date
            );
        }
    }
    println!();
}

pub fn edit(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: edit-club <name>");
        return;
    }
    let club = match ctx.find_club(args) {
        Some(c) => c,
        None => return,
    };

    println!("Editing {} (Enter keeps the current value, '-' clears an optional field)", club.name);

    let name_in = ctx.prompt(&format!("Name [{}]: ", club.name)).unwrap_or_default();
    let email_in = ctx.prompt(&format!("Email [{}]: ", club.email)).unwrap_or_default();
    let phone_in = ctx.prompt(&format!("Phone [{}]: ", club.phone)).unwrap_or_default();
    let address_in = ctx
        .prompt(&format!("Address [{}]: ", club.address))
        .unwrap_or_default();
    let tags_in = ctx.prompt("Tags: ").unwrap_or_default();

    let name = keep_or(&name_in);
    let email = keep_or(&email_in);
    let phone = keep_clear_or(&phone_in);
    let address = keep_clear_or(&address_in);
    let tag_words: Vec<&str> = tags_in.split_whitespace().collect();
    let tags: Option<&[&str]> = match tags_in.as_str() {
        "" => None,
        "-" => Some(&[]),
        _ => Some(tag_words.as_slice()),
    };

    match club_ops::edit_club(&mut ctx.roster, &club, name, phone, email, address, tags) {
        Ok(c) => println!("Updated {}", c.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: remove-club <name>");
        return;
    }
    let club = match ctx.find_club(args) {
        Some(c) => c,
        None => return,
    };

    let confirm = ctx
        .prompt(&format!("Remove {}? (y/N): ", club.name))
        .unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match club_ops::remove_club(&mut ctx.roster, &club) {
        Ok(c) => println!("Removed {}.", c.name),
        Err(e) => ctx.print_error(&e),
    }
}

fn keep_or(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

fn keep_clear_or(input: &str) -> Option<&str> {
    match input {
        "" => None,
        "-" => Some(""),
        other => Some(other),
    }
}
