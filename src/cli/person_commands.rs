use crate::cli::context::CliContext;
use crate::ops::person_ops;
use crate::queries::{membership_queries, person_queries};

pub fn list(ctx: &CliContext) {
    let persons = person_queries::all(&ctx.roster);
    if persons.is_empty() {
        println!("No persons yet. Use 'add-person' to create one.");
        return;
    }
    println!("Persons ({}):", persons.len());
    for p in persons {
        println!("  {} <{}>", p.name, p.email);
    }
}

pub fn add(ctx: &mut CliContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name: ") {
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

    match person_ops::add_person(&mut ctx.roster, &name, &phone, &email, &address, &tags) {
        Ok(p) => println!("Added {} <{}>", p.name, p.email),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show-person <name>");
        return;
    }
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    println!();
    println!("Name: {}", person.name);
    println!("Email: {}", person.email);
    println!("Phone: {}", if person.phone.is_present() { person.phone.as_str() } else { "(none)" });
    println!("Address: {}", if person.address.is_present() { person.address.as_str() } else { "(none)" });
    if person.tags.is_empty() {
        println!("Tags: (none)");
    } else {
        let tags: Vec<&str> = person.tags.iter().map(|t| t.as_str()).collect();
        println!("Tags: {}", tags.join(", "));
    }

    let memberships = membership_queries::for_person(&ctx.roster, &person);
    if memberships.is_empty() {
        println!("Memberships: (none)");
    } else {
        println!("Memberships:");
        let today = CliContext::today();
        for m in memberships {
            let club = ctx
                .roster
                .club(m.club_id)
                .map(|c| c.name.as_str().to_string())
                .unwrap_or_else(|| m.club_id.to_string());
            println!(
                "  {} — {} (expires {})",
                club,
                m.effective_status(today),
                m.expiry_date
            );
        }
    }
    println!();
}

pub fn edit(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: edit-person <name>");
        return;
    }
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    println!("Editing {} (Enter keeps the current value, '-' clears an optional field)", person.name);

    let name_in = ctx.prompt(&format!("Name [{}]: ", person.name)).unwrap_or_default();
    let email_in = ctx.prompt(&format!("Email [{}]: ", person.email)).unwrap_or_default();
    let phone_in = ctx
        .prompt(&format!("Phone [{}]: ", person.phone))
        .unwrap_or_default();
    let address_in = ctx
        .prompt(&format!("Address [{}]: ", person.address))
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

    match person_ops::edit_person(&mut ctx.roster, &person, name, phone, email, address, tags) {
        Ok(p) => println!("Updated {} <{}>", p.name, p.email),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &mut CliContext, args: &str) {
    if args.is_empty() {
        println!("Usage: remove-person <name>");
        return;
    }
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    let confirm = ctx
        .prompt(&format!("Remove {}? (y/N): ", person.name))
        .unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match person_ops::remove_person(&mut ctx.roster, &person) {
        Ok(p) => println!("Removed {}.", p.name),
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

/// Enter keeps the field, '-' clears it (optional fields accept blank).
fn keep_clear_or(input: &str) -> Option<&str> {
    match input {
        "" => None,
        "-" => Some(""),
        other => Some(other),
    }
}
