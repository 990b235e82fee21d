use crate::cli::context::CliContext;
use crate::model::{Club, Id, Membership, Person};
use crate::ops::membership_ops;
use crate::queries::membership_queries;

pub fn join(ctx: &mut CliContext, args: &str) {
    let (person, club) = match resolve_pair(ctx, args) {
        Some(pair) => pair,
        None => return,
    };
    let months = match prompt_months(ctx, "Months: ") {
        Some(m) => m,
        None => return,
    };

    match membership_ops::join(&mut ctx.roster, &person, &club, months, CliContext::today()) {
        Ok(_) => println!("{} joined {} for {} month(s).", person.name, club.name, months),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn renew(ctx: &mut CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };
    let months = match prompt_months(ctx, "Months: ") {
        Some(m) => m,
        None => return,
    };

    match membership_ops::renew(&mut ctx.roster, id, months, CliContext::today()) {
        Ok(m) => println!(
            "Renewed {} / {}; now expires {}.",
            person.name, club.name, m.expiry_date
        ),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn cancel(ctx: &mut CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };

    match membership_ops::cancel(&mut ctx.roster, id, CliContext::today()) {
        Ok(_) => println!(
            "Cancellation pending for {} / {}. Use 'finalize' to make it permanent or 'reactivate' to undo.",
            person.name, club.name
        ),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn reactivate(ctx: &mut CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };
    let months = match prompt_months(ctx, "Months: ") {
        Some(m) => m,
        None => return,
    };

    match membership_ops::reactivate(&mut ctx.roster, id, months, CliContext::today()) {
        Ok(m) => println!(
            "Reactivated {} / {}; now expires {}.",
            person.name, club.name, m.expiry_date
        ),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn finalize(ctx: &mut CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };

    match membership_ops::finalize_cancellation(&mut ctx.roster, id, CliContext::today()) {
        Ok(_) => println!("Membership {} / {} is now cancelled.", person.name, club.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn unlink(ctx: &mut CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };

    let confirm = ctx
        .prompt(&format!(
            "Unlink {} from {}? This removes the membership and its history. (y/N): ",
            person.name, club.name
        ))
        .unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match membership_ops::unlink(&mut ctx.roster, id) {
        Ok(_) => println!("Unlinked {} from {}.", person.name, club.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn history(ctx: &CliContext, args: &str) {
    let (person, club, id) = match resolve_membership(ctx, args) {
        Some(found) => found,
        None => return,
    };
    let membership = match ctx.roster.membership(id) {
        Some(m) => m,
        None => return,
    };

    println!();
    println!(
        "{} / {} — {} (joined {}, expires {})",
        person.name,
        club.name,
        membership.effective_status(CliContext::today()),
        membership.join_date,
        membership.expiry_date
    );
    for event in &membership.history {
        println!(
            "  {} {:?}: +{} month(s), expiry {}",
            event.date, event.kind, event.months_added, event.new_expiry
        );
    }
    println!();
}

pub fn active(ctx: &CliContext) {
    let today = CliContext::today();
    let memberships = membership_queries::active(&ctx.roster, today);
    if memberships.is_empty() {
        println!("No active memberships.");
        return;
    }
    println!("Active memberships ({}):", memberships.len());
    for m in memberships {
        let person = ctx
            .roster
            .person(m.person_id)
            .map(|p| p.name.as_str().to_string())
            .unwrap_or_else(|| m.person_id.to_string());
        let club = ctx
            .roster
            .club(m.club_id)
            .map(|c| c.name.as_str().to_string())
            .unwrap_or_else(|| m.club_id.to_string());
        println!("  {} / {} (expires {})", person, club, m.expiry_date);
    }
}

fn resolve_pair(ctx: &CliContext, args: &str) -> Option<(Person, Club)> {
    let person = if args.trim().is_empty() {
        let query = ctx.prompt("Person: ")?;
        ctx.find_person(&query)?
    } else {
        ctx.find_person(args)?
    };
    let query = ctx.prompt("Club: ")?;
    let club = ctx.find_club(&query)?;
    Some((person, club))
}

fn resolve_membership(ctx: &CliContext, args: &str) -> Option<(Person, Club, Id<Membership>)> {
    let (person, club) = resolve_pair(ctx, args)?;
    match membership_queries::between(&ctx.roster, &person, &club) {
        Some(m) => Some((person, club, m.id)),
        None => {
            println!("{} has no membership with {}.", person.name, club.name);
            None
        }
    }
}

fn prompt_months(ctx: &CliContext, prompt: &str) -> Option<u32> {
    let input = ctx.prompt(prompt)?;
    match input.parse::<u32>() {
        Ok(months) => Some(months),
        Err(_) => {
            println!("Months must be a whole number.");
            None
        }
    }
}
