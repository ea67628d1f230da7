use crate::{
    cli::{
        actions::{console::Console, session::screen_error},
        globals::GlobalArgs,
    },
    features::{
        auth::{guards::AppRoute, types::UserSummary},
        users::{
            admin::{ToggleOutcome, toggle_user_status},
            client,
        },
    },
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub struct ListArgs {
    pub globals: GlobalArgs,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug)]
pub struct StatusArgs {
    pub globals: GlobalArgs,
    pub id: String,
    pub activate: bool,
    pub assume_yes: bool,
}

/// # Errors
/// Returns "login required" for non-admins, else "Failed to load users".
pub async fn list(args: ListArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    console.require(AppRoute::Admin).await?;

    let users = client::list_users(&console.api, args.page, args.limit)
        .await
        .map_err(|err| screen_error(&err, "Failed to load users"))?;

    println!("Page {} (limit {})", args.page, args.limit);
    for line in render_table(&users) {
        println!("{line}");
    }
    Ok(())
}

/// # Errors
/// Returns "login required" for non-admins, "Action failed" when the request
/// fails, or an error if stdin cannot be read.
pub async fn set_status(args: StatusArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    console.require(AppRoute::Admin).await?;

    // The toggle flips from the given snapshot: an inactive user is activated.
    let snapshot_is_active = !args.activate;
    let mut prompt_error = None;
    let outcome = toggle_user_status(&console.api, &args.id, snapshot_is_active, |prompt| {
        if args.assume_yes {
            return true;
        }
        ask(prompt).unwrap_or_else(|err| {
            prompt_error = Some(err);
            false
        })
    })
    .await
    .map_err(|err| screen_error(&err, "Action failed"))?;

    if let Some(err) = prompt_error {
        return Err(err).context("failed to read confirmation");
    }

    match outcome {
        ToggleOutcome::Applied(change) => println!("User {} {}d", args.id, change.verb()),
        ToggleOutcome::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

fn ask(prompt: &str) -> io::Result<bool> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{prompt} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn render_table(users: &[UserSummary]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<8} {:<32} {:<24} {:<6} {}",
        "ID", "EMAIL", "FULL NAME", "ROLE", "STATUS"
    )];
    lines.extend(users.iter().map(|user| {
        format!(
            "{:<8} {:<32} {:<24} {:<6} {}",
            user.id,
            user.email,
            user.full_name,
            user.role.as_str(),
            if user.is_active { "active" } else { "inactive" }
        )
    }));
    lines
}
