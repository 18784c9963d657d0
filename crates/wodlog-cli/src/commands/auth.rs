use clap::Subcommand;
use std::io::{BufRead, Write};
use wodlog_core::AppContext;

use super::{open_context, print_json, CliResult};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored user
    Logout,
    /// Show who is signed in
    Status {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AuthAction) -> CliResult {
    let mut ctx = open_context()?;
    let outcome = apply(&mut ctx, action);
    let torn_down = ctx.teardown();
    outcome?;
    Ok(torn_down?)
}

fn apply(ctx: &mut AppContext, action: AuthAction) -> CliResult {
    match action {
        AuthAction::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let user = ctx.auth_mut()?.login(&email, &password)?;
            println!("Signed in as {} <{}>", user.name, user.email);
        }
        AuthAction::Register {
            name,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let user = ctx.auth_mut()?.register(&name, &email, &password)?;
            println!("Welcome, {} ({})", user.name, user.initials());
        }
        AuthAction::Logout => {
            ctx.auth_mut()?.logout()?;
            println!("Signed out.");
        }
        AuthAction::Status { json } => {
            let user = ctx.auth()?.user();
            match user {
                Some(user) if json => print_json(user)?,
                Some(user) => println!("{} <{}> [{}]", user.name, user.email, user.initials()),
                None if json => println!("null"),
                None => println!("Not signed in."),
            }
        }
    }

    Ok(())
}

fn password_or_prompt(password: Option<String>) -> std::io::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
