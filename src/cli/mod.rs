//!
//! dashauth CLI
//! ------------
//! Interactive interpreter over the mock session service: the dashboard's login
//! screen distilled to a terminal loop. Presentation only; all behavior lives
//! in `identity`.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::identity::{AuthContext, AuthService};

fn print_usage() {
    eprintln!(
        "Commands:\n  login <username> <password>   authenticate and start a session\n  whoami                        show the current session's user\n  users                         list the known demo accounts\n  logout                        end the current session\n  help                          show this help\n  quit | exit                   exit the interpreter\n\nDemo credentials: admin / password123, user1 / password123"
    );
}

/// Entry point for the interactive loop. Builds the service from config and
/// restores any persisted session before prompting.
pub async fn run(cfg: Config) -> Result<()> {
    let service = Arc::new(AuthService::new(&cfg)?);
    let ctx = AuthContext::new(service);
    if let Some(u) = ctx.user() {
        println!("restored session for {} ({:?})", u.username, u.role);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();
    println!("dashauth interpreter. Type 'help' for commands.");
    loop {
        input.clear();
        print!("> ");
        let _ = stdout.flush();
        if stdin.read_line(&mut input).is_err() {
            break;
        }
        if input.is_empty() {
            // EOF
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        let up = line.to_uppercase();
        if up == "EXIT" || up == "QUIT" {
            break;
        }
        if up == "HELP" {
            print_usage();
            continue;
        }
        if up.starts_with("LOGIN") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                eprintln!("usage: login <username> <password>");
                continue;
            }
            match ctx.login(parts[1], parts[2]).await {
                Ok(user) => println!("logged in as {} ({:?})", user.username, user.role),
                Err(e) => eprintln!("login failed: {}", e.message()),
            }
            continue;
        }
        if up == "WHOAMI" {
            match ctx.user() {
                Some(u) => println!("{} <{}> role={:?}", u.username, u.email, u.role),
                None => println!("no active session"),
            }
            continue;
        }
        if up == "USERS" {
            for u in ctx.service().directory().users() {
                println!("{}  {} <{}> role={:?}", u.id, u.username, u.email, u.role);
            }
            continue;
        }
        if up == "LOGOUT" {
            ctx.logout();
            println!("logged out");
            continue;
        }
        eprintln!("unrecognized command: {}", line);
        print_usage();
    }
    Ok(())
}
