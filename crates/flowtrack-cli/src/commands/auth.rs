use std::path::Path;

use flowtrack_core::SessionStore;

use crate::cli::AuthCommand;
use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_auth(command: AuthCommand, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let session = SessionStore::new(&store);

    match command {
        AuthCommand::Signup {
            name,
            email,
            password,
        } => {
            if let Some(existing) = session.current_user() {
                println!("Detected account for {}.", existing.email);
            }
            let profile = session.sign_up(&name, &email, &password)?;
            println!("Account created for {}", profile.email);
        }
        AuthCommand::Login { email, password } => {
            if let Some(existing) = session.current_user() {
                println!("Detected account for {}.", existing.email);
            }
            let profile = session.log_in(&email, &password)?;
            println!("Logged in as {}", profile.email);
        }
        AuthCommand::Logout => {
            session.log_out();
            println!("Logged out");
        }
        AuthCommand::Status => match session.current_user() {
            Some(profile) if session.is_authenticated() => {
                println!("Logged in as {} <{}>", profile.name, profile.email);
            }
            Some(profile) => {
                println!(
                    "Account for {} exists but the session is incomplete.",
                    profile.name
                );
            }
            None => println!("Not logged in."),
        },
    }
    Ok(())
}
