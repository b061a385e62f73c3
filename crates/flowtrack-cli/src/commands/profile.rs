use std::path::Path;

use flowtrack_core::views::ProfileView;
use flowtrack_core::SessionStore;

use crate::cli::ProfileCommand;
use crate::commands::common::{ensure_page_access, open_store};
use crate::error::CliError;

pub fn run_profile(command: ProfileCommand, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    ensure_page_access(&store, "profile")?;

    match command {
        ProfileCommand::Show => {
            let Some(view) = ProfileView::load(&store) else {
                println!("No profile to show.");
                return Ok(());
            };
            println!("{}  {}", view.avatar_initial, view.name);
            println!("   {}", view.email);
            println!("   Member since {}", view.member_since);
            println!("   {} items", view.total_items);
        }
        ProfileCommand::Update { name, email } => {
            let profile = SessionStore::new(&store).update_profile(&name, &email)?;
            println!("Profile updated for {}", profile.email);
        }
    }
    Ok(())
}
