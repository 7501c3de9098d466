//! Scaffold a new RFC.

use std::path::Path;

use tracing::warn;

use crate::config::Layout;
use crate::error::{CommandError, Error};
use crate::scaffold::{create_rfc, prompt_request, Category, ShellClient};

/// Run the new command.
pub fn run(root: &Path, name: Option<String>, category: Option<Category>) -> Result<(), Error> {
    let layout = Layout::load(root)?;

    let stdin = std::io::stdin();
    let request = prompt_request(&mut stdin.lock(), &mut std::io::stdout(), name, category)?;

    let client = ShellClient::new(root);
    let today = chrono::Local::now().date_naive();

    let created = match create_rfc(&client, &layout, &request, today) {
        Ok(created) => created,
        Err(Error::Command(CommandError::Spawn { program, source })) if program == "gh" => {
            warn!(error = %source, "GitHub CLI not available");
            println!("Please install and set up the GitHub CLI: https://cli.github.com/");
            return Err(Error::Command(CommandError::Spawn { program, source }));
        }
        Err(e) => return Err(e),
    };

    println!("RFC created!");
    println!("branch name: {}", created.branch);
    println!("PR: {}", created.pr_link);
    println!("Please edit {} and add your RFC content.", created.file);

    Ok(())
}
