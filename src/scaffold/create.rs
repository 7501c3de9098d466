//! End-to-end creation of a new RFC.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::config::Layout;
use crate::error::Error;
use crate::scaffold::repo::{Commit, RepoClient};
use crate::scaffold::slug::slugify;
use crate::scaffold::template::{fill_template, index_entry, read_template};
use crate::scaffold::RfcRequest;

/// Outcome of [`create_rfc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRfc {
    pub branch: String,
    pub pr_link: String,
    /// Zero-padded RFC number, e.g. `0042`.
    pub number: String,
    /// RFC path relative to the repository root, e.g. `text/0042-foo.md`.
    pub file: String,
    pub index_entry: String,
}

/// Pull request URL from `gh pr create` output: its last token.
pub fn parse_pr_link(output: &str) -> Result<String, Error> {
    output
        .split_whitespace()
        .last()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidPullRequest(output.to_string()))
}

/// Pull request number: the last path segment of its URL.
pub fn pr_number(link: &str) -> Result<&str, Error> {
    let number = link.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidPullRequest(link.to_string()));
    }
    Ok(number)
}

/// RFC number derived from a pull request number, padded to four digits.
pub fn rfc_number(pr_number: &str) -> String {
    format!("{:0>4}", pr_number)
}

/// Create the branch, pull request and document for a new RFC.
///
/// Runs the whole flow in the repository at `layout.root`: an empty commit is
/// pushed first so the pull request number can be used as the RFC number,
/// then the document and index entry are amended into that commit.
pub fn create_rfc<C: RepoClient>(
    client: &C,
    layout: &Layout,
    request: &RfcRequest,
    date: NaiveDate,
) -> Result<CreatedRfc, Error> {
    let slug = slugify(&request.name);
    if slug.is_empty() {
        return Err(Error::other(format!(
            "RFC name {:?} has no letters or digits",
            request.name
        )));
    }
    let template = read_template(&layout.template)?;

    client.check_auth()?;

    let branch = format!("rfc/{}", slug);
    client.create_branch(&branch)?;
    client.commit(&Commit::Empty {
        message: format!("rfc({}): {}", request.category, request.name),
    })?;
    client.push(&layout.remote.name, &branch, false)?;
    info!(branch = %branch, "Pushed RFC branch");

    let pr_link = parse_pr_link(&client.create_pull_request()?)?;
    let pr = pr_number(&pr_link)?.to_string();
    let number = rfc_number(&pr);
    let file = layout.document_link(&format!("{}-{}.{}", number, slug, layout.extension));
    info!(pr = %pr_link, file = %file, "Created pull request");

    let body = format!(
        "TODO. [Rendered RFC](https://github.com/{}/blob/{}/{})",
        layout.remote.repository, branch, file
    );
    client.edit_pull_request(&pr, &body)?;

    let document = fill_template(&template, request.category, &pr_link, date);
    fs::write(layout.root.join(&file), document)?;

    let entry = index_entry(&number, &slug, &file, &request.name);
    append_line(&layout.index, &entry)?;

    let index_path = layout
        .index
        .strip_prefix(&layout.root)
        .unwrap_or(&layout.index);
    client.stage(&[index_path, Path::new(&file)])?;
    client.commit(&Commit::Amend)?;
    client.push(&layout.remote.name, &branch, true)?;

    Ok(CreatedRfc {
        branch,
        pr_link,
        number,
        file,
        index_entry: entry,
    })
}

/// Append `line` to a file, starting a new line if the file lacks a
/// trailing newline.
fn append_line(path: &Path, line: &str) -> Result<(), Error> {
    let needs_newline = match fs::read(path) {
        Ok(content) => !content.is_empty() && !content.ends_with(b"\n"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        writeln!(file)?;
    }
    writeln!(file, "{}", line)?;
    Ok(())
}
