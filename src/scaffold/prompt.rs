//! Interactive input for `rfc new`.

use std::io::{BufRead, Write};

use crate::error::Error;
use crate::scaffold::{Category, RfcRequest};

const NAME_PROMPT: &str =
    "What's the name of your RFC? This will be the title of your pull request:";

const CATEGORY_PROMPT: &str = "\
What type of RFC is this?
1: feature
2: decision
3: informational

Press the corresponding number and hit enter:";

/// Gather the RFC name and category, prompting for whichever is missing.
pub fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: Option<String>,
    category: Option<Category>,
) -> Result<RfcRequest, Error> {
    let name = match name {
        Some(name) => name,
        None => ask(input, output, NAME_PROMPT)?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::other("RFC name must not be empty"));
    }

    let category = match category {
        Some(category) => category,
        None => Category::from_choice(&ask(input, output, CATEGORY_PROMPT)?)?,
    };

    Ok(RfcRequest { name, category })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, Error> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::other("Unexpected end of input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
