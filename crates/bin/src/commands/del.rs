//! The del command.

use keylist::Bindings;

use super::Outcome;
use crate::cli::DelArgs;

/// Run the del command
pub fn run(vars: &mut Bindings, args: &DelArgs) -> Result<Outcome, keylist::Error> {
    let keys: Vec<&str> = args.keys.iter().map(String::as_str).collect();
    vars.delete_paths(&args.var, &keys)?;
    Ok(Outcome {
        output: None,
        modified: true,
    })
}
