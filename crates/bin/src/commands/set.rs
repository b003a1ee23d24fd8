//! The set command.

use keylist::Bindings;

use super::Outcome;
use crate::cli::SetArgs;

/// Run the set command
pub fn run(vars: &mut Bindings, args: &SetArgs) -> Result<Outcome, keylist::Error> {
    let pairs: Vec<&str> = args.args.iter().map(String::as_str).collect();
    vars.set_paths_args(&args.var, &pairs)?;
    Ok(Outcome {
        output: None,
        modified: true,
    })
}
