//! The keys command.

use keylist::Bindings;

use super::Outcome;
use crate::cli::KeysArgs;

/// Run the keys command
pub fn run(vars: &mut Bindings, args: &KeysArgs) -> Result<Outcome, keylist::Error> {
    let keys = vars.get_keys(&args.var, args.key.as_deref())?;
    Ok(Outcome {
        output: Some(keys.to_string()),
        modified: false,
    })
}
