/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks that run after config merging, on the effective config.

use crate::config::*;
use failure::Error;

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        check_cli(&self.cli)?;
        if self.sampler.max_attempts == Some(0) {
            warn!("sampler.max-attempts is 0; every rejection loop will fail immediately");
        }
        Ok(ValidatedSettings(self))
    }
}

fn check_cli(cli: &Cli) -> Result<(), Error> {
    if cli.min_weight < 1 {
        bail!("cli.min-weight must be at least 1");
    }
    if cli.min_weight > cli.max_weight {
        bail!("cli.min-weight ({}) exceeds cli.max-weight ({})", cli.min_weight, cli.max_weight);
    }
    Ok(())
}
