/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Partition, PartitionError};

use std::str::FromStr;

/// Accepts the parts separated by commas and/or whitespace, optionally
/// surrounded by brackets, in any order: `4,3,3,1`, `1 3 3 4`, `[4, 3, 3, 1]`.
///
/// This is also the format produced by `Display`.
impl FromStr for Partition {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Partition, PartitionError>
    {
        let s = s.trim();
        let s = match (s.starts_with('['), s.ends_with(']')) {
            (true, true) if s.len() >= 2 => &s[1..s.len() - 1],
            (false, false) => s,
            _ => return Err(PartitionError::Parse { token: s.to_string() }),
        };

        let mut parts = vec![];
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let value: i64 = token.parse()
                .map_err(|_| PartitionError::Parse { token: token.to_string() })?;
            if value < 1 || value > i64::from(u32::max_value()) {
                return Err(PartitionError::InvalidPart { part: value });
            }
            parts.push(value as u32);
        }
        Ok(Partition::new_unchecked(parts))
    }
}
