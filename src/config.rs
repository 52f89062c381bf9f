// src/config.rs
use simple_ls_domain::{Configuration, HiddenPolicy, SortMode};

use crate::cli::Args;

impl From<Args> for Configuration {
    fn from(args: Args) -> Self {
        Self {
            hidden: HiddenPolicy::from_flags(args.all, args.almost_all),
            long_format: args.long,
            sort: SortMode::from_flags(args.size, args.modification_time, args.access_time),
            directory: args.directory,
        }
    }
}
