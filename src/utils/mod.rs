//! General-purpose helpers: ranking, argv parsing and token substitution.

pub mod argv;
pub mod rank;
pub mod tokens;

pub use argv::{parse_argv, typecast, ArgValue};
pub use rank::{rankdata, RankMethod, RankOrder, Ranks};
pub use tokens::replace_tokens;
