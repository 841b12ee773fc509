mod grouping;
mod nutrition;

pub use grouping::*;
pub use nutrition::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
