mod aggregation;
mod categorization;

pub use aggregation::*;
pub use categorization::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod query;

        pub use query::*;
    }
}
