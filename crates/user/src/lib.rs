mod preferences;

pub use preferences::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;

        pub use command::*;
    }
}
