mod stock;

pub use stock::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;

        pub use command::*;
    }
}
