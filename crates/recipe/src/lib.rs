mod matcher;
mod nutrition;
mod ranker;

pub use matcher::*;
pub use nutrition::*;
pub use ranker::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod engine;
        mod ingredient;

        pub use command::*;
        pub use engine::*;
        pub use ingredient::*;
    }
}
