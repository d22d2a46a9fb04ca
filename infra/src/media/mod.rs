//! Image storage module

pub mod local_store;

pub use local_store::LocalImageStore;

#[cfg(test)]
mod tests;
