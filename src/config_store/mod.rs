//! Read-only access to the package manager's configuration.

mod apt;

pub use apt::AptConfigStore;

/// Key/value lookups against a configuration store.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Raw string value, absent if unset.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Integer value, absent if unset. Values that are not numbers read as 0.
    fn get_int(&self, key: &str) -> Option<i64>;
}
