pub mod host;

#[cfg(test)]
mod host_test;

pub use host::HostResource;
