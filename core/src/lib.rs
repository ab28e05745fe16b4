pub mod network;
pub mod runner;
pub mod tftp;
pub mod tools;

#[cfg(test)]
mod testing;
