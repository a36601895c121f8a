#[cfg(test)]
mod common;

#[cfg(test)]
mod intake_tests;
