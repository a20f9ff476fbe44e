//! Integration test suite modules

mod contact;
mod navigation;
mod responsive;
