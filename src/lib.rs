// Retail sales analytics over a CSV extract.
//
// The crate loads a sales CSV once and serves five canned reports
// (monthly sales by branch, price statistics per product, weekly sales
// totals, product preference ranking, overall sales distribution) to two
// thin shells: a terminal menu and a single-page web form.

pub mod error;
pub mod loader;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;
pub mod web;
