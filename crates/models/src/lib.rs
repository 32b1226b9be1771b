pub mod errors;
pub mod db;
pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;

#[cfg(test)]
mod tests;
