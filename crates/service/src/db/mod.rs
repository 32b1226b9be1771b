pub mod pizzeria_store;
