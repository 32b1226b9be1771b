//! Pieces shared by the server crate and the binaries: logging setup and
//! small wire types that do not belong to the pizzeria domain.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }
}
