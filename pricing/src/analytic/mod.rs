pub mod black_scholes;
pub mod normal;
