pub mod byte_utils;
pub mod pump_amm;
